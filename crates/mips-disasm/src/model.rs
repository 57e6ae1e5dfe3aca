use anyhow::Result;
use std::path::Path;

use mips_asm::parse_listing;

/// Words of an instruction memory, word-addressed from `base`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub base: u32,
    pub words: Vec<u32>,
}

impl Image {
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.words
            .iter()
            .enumerate()
            .map(|(i, &w)| (self.base.wrapping_add(4 * i as u32), w))
    }
}

/// Loads a plain or VHDL listing produced by `mips-asm`.
pub fn load_listing(path: &Path, base: u32) -> Result<Image> {
    let text = std::fs::read_to_string(path)?;
    anyhow::ensure!(base % 4 == 0, "--base must be word aligned");
    let words = parse_listing(&text)?;
    Ok(Image { base, words })
}
