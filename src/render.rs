use serde::{Deserialize, Serialize};

use crate::program::Program;

/// Element width used in the VHDL aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VhdlLayout {
    /// One `x"hhhhhhhh"` element per word.
    #[default]
    Words,
    /// Four big-endian `8ux"hh"` elements per word, for byte-wide memories.
    Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Plain,
    Vhdl(VhdlLayout),
}

pub fn render(program: &Program, mode: RenderMode) -> String {
    match mode {
        RenderMode::Plain => render_plain(program.words()),
        RenderMode::Vhdl(layout) => render_vhdl(program.words(), layout),
    }
}

/// One 8-digit lower-case hex word per line, no trailing newline.
pub fn render_plain(words: impl IntoIterator<Item = u32>) -> String {
    words
        .into_iter()
        .map(|w| format!("{w:08x}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A parenthesised VHDL aggregate, one word per line:
///
/// ```text
/// (
///     x"20010005",
///     x"00000000"
/// )
/// ```
pub fn render_vhdl(words: impl IntoIterator<Item = u32>, layout: VhdlLayout) -> String {
    let rows: Vec<String> = words
        .into_iter()
        .map(|w| match layout {
            VhdlLayout::Words => format!("    x\"{w:08x}\""),
            VhdlLayout::Bytes => {
                let bytes: Vec<String> =
                    w.to_be_bytes().iter().map(|b| format!("8ux\"{b:02x}\"")).collect();
                format!("    {}", bytes.join(", "))
            }
        })
        .collect();
    if rows.is_empty() {
        return "()".to_string();
    }
    format!("(\n{}\n)", rows.join(",\n"))
}
