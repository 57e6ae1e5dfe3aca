use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::render::{RenderMode, VhdlLayout};

bitflags! {
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags: u8 {
const ADD_NOPS = 1 << 0; // pad each instruction with pipeline-flush NOPs
const AS_VHDL = 1 << 1; // render as a VHDL aggregate
}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub flags: Flags,
    pub layout: VhdlLayout,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            flags: Flags::empty(),
            layout: VhdlLayout::Words,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("unknown option `{0}` (expected add_nops, as_vhdl or vhdl_bytes)")]
    Unknown(String),
}

impl Options {
    pub fn new(flags: Flags) -> Self {
        Self { flags, ..Self::default() }
    }

    pub fn add_nops(&self) -> bool {
        self.flags.contains(Flags::ADD_NOPS)
    }

    pub fn as_vhdl(&self) -> bool {
        self.flags.contains(Flags::AS_VHDL)
    }

    pub fn render_mode(&self) -> RenderMode {
        if self.as_vhdl() {
            RenderMode::Vhdl(self.layout)
        } else {
            RenderMode::Plain
        }
    }

    /// Applies one named option. `vhdl_bytes` implies `as_vhdl`.
    pub fn enable(&mut self, name: &str) -> Result<(), OptionsError> {
        match name {
            "add_nops" => self.flags.insert(Flags::ADD_NOPS),
            "as_vhdl" => self.flags.insert(Flags::AS_VHDL),
            "vhdl_bytes" => {
                self.flags.insert(Flags::AS_VHDL);
                self.layout = VhdlLayout::Bytes;
            }
            other => return Err(OptionsError::Unknown(other.to_string())),
        }
        Ok(())
    }
}

impl FromStr for Options {
    type Err = OptionsError;

    /// Parses a comma-separated option list such as `"add_nops, as_vhdl"`.
    fn from_str(list: &str) -> Result<Self, Self::Err> {
        let mut opts = Options::default();
        for name in list.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            opts.enable(name)?;
        }
        Ok(opts)
    }
}
