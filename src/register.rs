use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AsmError;

/// Canonical names of the 32 general-purpose registers, by index.
pub const NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", //
    "t0", "t1", "t2", "t3", "t4", "t5", "t6", "t7", //
    "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", //
    "t8", "t9", "k0", "k1", "gp", "sp", "fp", "ra",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Register(u8);

impl Register {
    pub const ZERO: Register = Register(0);

    pub fn new(index: u8) -> Option<Self> {
        (index < 32).then_some(Self(index))
    }

    /// Takes the low five bits of an instruction field.
    pub(crate) fn from_field(bits: u32) -> Self {
        Self((bits & 0x1F) as u8)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        NAMES[self.0 as usize]
    }

    pub fn from_alias(name: &str) -> Option<Self> {
        // s8 is the older name for the frame pointer
        if name.eq_ignore_ascii_case("s8") {
            return Some(Self(30));
        }
        NAMES
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
            .map(|i| Self(i as u8))
    }
}

impl FromStr for Register {
    type Err = AsmError;

    /// Accepts `$t0`, `t0`, `$8` or `8`.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || AsmError::InvalidRegister { token: token.to_string() };
        let body = token.trim();
        let body = body.strip_prefix('$').unwrap_or(body);
        if body.is_empty() {
            return Err(invalid());
        }
        if body.bytes().all(|b| b.is_ascii_digit()) {
            return body
                .parse::<u8>()
                .ok()
                .and_then(Register::new)
                .ok_or_else(invalid);
        }
        Register::from_alias(body).ok_or_else(invalid)
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}
