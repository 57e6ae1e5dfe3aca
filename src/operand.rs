//! Operand resolution: numeric literals and `offset(base)` memory operands.
//!
//! Literal grammar:
//! - decimal: digits with an optional leading `-`
//! - hexadecimal: `0x` followed by hex digits
//! - binary: `0b` or `2_` followed by `0`/`1` digits
//!
//! Binary digits may be grouped with `_`. The prefix is checked before any
//! digit is parsed, so a token matches exactly one grammar. A well-formed
//! literal too large for `i64` saturates and is left for [`Immediate::fit`]
//! to reject as out of range.

use std::fmt;
use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

use crate::error::AsmError;
use crate::register::Register;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Radix {
    Decimal,
    Hex,
    Binary,
}

impl Radix {
    fn base(self) -> u32 {
        match self {
            Radix::Decimal => 10,
            Radix::Hex => 16,
            Radix::Binary => 2,
        }
    }
}

/// The instruction field an immediate is packed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImmField {
    /// 16-bit two's-complement field (addi, lw/sw offsets, branches).
    Signed16,
    /// 16-bit zero-extended field (andi, ori, xori).
    Unsigned16,
    /// 26-bit jump target.
    Target26,
}

impl ImmField {
    pub fn bits(self) -> u32 {
        match self {
            ImmField::Signed16 | ImmField::Unsigned16 => 16,
            ImmField::Target26 => 26,
        }
    }

    pub fn mask(self) -> u32 {
        (1u32 << self.bits()) - 1
    }

    /// Inclusive range accepted for a literal written in `radix`.
    /// Hex and binary literals are raw bit patterns, so a signed field takes
    /// them unsigned up to the field mask.
    pub fn range(self, radix: Radix) -> (i64, i64) {
        match (self, radix) {
            (ImmField::Signed16, Radix::Decimal) => (i16::MIN as i64, i16::MAX as i64),
            _ => (0, self.mask() as i64),
        }
    }
}

impl fmt::Display for ImmField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImmField::Signed16 => write!(f, "16-bit signed field [-32768, 32767]"),
            ImmField::Unsigned16 => write!(f, "16-bit unsigned field [0, 0xffff]"),
            ImmField::Target26 => write!(f, "26-bit jump target field [0, 0x3ffffff]"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Immediate {
    pub value: i64,
    pub radix: Radix,
}

impl Immediate {
    pub fn parse(token: &str) -> Result<Self, AsmError> {
        let invalid = || AsmError::InvalidImmediate { token: token.to_string() };
        let t = token.trim();

        let (radix, digits) = if let Some(rest) = t.strip_prefix("0x") {
            (Radix::Hex, rest)
        } else if let Some(rest) = t.strip_prefix("0b").or_else(|| t.strip_prefix("2_")) {
            (Radix::Binary, rest)
        } else {
            (Radix::Decimal, t)
        };

        let value = match radix {
            Radix::Decimal => {
                let magnitude = digits.strip_prefix('-').unwrap_or(digits);
                if magnitude.is_empty() || !magnitude.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                match digits.parse::<i64>() {
                    Ok(v) => v,
                    Err(e) => match e.kind() {
                        IntErrorKind::PosOverflow => i64::MAX,
                        IntErrorKind::NegOverflow => i64::MIN,
                        _ => return Err(invalid()),
                    },
                }
            }
            Radix::Hex | Radix::Binary => {
                let cleaned: String = match radix {
                    Radix::Binary => digits.chars().filter(|&c| c != '_').collect(),
                    _ => digits.to_string(),
                };
                if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_digit(radix.base())) {
                    return Err(invalid());
                }
                match u64::from_str_radix(&cleaned, radix.base()) {
                    Ok(raw) => i64::try_from(raw).unwrap_or(i64::MAX),
                    Err(e) if *e.kind() == IntErrorKind::PosOverflow => i64::MAX,
                    Err(_) => return Err(invalid()),
                }
            }
        };
        Ok(Self { value, radix })
    }

    /// Range-checks the value against `field` and returns the field bits.
    pub fn fit(self, field: ImmField) -> Result<u32, AsmError> {
        let (min, max) = field.range(self.radix);
        if self.value < min || self.value > max {
            return Err(AsmError::ImmediateOutOfRange { value: self.value, field });
        }
        Ok((self.value as u32) & field.mask())
    }
}

/// Parses a base+offset memory operand such as `4($sp)` or `($t0)`.
/// A missing offset means zero.
pub fn parse_offset(token: &str) -> Result<(Immediate, Register), AsmError> {
    let malformed = || AsmError::InvalidOperand {
        token: token.to_string(),
        expected: "offset(base)",
    };
    let t = token.trim();
    let open = t.find('(').ok_or_else(malformed)?;
    let inner = t[open + 1..].strip_suffix(')').ok_or_else(malformed)?;
    if inner.contains(&['(', ')'][..]) {
        return Err(malformed());
    }
    let offset_text = t[..open].trim();
    let offset = if offset_text.is_empty() {
        Immediate { value: 0, radix: Radix::Decimal }
    } else {
        Immediate::parse(offset_text)?
    };
    let base = inner.parse::<Register>()?;
    Ok((offset, base))
}
