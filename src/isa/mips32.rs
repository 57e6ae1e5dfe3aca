use crate::decoder::{Decoded, Decoder};
use crate::instructions::{lookup, Format, Op, NOP_WORD, TABLE};
use crate::register::Register;

/// Decodes words produced by this assembler's instruction table.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mips32Decoder;

impl Mips32Decoder {
    pub fn new() -> Self {
        Self
    }
}

impl Decoder for Mips32Decoder {
    fn decode(&self, raw32: u32) -> Option<Decoded> {
        let opcode = (raw32 >> 26) as u8;
        let funct = (raw32 & 0x3F) as u8;
        let shamt = (raw32 >> 6) & 0x1F;

        let desc = if raw32 == NOP_WORD {
            lookup("nop")?
        } else {
            TABLE.iter().filter(|d| d.op != Op::Nop).find(|d| {
                d.opcode == opcode && (d.format != Format::Reg || d.funct == funct)
            })?
        };
        // The subset never sets shamt
        if desc.format == Format::Reg && shamt != 0 {
            return None;
        }

        let imm = match desc.format {
            Format::Reg => 0,
            Format::Imm => raw32 & 0xFFFF,
            Format::Jump => raw32 & 0x3FF_FFFF,
        };
        let (rs, rt) = match desc.format {
            Format::Jump => (Register::ZERO, Register::ZERO),
            _ => (Register::from_field(raw32 >> 21), Register::from_field(raw32 >> 16)),
        };
        let rd = match desc.format {
            Format::Reg => Register::from_field(raw32 >> 11),
            _ => Register::ZERO,
        };
        Some(Decoded { desc, rs, rt, rd, imm })
    }
}
