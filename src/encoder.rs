use crate::error::AsmError;
use crate::instructions::{lookup, Format, InstrDesc, Role};
use crate::lexer::Statement;
use crate::operand::{parse_offset, ImmField, Immediate};
use crate::register::Register;

/// Resolved operand fields. Fields an instruction does not use stay zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fields {
    pub rs: Register,
    pub rt: Register,
    pub rd: Register,
    /// Immediate or jump target, already masked to its field width.
    pub imm: u32,
}

pub fn encode_reg(opcode: u8, rs: Register, rt: Register, rd: Register, funct: u8) -> u32 {
    ((opcode as u32 & 0x3F) << 26)
        | ((rs.index() as u32) << 21)
        | ((rt.index() as u32) << 16)
        | ((rd.index() as u32) << 11)
        | (funct as u32 & 0x3F)
}

pub fn encode_imm(opcode: u8, rs: Register, rt: Register, imm16: u32) -> u32 {
    ((opcode as u32 & 0x3F) << 26)
        | ((rs.index() as u32) << 21)
        | ((rt.index() as u32) << 16)
        | (imm16 & 0xFFFF)
}

pub fn encode_jump(opcode: u8, target: u32) -> u32 {
    ((opcode as u32 & 0x3F) << 26) | (target & 0x3FF_FFFF)
}

pub fn pack(desc: &InstrDesc, f: &Fields) -> u32 {
    match desc.format {
        Format::Reg => encode_reg(desc.opcode, f.rs, f.rt, f.rd, desc.funct),
        Format::Imm => encode_imm(desc.opcode, f.rs, f.rt, f.imm),
        Format::Jump => encode_jump(desc.opcode, f.imm),
    }
}

/// Resolves `operands` against the roles `desc` declares, in order.
pub fn resolve(desc: &InstrDesc, operands: &[&str]) -> Result<Fields, AsmError> {
    if operands.len() != desc.operands.len() {
        return Err(AsmError::ArityMismatch {
            mnemonic: desc.mnemonic,
            expected: desc.operands.len(),
            found: operands.len(),
        });
    }
    let mut f = Fields::default();
    for (role, token) in desc.operands.iter().zip(operands) {
        match *role {
            Role::Rd => f.rd = token.parse()?,
            Role::Rs => f.rs = token.parse()?,
            Role::Rt => f.rt = token.parse()?,
            Role::Imm(field) => f.imm = Immediate::parse(token)?.fit(field)?,
            Role::Offset => {
                let (offset, base) = parse_offset(token)?;
                f.imm = offset.fit(ImmField::Signed16)?;
                f.rs = base;
            }
            Role::Target => f.imm = Immediate::parse(token)?.fit(ImmField::Target26)?,
        }
    }
    Ok(f)
}

pub fn encode(desc: &InstrDesc, operands: &[&str]) -> Result<u32, AsmError> {
    resolve(desc, operands).map(|f| pack(desc, &f))
}

pub fn encode_statement(stmt: &Statement<'_>) -> Result<u32, AsmError> {
    let desc = lookup(&stmt.mnemonic).ok_or_else(|| AsmError::UnknownMnemonic {
        mnemonic: stmt.mnemonic.clone(),
    })?;
    encode(desc, &stmt.operands)
}
