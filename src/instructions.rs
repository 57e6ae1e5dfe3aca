use serde::{Deserialize, Serialize};

use crate::operand::ImmField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    Add,
    Sub,
    And,
    Or,
    Xor,
    Multu,
    Sll,
    Srl,
    Sra,
    Nop,
    Addi,
    Andi,
    Ori,
    Xori,
    Lw,
    Sw,
    Beq,
    Bne,
    J,
    Jal,
}

/// Bit layout of an instruction word.
///
/// - `Reg`:  opcode[31:26] rs[25:21] rt[20:16] rd[15:11] shamt[10:6] funct[5:0]
/// - `Imm`:  opcode[31:26] rs[25:21] rt[20:16] imm[15:0]
/// - `Jump`: opcode[31:26] target[25:0]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Format {
    Reg,
    Imm,
    Jump,
}

/// What a source operand in a given position resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Rd,
    Rs,
    Rt,
    Imm(ImmField),
    /// `offset(base)`: signed 16-bit offset plus the `rs` base register.
    Offset,
    /// Literal 26-bit jump target.
    Target,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstrDesc {
    pub op: Op,
    pub mnemonic: &'static str,
    pub format: Format,
    pub opcode: u8,
    pub funct: u8,
    pub operands: &'static [Role],
}

/// The all-zero word, `sll $0, $0, $0`.
pub const NOP_WORD: u32 = 0;

const RD_RS_RT: &[Role] = &[Role::Rd, Role::Rs, Role::Rt];
// shifts take the amount from rs
const RD_RT_RS: &[Role] = &[Role::Rd, Role::Rt, Role::Rs];
const RT_RS_SIMM: &[Role] = &[Role::Rt, Role::Rs, Role::Imm(ImmField::Signed16)];
const RT_RS_UIMM: &[Role] = &[Role::Rt, Role::Rs, Role::Imm(ImmField::Unsigned16)];
const RT_OFFSET: &[Role] = &[Role::Rt, Role::Offset];
const RS_RT_SIMM: &[Role] = &[Role::Rs, Role::Rt, Role::Imm(ImmField::Signed16)];
const TARGET: &[Role] = &[Role::Target];

const fn reg(op: Op, mnemonic: &'static str, funct: u8, operands: &'static [Role]) -> InstrDesc {
    InstrDesc { op, mnemonic, format: Format::Reg, opcode: 0, funct, operands }
}

const fn imm(op: Op, mnemonic: &'static str, opcode: u8, operands: &'static [Role]) -> InstrDesc {
    InstrDesc { op, mnemonic, format: Format::Imm, opcode, funct: 0, operands }
}

const fn jump(op: Op, mnemonic: &'static str, opcode: u8) -> InstrDesc {
    InstrDesc { op, mnemonic, format: Format::Jump, opcode, funct: 0, operands: TARGET }
}

pub const TABLE: &[InstrDesc] = &[
    reg(Op::Add, "add", 0b100000, RD_RS_RT),
    reg(Op::Sub, "sub", 0b100010, RD_RS_RT),
    reg(Op::And, "and", 0b100100, RD_RS_RT),
    reg(Op::Or, "or", 0b100101, RD_RS_RT),
    reg(Op::Xor, "xor", 0b100110, RD_RS_RT),
    reg(Op::Multu, "multu", 0b011001, RD_RS_RT),
    reg(Op::Sll, "sll", 0b000000, RD_RT_RS),
    reg(Op::Srl, "srl", 0b000010, RD_RT_RS),
    reg(Op::Sra, "sra", 0b000011, RD_RT_RS),
    reg(Op::Nop, "nop", 0b000000, &[]),
    imm(Op::Addi, "addi", 0b001000, RT_RS_SIMM),
    imm(Op::Andi, "andi", 0b001100, RT_RS_UIMM),
    imm(Op::Ori, "ori", 0b001101, RT_RS_UIMM),
    imm(Op::Xori, "xori", 0b001110, RT_RS_UIMM),
    imm(Op::Lw, "lw", 0b100011, RT_OFFSET),
    imm(Op::Sw, "sw", 0b101011, RT_OFFSET),
    imm(Op::Beq, "beq", 0b000100, RS_RT_SIMM),
    imm(Op::Bne, "bne", 0b000101, RS_RT_SIMM),
    jump(Op::J, "j", 0b000010),
    jump(Op::Jal, "jal", 0b000011),
];

/// Mnemonics are matched after lower-casing by the lexer.
pub fn lookup(mnemonic: &str) -> Option<&'static InstrDesc> {
    TABLE.iter().find(|d| d.mnemonic == mnemonic)
}
