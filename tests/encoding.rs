use mips_asm::encoder::encode_statement;
use mips_asm::lexer::lex_line;
use mips_asm::{AsmError, ErrorKind};

fn enc(line: &str) -> Result<u32, AsmError> {
    let stmt = lex_line(line).unwrap().unwrap().statement.unwrap();
    encode_statement(&stmt)
}

fn enc_r(rs: u32, rt: u32, rd: u32, funct: u32) -> u32 {
    (rs << 21) | (rt << 16) | (rd << 11) | funct
}

fn enc_i(op: u32, rs: u32, rt: u32, imm16: u32) -> u32 {
    (op << 26) | (rs << 21) | (rt << 16) | (imm16 & 0xFFFF)
}

#[test]
fn register_format() {
    assert_eq!(enc("add $3, $1, $2"), Ok(0x0022_1820));
    assert_eq!(enc("sub $3, $1, $2"), Ok(enc_r(1, 2, 3, 0x22)));
    assert_eq!(enc("and $t2, $t0, $t1"), Ok(enc_r(8, 9, 10, 0x24)));
    assert_eq!(enc("or $t2, $t0, $t1"), Ok(enc_r(8, 9, 10, 0x25)));
    assert_eq!(enc("xor $t2, $t0, $t1"), Ok(enc_r(8, 9, 10, 0x26)));
    assert_eq!(enc("multu $3, $1, $2"), Ok(0x0022_1819));
    assert_eq!(enc("nop"), Ok(0));
}

#[test]
fn shifts_take_amount_from_rs() {
    // sll rd, rt, rs
    assert_eq!(enc("sll $t2, $t1, $t0"), Ok(0x0109_5000));
    assert_eq!(enc("srl $t2, $t1, $t0"), Ok(0x0109_5002));
    assert_eq!(enc("sra $t2, $t1, $t0"), Ok(0x0109_5003));
}

#[test]
fn immediate_format() {
    assert_eq!(enc("addi $1, $0, -1"), Ok(0x2001_FFFF));
    assert_eq!(enc("addi $1, $0, 32767"), Ok(0x2001_7FFF));
    assert_eq!(enc("addi $1, $0, 0x8000"), Ok(0x2001_8000));
    assert_eq!(enc("andi $t1, $t0, 0xFF"), Ok(0x3109_00FF));
    assert_eq!(enc("ori $1, $0, 65535"), Ok(0x3401_FFFF));
    assert_eq!(enc("xori $1, $1, 0b1111"), Ok(enc_i(0x0E, 1, 1, 0xF)));
    assert_eq!(enc("beq $1, $2, -1"), Ok(0x1022_FFFF));
    assert_eq!(enc("bne $1, $2, 3"), Ok(enc_i(0x05, 1, 2, 3)));
}

#[test]
fn memory_operands() {
    assert_eq!(enc("lw $t0, 4($sp)"), Ok(0x8FA8_0004));
    assert_eq!(enc("sw $t0, -8($sp)"), Ok(0xAFA8_FFF8));
    assert_eq!(enc("lw $t0, ($a0)"), Ok(enc_i(0x23, 4, 8, 0)));
    assert_eq!(enc("LW $8, 0x10($29)"), Ok(enc_i(0x23, 29, 8, 0x10)));
}

#[test]
fn jump_format() {
    assert_eq!(enc("j 0x100"), Ok(0x0800_0100));
    assert_eq!(enc("jal 0x3FFFFFF"), Ok(0x0FFF_FFFF));
    assert_eq!(enc("j 0").map(|w| w >> 26), Ok(0x02));
    assert_eq!(enc("j 0x4000000").unwrap_err().kind(), ErrorKind::ImmediateOutOfRange);
    assert_eq!(enc("j -4").unwrap_err().kind(), ErrorKind::ImmediateOutOfRange);
}

#[test]
fn line_errors() {
    assert_eq!(enc("frob $1, $2").unwrap_err().kind(), ErrorKind::UnknownMnemonic);
    assert_eq!(enc("add $1, $2").unwrap_err().kind(), ErrorKind::ArityMismatch);
    assert_eq!(enc("add $1, $2, $3, $4").unwrap_err().kind(), ErrorKind::ArityMismatch);
    assert_eq!(enc("add $1, $2, $32").unwrap_err().kind(), ErrorKind::InvalidRegister);
    assert_eq!(enc("addi $1, $0, 12z").unwrap_err().kind(), ErrorKind::InvalidImmediate);
    assert_eq!(enc("andi $1, $0, -1").unwrap_err().kind(), ErrorKind::ImmediateOutOfRange);
    assert_eq!(enc("lw $t0, 4").unwrap_err().kind(), ErrorKind::InvalidOperand);
    assert_eq!(enc("addi $1, 5, $0").unwrap_err().kind(), ErrorKind::InvalidImmediate);
}

#[test]
fn immediate_field_recovers_value() {
    for v in [-32768i32, -4097, -1, 0, 1, 255, 4096, 32767] {
        let w = enc(&format!("addi $1, $0, {v}")).unwrap();
        assert_eq!((w & 0xFFFF) as u16 as i16 as i32, v);
        let hex = enc(&format!("addi $1, $0, {:#x}", v as u16)).unwrap();
        let bin = enc(&format!("addi $1, $0, 0b{:b}", v as u16)).unwrap();
        assert_eq!(hex, w);
        assert_eq!(bin, w);
    }
}
