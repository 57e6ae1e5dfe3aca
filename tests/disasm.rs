use pretty_assertions::assert_eq;

use mips_asm::decoder::Decoder;
use mips_asm::disasm::fmt_decoded;
use mips_asm::isa::mips32::Mips32Decoder;
use mips_asm::{assemble, Options};

const SRC: &str = "\
add $3, $1, $2
sub $3, $1, $2
and $10, $8, $9
or $10, $8, $9
xor $10, $8, $9
multu $3, $1, $2
sll $10, $9, $8
srl $10, $9, $8
sra $10, $9, $8
nop
addi $1, $0, 0x5
addi $1, $0, -1
andi $9, $8, 0xff
ori $1, $0, 0xffff
xori $1, $1, 0xf
lw $8, 0x4($29)
sw $8, -8($29)
beq $1, $2, -1
bne $1, $2, 0x3
j 0x100
jal 0x3ffffff";

#[test]
fn disassembly_reproduces_canonical_source() {
    let asm = assemble(SRC, &Options::default()).unwrap();
    let dec = Mips32Decoder::new();
    let text: Vec<String> = asm
        .program
        .words()
        .map(|w| fmt_decoded(&dec.decode(w).unwrap()))
        .collect();
    assert_eq!(text.join("\n"), SRC);
}

#[test]
fn disassembly_reassembles_to_the_same_words() {
    let src = "addi $t0, $zero, 2_1010\nlw $ra, ($sp)\nori $at, $at, 65535\nj 4096";
    let first = assemble(src, &Options::default()).unwrap();
    let dec = Mips32Decoder::new();
    let listing: Vec<String> = first
        .program
        .words()
        .map(|w| fmt_decoded(&dec.decode(w).unwrap()))
        .collect();
    let second = assemble(&listing.join("\n"), &Options::default()).unwrap();
    assert_eq!(first.text, second.text);
}
