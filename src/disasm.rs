use crate::decoder::Decoded;
use crate::instructions::Role;
use crate::operand::ImmField;

/// Formats a decoded word in source syntax that assembles back to the same
/// word: registers as `$n`, signed immediates in decimal when negative,
/// everything else in hex.
pub fn fmt_decoded(d: &Decoded) -> String {
    let operands: Vec<String> = d
        .desc
        .operands
        .iter()
        .map(|role| match *role {
            Role::Rd => d.rd.to_string(),
            Role::Rs => d.rs.to_string(),
            Role::Rt => d.rt.to_string(),
            Role::Imm(field) => imm(d.imm, field),
            Role::Offset => format!("{}({})", imm(d.imm, ImmField::Signed16), d.rs),
            Role::Target => format!("{:#x}", d.imm),
        })
        .collect();
    if operands.is_empty() {
        d.desc.mnemonic.to_string()
    } else {
        format!("{} {}", d.desc.mnemonic, operands.join(", "))
    }
}

fn imm(bits: u32, field: ImmField) -> String {
    match field {
        ImmField::Signed16 if (bits as u16 as i16) < 0 => format!("{}", bits as u16 as i16),
        _ => format!("{bits:#x}"),
    }
}
