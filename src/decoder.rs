use crate::instructions::InstrDesc;
use crate::register::Register;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    pub desc: &'static InstrDesc,
    pub rs: Register,
    pub rt: Register,
    pub rd: Register,
    /// Immediate (16 bits) or jump target (26 bits), zero-extended.
    pub imm: u32,
}

pub trait Decoder {
    fn decode(&self, raw32: u32) -> Option<Decoded>;
}
