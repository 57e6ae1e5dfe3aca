pub mod assembler;
pub mod config;
pub mod decoder;
pub mod disasm;
pub mod encoder;
pub mod error;
pub mod hazard;
pub mod instructions;
pub mod lexer;
pub mod listing;
pub mod operand;
pub mod program;
pub mod register;
pub mod render;

pub mod isa {
    pub mod mips32; // the assembler's own instruction table, decoded
}

pub use assembler::{assemble, Assembly};
pub use config::{Flags, Options};
pub use error::{AsmError, AssemblyFailure, Diagnostic, ErrorKind};
pub use listing::{parse_listing, ListingError};
pub use program::{EncodedInstruction, Program};
pub use register::Register;
pub use render::{render, RenderMode, VhdlLayout};
