use std::iter;

use crate::program::{EncodedInstruction, Program};

/// NOPs placed after each real instruction to drain the pipeline.
pub const FLUSH_DEPTH: usize = 4;

/// Appends [`FLUSH_DEPTH`] NOPs after every instruction that came from the
/// source. With `enabled == false` the program is returned as is.
pub fn apply(program: Program, enabled: bool) -> Program {
    if !enabled {
        return program;
    }
    let mut out = Vec::with_capacity(program.len() * (FLUSH_DEPTH + 1));
    for ins in program.instructions {
        out.push(ins);
        if !ins.inserted {
            out.extend(iter::repeat(EncodedInstruction::inserted_nop()).take(FLUSH_DEPTH));
        }
    }
    Program { instructions: out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_inserted_nops_are_not_padded_again() {
        let p: Program = [EncodedInstruction::new(0x2001_0005, 1)].into_iter().collect();
        let once = apply(p, true);
        assert_eq!(once.len(), 5);
        let twice = apply(once.clone(), true);
        assert_eq!(twice.len(), 9);
        assert_eq!(apply(once.clone(), false), once);
    }
}
