use serde::{Deserialize, Serialize};

use crate::instructions::NOP_WORD;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedInstruction {
    pub word: u32,
    /// 1-based source line; 0 for words the assembler inserted.
    pub line: usize,
    pub inserted: bool,
}

impl EncodedInstruction {
    pub fn new(word: u32, line: usize) -> Self {
        Self { word, line, inserted: false }
    }

    pub fn inserted_nop() -> Self {
        Self { word: NOP_WORD, line: 0, inserted: true }
    }
}

/// Instructions in address order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub instructions: Vec<EncodedInstruction>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ins: EncodedInstruction) {
        self.instructions.push(ins);
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = u32> + '_ {
        self.instructions.iter().map(|i| i.word)
    }
}

impl FromIterator<EncodedInstruction> for Program {
    fn from_iter<I: IntoIterator<Item = EncodedInstruction>>(iter: I) -> Self {
        Self { instructions: iter.into_iter().collect() }
    }
}
