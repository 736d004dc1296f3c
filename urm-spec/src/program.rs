//! # Program Structure for the URM
//!
//! A program is an ordered, immutable instruction sequence. Users address
//! instructions by 1-based position; the engine uses 0-based pointers.

use crate::instruction::Instruction;
use crate::InstructionPosition;

/// URM program
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
}

impl Program {
    /// Create a program from its instructions
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Instruction at a 1-based position
    pub fn get(&self, position: InstructionPosition) -> Option<&Instruction> {
        position
            .checked_sub(1)
            .and_then(|pointer| self.instructions.get(pointer))
    }

    /// Instruction at a 0-based pointer
    #[inline]
    pub fn fetch(&self, pointer: usize) -> Option<&Instruction> {
        self.instructions.get(pointer)
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Instructions paired with their 1-based positions
    pub fn listing(&self) -> impl Iterator<Item = (InstructionPosition, &Instruction)> + '_ {
        self.instructions
            .iter()
            .enumerate()
            .map(|(pointer, instruction)| (pointer + 1, instruction))
    }
}

impl From<Vec<Instruction>> for Program {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self::new(instructions)
    }
}
