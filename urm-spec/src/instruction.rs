//! URM Instruction Set
//!
//! | Form         | Effect                                         |
//! |--------------|------------------------------------------------|
//! | `Z(n)`       | `R[n] = 0`                                     |
//! | `S(n)`       | `R[n] = R[n] + 1`                              |
//! | `T(n, m)`    | `R[m] = R[n]`                                  |
//! | `J(n, m, p)` | if `R[n] == R[m]` continue at instruction `p`  |

use std::fmt;

use crate::{InstructionPosition, RegisterIndex};

/// URM instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Z: R[register] = 0
    Zero { register: RegisterIndex },

    /// S: R[register] = R[register] + 1
    Increment { register: RegisterIndex },

    /// T: R[destination] = R[source]
    Copy {
        source: RegisterIndex,
        destination: RegisterIndex,
    },

    /// J: if R[left] == R[right] then jump to `target` (1-based)
    JumpIfEqual {
        left: RegisterIndex,
        right: RegisterIndex,
        target: InstructionPosition,
    },
}

impl Instruction {
    /// Upper-case keyword letter of the instruction
    pub fn mnemonic(&self) -> char {
        match self {
            Instruction::Zero { .. } => 'Z',
            Instruction::Increment { .. } => 'S',
            Instruction::Copy { .. } => 'T',
            Instruction::JumpIfEqual { .. } => 'J',
        }
    }

    /// Number of operands in the textual form
    pub fn operand_count(&self) -> usize {
        match self {
            Instruction::Zero { .. } | Instruction::Increment { .. } => 1,
            Instruction::Copy { .. } => 2,
            Instruction::JumpIfEqual { .. } => 3,
        }
    }

    /// Returns true if this instruction may transfer control
    pub fn is_jump(&self) -> bool {
        matches!(self, Instruction::JumpIfEqual { .. })
    }
}

/// Canonical text form, accepted back by the assembler
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Zero { register } => write!(f, "Z({})", register),
            Instruction::Increment { register } => write!(f, "S({})", register),
            Instruction::Copy { source, destination } => {
                write!(f, "T({}, {})", source, destination)
            }
            Instruction::JumpIfEqual { left, right, target } => {
                write!(f, "J({}, {}, {})", left, right, target)
            }
        }
    }
}
