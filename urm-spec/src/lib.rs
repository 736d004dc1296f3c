//! # URM Specification
//!
//! Core data model of the unlimited register machine.
//!
//! ## Key Features
//! - Unbounded, sparse register file (`R0`, `R1`, ...) holding unsigned values
//! - Four instructions: `Z(n)`, `S(n)`, `T(n, m)`, `J(n, m, p)`
//! - Programs addressed by 1-based instruction positions
//!
//! ## Example
//!
//! ```rust
//! use urm_spec::{Instruction, Program, RegisterStore};
//!
//! let program = Program::new(vec![
//!     Instruction::Increment { register: 0 },
//!     Instruction::Copy { source: 0, destination: 1 },
//! ]);
//! assert_eq!(program.get(2), Some(&Instruction::Copy { source: 0, destination: 1 }));
//!
//! let mut registers = RegisterStore::new();
//! assert_eq!(registers.read(7), 0);
//! assert_eq!(registers.len(), 1);
//! ```

pub mod register;
pub mod instruction;
pub mod program;

pub use register::RegisterStore;
pub use instruction::Instruction;
pub use program::Program;

/// Register index (`n` in `R n`)
pub type RegisterIndex = u64;

/// Register value, a non-negative integer
pub type RegisterValue = u64;

/// User-facing, 1-based instruction position (jump targets, listings)
pub type InstructionPosition = usize;
