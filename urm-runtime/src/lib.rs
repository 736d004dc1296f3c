//! # URM Runtime
//!
//! Execute URM programs over a sparse register store.
//!
//! The engine keeps a 0-based instruction pointer, executes one instruction at
//! a time and halts as soon as the pointer leaves the program, either by
//! running past the last instruction or by jumping outside it. Jump targets
//! are 1-based; a jump to 0 halts at position 0.
//!
//! ## Example
//!
//! ```rust
//! use urm_runtime::{Vm, VmConfig};
//! use urm_spec::{Instruction, Program, RegisterStore};
//!
//! let program = Program::new(vec![Instruction::Increment { register: 0 }]);
//! let vm = Vm::new(program, RegisterStore::new(), VmConfig::default());
//! let result = vm.run().unwrap();
//! assert_eq!(result.registers.get(0), Some(1));
//! assert_eq!(result.terminated_at, 2);
//! ```

pub mod error;
pub mod state;
pub mod execute;
pub mod vm;

pub use state::{HaltReason, MachineState};
pub use execute::{execute, Flow};
pub use vm::{ExecutionResult, Vm, VmConfig};
pub use error::RuntimeError;

/// Simple execution helper
///
/// Runs a program from the given registers without a step limit.
pub fn run(
    program: urm_spec::Program,
    registers: urm_spec::RegisterStore,
) -> Result<ExecutionResult, RuntimeError> {
    Vm::new(program, registers, VmConfig::default()).run()
}
