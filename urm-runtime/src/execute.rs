//! Instruction execution

use tracing::trace;
use urm_spec::{Instruction, InstructionPosition};

use crate::error::{Result, RuntimeError};
use crate::state::MachineState;

/// Where control goes after an instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Continue with the following instruction
    Next,
    /// Continue at a 1-based position
    Jump(InstructionPosition),
}

/// Execute a single instruction against the register store
///
/// Does not move the instruction pointer; the returned [`Flow`] says where
/// control goes.
pub fn execute(instruction: &Instruction, state: &mut MachineState) -> Result<Flow> {
    let registers = &mut state.registers;

    let flow = match *instruction {
        Instruction::Zero { register } => {
            registers.write(register, 0);
            Flow::Next
        }

        Instruction::Increment { register } => {
            let value = registers
                .read(register)
                .checked_add(1)
                .ok_or(RuntimeError::RegisterOverflow {
                    register,
                    position: state.pointer + 1,
                })?;
            registers.write(register, value);
            Flow::Next
        }

        Instruction::Copy { source, destination } => {
            let value = registers.read(source);
            registers.write(destination, value);
            Flow::Next
        }

        Instruction::JumpIfEqual { left, right, target } => {
            // Both registers are read, so both are materialized
            let lhs = registers.read(left);
            let rhs = registers.read(right);
            if lhs == rhs {
                Flow::Jump(target)
            } else {
                Flow::Next
            }
        }
    };

    trace!(pointer = state.pointer, %instruction, ?flow, "executed");
    Ok(flow)
}
