//! Parse-then-execute pipeline

use std::io::BufRead;

use thiserror::Error;
use tracing::info;
use urm_assembler::{assemble_reader, Assembly, InvalidSource};
use urm_runtime::{ExecutionResult, RuntimeError, Vm, VmConfig};
use urm_spec::RegisterStore;

#[derive(Debug, Error)]
pub enum InterpretError {
    /// At least one line failed to parse; the program never runs
    #[error(transparent)]
    InvalidSource(#[from] InvalidSource),

    /// The source parsed but holds no instructions
    #[error("No instructions occurred")]
    NoInstructions { registers: RegisterStore },

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Parse phase: assemble every line and require at least one instruction
pub fn load<R: BufRead>(reader: R) -> Result<Assembly, InterpretError> {
    let assembly = assemble_reader(reader)?;

    if assembly.program.is_empty() {
        return Err(InterpretError::NoInstructions {
            registers: assembly.registers,
        });
    }

    info!(
        instructions = assembly.program.len(),
        initialized = assembly.registers.len(),
        "program loaded"
    );
    Ok(assembly)
}

/// Execution phase
pub fn run(assembly: Assembly, config: &VmConfig) -> Result<ExecutionResult, InterpretError> {
    let vm = Vm::new(assembly.program, assembly.registers, config.clone());
    let result = vm.run()?;

    info!(steps = result.steps, terminated_at = result.terminated_at, "program finished");
    Ok(result)
}

/// Both phases in one call
pub fn interpret<R: BufRead>(reader: R, config: &VmConfig) -> Result<ExecutionResult, InterpretError> {
    run(load(reader)?, config)
}
