//! Runtime error types for the URM

use thiserror::Error;
use urm_spec::{InstructionPosition, RegisterIndex};

/// Fatal fault that aborts a run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("Register {register} overflowed at instruction {position}")]
    RegisterOverflow {
        register: RegisterIndex,
        position: InstructionPosition,
    },
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
