//! Virtual Machine for the URM

use tracing::{debug, warn};
use urm_spec::{InstructionPosition, Program, RegisterStore};

use crate::error::Result;
use crate::execute::{execute, Flow};
use crate::state::{HaltReason, MachineState};

/// VM configuration
#[derive(Debug, Clone, Default)]
pub struct VmConfig {
    /// Maximum number of executed instructions, unbounded when `None`
    ///
    /// URM programs may loop forever; a limit turns that into
    /// [`HaltReason::StepLimit`].
    pub max_steps: Option<u64>,
}

impl VmConfig {
    pub fn with_max_steps(max_steps: u64) -> Self {
        Self {
            max_steps: Some(max_steps),
        }
    }
}

/// Execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Number of instructions executed
    pub steps: u64,

    /// Reason for halting
    pub halt_reason: HaltReason,

    /// 1-based position the machine stopped at (0 after a jump to 0)
    pub terminated_at: InstructionPosition,

    /// Final register store
    pub registers: RegisterStore,
}

/// URM Virtual Machine
pub struct Vm {
    program: Program,
    state: MachineState,
    config: VmConfig,
}

impl Vm {
    /// Create a VM for a program and its initial registers
    pub fn new(program: Program, registers: RegisterStore, config: VmConfig) -> Self {
        let mut state = MachineState::new(registers);

        if program.is_empty() {
            state.halt(HaltReason::Completed);
        }

        Self {
            program,
            state,
            config,
        }
    }

    /// Run the VM until halt
    pub fn run(mut self) -> Result<ExecutionResult> {
        while !self.state.is_halted() {
            if let Some(limit) = self.config.max_steps {
                if self.state.steps >= limit {
                    warn!(limit, pointer = self.state.pointer, "step limit reached");
                    self.state.halt(HaltReason::StepLimit { limit });
                    break;
                }
            }

            self.step()?;
        }

        let halt_reason = self.state.halt_reason.unwrap_or(HaltReason::Completed);
        let terminated_at = self.state.position();
        debug!(steps = self.state.steps, terminated_at, ?halt_reason, "halted");

        Ok(ExecutionResult {
            steps: self.state.steps,
            halt_reason,
            terminated_at,
            registers: self.state.registers,
        })
    }

    /// Execute exactly one instruction
    ///
    /// Returns the halt reason once the pointer has left the program. Does
    /// nothing if the VM already halted.
    pub fn step(&mut self) -> Result<Option<HaltReason>> {
        if self.state.is_halted() {
            return Ok(self.state.halt_reason);
        }

        let instruction = match self.program.fetch(self.state.pointer) {
            Some(instruction) => *instruction,
            None => {
                self.state.halt(HaltReason::Completed);
                return Ok(self.state.halt_reason);
            }
        };

        let flow = execute(&instruction, &mut self.state)?;
        self.state.steps += 1;

        match flow {
            Flow::Next => self.state.pointer += 1,
            Flow::Jump(target) => match target.checked_sub(1) {
                Some(pointer) => self.state.pointer = pointer,
                None => self.state.halt(HaltReason::JumpBeforeStart),
            },
        }

        if !self.state.is_halted() && self.state.pointer >= self.program.len() {
            self.state.halt(HaltReason::Completed);
        }

        Ok(self.state.halt_reason)
    }

    /// Get current state (for debugging)
    pub fn state(&self) -> &MachineState {
        &self.state
    }

    pub fn program(&self) -> &Program {
        &self.program
    }
}
