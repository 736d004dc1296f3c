//! Machine state for the URM

use urm_spec::{InstructionPosition, RegisterStore};

/// Machine state
#[derive(Debug, Clone, Default)]
pub struct MachineState {
    /// Register store, shared with the parse phase initializations
    pub registers: RegisterStore,

    /// 0-based instruction pointer
    pub pointer: usize,

    /// Executed instruction count
    pub steps: u64,

    /// Halt reason, set once
    pub halt_reason: Option<HaltReason>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// Pointer left the program past its end, sequentially or by a jump
    Completed,
    /// Jump to target 0
    JumpBeforeStart,
    /// Configured step limit reached
    StepLimit { limit: u64 },
}

impl MachineState {
    pub fn new(registers: RegisterStore) -> Self {
        Self {
            registers,
            ..Self::default()
        }
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.halt_reason.is_some()
    }

    pub fn halt(&mut self, reason: HaltReason) {
        self.halt_reason = Some(reason);
    }

    /// 1-based position of the instruction the machine stopped at
    ///
    /// A jump to target 0 stops at position 0.
    pub fn position(&self) -> InstructionPosition {
        match self.halt_reason {
            Some(HaltReason::JumpBeforeStart) => 0,
            _ => self.pointer.saturating_add(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let mut registers = RegisterStore::new();
        registers.write(0, 5);
        let state = MachineState::new(registers);

        assert_eq!(state.pointer, 0);
        assert_eq!(state.steps, 0);
        assert!(!state.is_halted());
        assert_eq!(state.registers.get(0), Some(5));
    }

    #[test]
    fn test_halt() {
        let mut state = MachineState::default();
        state.pointer = 2;
        state.halt(HaltReason::Completed);
        assert!(state.is_halted());
        assert_eq!(state.position(), 3);
    }

    #[test]
    fn test_jump_before_start_position() {
        let mut state = MachineState::default();
        state.halt(HaltReason::JumpBeforeStart);
        assert_eq!(state.position(), 0);
    }
}
