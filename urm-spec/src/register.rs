//! Sparse register file for the URM

use std::collections::BTreeMap;

use crate::{RegisterIndex, RegisterValue};

/// Register store
///
/// Maps register indices to values. Registers that were never touched hold 0.
///
/// ## Invariants
///
/// - Reading an absent register inserts it with value 0, so a register that
///   was only ever read still shows up in [`RegisterStore::iter`]
/// - Registers are never removed
/// - Iteration is in ascending index order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterStore {
    registers: BTreeMap<RegisterIndex, RegisterValue>,
}

impl RegisterStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a register, materializing it at 0 if it was never touched
    #[inline]
    pub fn read(&mut self, index: RegisterIndex) -> RegisterValue {
        *self.registers.entry(index).or_insert(0)
    }

    /// Write a register (insert or overwrite)
    #[inline]
    pub fn write(&mut self, index: RegisterIndex, value: RegisterValue) {
        self.registers.insert(index, value);
    }

    /// Inspect a register without materializing it
    pub fn get(&self, index: RegisterIndex) -> Option<RegisterValue> {
        self.registers.get(&index).copied()
    }

    /// Whether the register has been read or written
    pub fn contains(&self, index: RegisterIndex) -> bool {
        self.registers.contains_key(&index)
    }

    /// Number of materialized registers
    pub fn len(&self) -> usize {
        self.registers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registers.is_empty()
    }

    /// All materialized registers in ascending index order
    pub fn iter(&self) -> impl Iterator<Item = (RegisterIndex, RegisterValue)> + '_ {
        self.registers.iter().map(|(&index, &value)| (index, value))
    }
}

impl FromIterator<(RegisterIndex, RegisterValue)> for RegisterStore {
    fn from_iter<I: IntoIterator<Item = (RegisterIndex, RegisterValue)>>(iter: I) -> Self {
        Self {
            registers: iter.into_iter().collect(),
        }
    }
}
