//! Per-parse state
//!
//! A fresh [`ParseContext`] is created for every source that is assembled, so
//! the initialization phase of one source never leaks into another.

/// Parse context for one source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseContext {
    /// `R n = v` lines are still accepted
    initialization_open: bool,

    /// 1-based number of the line being parsed, 0 before the first line
    line: usize,
}

impl ParseContext {
    pub fn new() -> Self {
        Self {
            initialization_open: true,
            line: 0,
        }
    }

    pub fn is_initialization_open(&self) -> bool {
        self.initialization_open
    }

    /// Close the initialization phase for the rest of this parse
    pub fn close_initialization(&mut self) {
        self.initialization_open = false;
    }

    /// Advance to the next line and return its number
    pub fn next_line(&mut self) -> usize {
        self.line += 1;
        self.line
    }

    pub fn line(&self) -> usize {
        self.line
    }
}

impl Default for ParseContext {
    fn default() -> Self {
        Self::new()
    }
}
