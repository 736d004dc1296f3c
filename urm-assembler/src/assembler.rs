//! Main assembler logic
//!
//! Feeds lines through the [line parser](crate::parser), applies
//! initializations to the register store as soon as they are parsed, appends
//! instructions to the program and collects every diagnostic instead of
//! stopping at the first one.

use std::io::{self, BufRead};

use tracing::{debug, warn};
use urm_spec::{Instruction, Program, RegisterStore};

use crate::context::ParseContext;
use crate::error::{AssemblerError, InvalidSource};
use crate::parser::{parse_line, ParsedLine};

/// A successfully assembled source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembly {
    pub program: Program,

    /// Registers set by the initialization preamble
    pub registers: RegisterStore,
}

/// Incremental assembler for one source
#[derive(Debug, Default)]
pub struct Assembler {
    context: ParseContext,
    instructions: Vec<Instruction>,
    registers: RegisterStore,
    errors: Vec<AssemblerError>,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the next source line
    pub fn feed_line(&mut self, text: &str) {
        let line = self.context.next_line();

        match parse_line(text, &mut self.context) {
            Ok(ParsedLine::Blank) => {}
            Ok(ParsedLine::Initialization { register, value }) => {
                self.registers.write(register, value);
            }
            Ok(ParsedLine::Instruction(instruction)) => {
                self.instructions.push(instruction);
            }
            Err(err) => {
                debug!(line, column = err.column, "syntax error: {}", err.kind);
                self.errors.push(AssemblerError::Syntax {
                    line,
                    column: err.column,
                    kind: err.kind,
                });
            }
        }
    }

    /// Record a line that could not be read
    pub fn feed_error(&mut self, source: io::Error) {
        let line = self.context.next_line();
        warn!(line, "unreadable line: {}", source);
        self.errors.push(AssemblerError::Io { line, source });
    }

    /// Diagnostics collected so far
    pub fn errors(&self) -> &[AssemblerError] {
        &self.errors
    }

    pub fn finish(self) -> Result<Assembly, InvalidSource> {
        if !self.errors.is_empty() {
            return Err(InvalidSource {
                errors: self.errors,
            });
        }

        debug!(
            lines = self.context.line(),
            instructions = self.instructions.len(),
            registers = self.registers.len(),
            "assembled source"
        );

        Ok(Assembly {
            program: Program::new(self.instructions),
            registers: self.registers,
        })
    }
}

/// Assemble source text
pub fn assemble(source: &str) -> Result<Assembly, InvalidSource> {
    assemble_lines(source.lines().map(Ok::<_, io::Error>))
}

/// Assemble everything a reader yields, line by line
pub fn assemble_reader<R: BufRead>(reader: R) -> Result<Assembly, InvalidSource> {
    assemble_lines(reader.lines())
}

/// Assemble a sequence of lines
///
/// Lines that are not valid UTF-8 are reported and skipped. Any other read
/// error is reported and ends the input.
pub fn assemble_lines<I, S>(lines: I) -> Result<Assembly, InvalidSource>
where
    I: IntoIterator<Item = io::Result<S>>,
    S: AsRef<str>,
{
    let mut assembler = Assembler::new();

    for line in lines {
        match line {
            Ok(text) => assembler.feed_line(text.as_ref()),
            Err(err) if err.kind() == io::ErrorKind::InvalidData => assembler.feed_error(err),
            Err(err) => {
                assembler.feed_error(err);
                break;
            }
        }
    }

    assembler.finish()
}
