//! Assembler errors

use std::fmt;
use std::io;

use thiserror::Error;

/// Operand slot of an instruction or initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Register,
    Value,
    Target,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Register => write!(f, "register number"),
            Operand::Value => write!(f, "register value"),
            Operand::Target => write!(f, "jump target"),
        }
    }
}

/// What the parser was looking for when it stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    OpenParen,
    CloseParen,
    Comma,
    Equals,
    Operand(Operand),
    EndOfLine,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::OpenParen => write!(f, "'('"),
            Expected::CloseParen => write!(f, "')'"),
            Expected::Comma => write!(f, "','"),
            Expected::Equals => write!(f, "'='"),
            Expected::Operand(operand) => write!(f, "{}", operand),
            Expected::EndOfLine => write!(f, "end of line"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("Invalid symbol '{0}', expected one of Z, S, T, J or R")]
    UnknownKeyword(String),

    #[error("Initialisation instructions are not allowed after the first instruction")]
    InitializationClosed,

    #[error("Unexpected end of line, expected {0}")]
    UnexpectedEnd(Expected),

    #[error("Invalid symbol '{found}', expected {expected}")]
    UnexpectedSymbol { found: String, expected: Expected },

    #[error("Missing {0}")]
    MissingOperand(Operand),

    #[error("The {0} is too large")]
    OperandTooLarge(Operand),
}

/// Syntax error within a single line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("column {column}: {kind}")]
pub struct ParseError {
    /// 1-based character offset of the offending symbol
    pub column: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(column: usize, kind: ParseErrorKind) -> Self {
        Self { column, kind }
    }
}

#[derive(Debug, Error)]
pub enum AssemblerError {
    #[error("Syntax error at line {line}, column {column}: {kind}")]
    Syntax {
        line: usize,
        column: usize,
        kind: ParseErrorKind,
    },

    #[error("I/O error at line {line}: {source}")]
    Io {
        line: usize,
        #[source]
        source: io::Error,
    },
}

impl AssemblerError {
    /// 1-based source line
    pub fn line(&self) -> usize {
        match self {
            AssemblerError::Syntax { line, .. } | AssemblerError::Io { line, .. } => *line,
        }
    }

    /// 1-based column, unknown for I/O faults
    pub fn column(&self) -> Option<usize> {
        match self {
            AssemblerError::Syntax { column, .. } => Some(*column),
            AssemblerError::Io { .. } => None,
        }
    }
}

/// Every diagnostic collected while assembling a source that failed
#[derive(Debug, Error)]
#[error("source contains {} invalid line(s)", .errors.len())]
pub struct InvalidSource {
    pub errors: Vec<AssemblerError>,
}

pub type Result<T> = std::result::Result<T, ParseError>;
