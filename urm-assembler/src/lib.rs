//! URM Assembler
//!
//! Parse URM source text into a [`Program`](urm_spec::Program) and the
//! initial register values set by its `R n = v` preamble.
//!
//! ## Example
//!
//! ```rust
//! use urm_assembler::assemble;
//!
//! let source = r#"
//!     R 0 = 5
//!     S(0)
//!     S(0)
//! "#;
//!
//! let assembly = assemble(source).unwrap();
//! assert_eq!(assembly.program.len(), 2);
//! assert_eq!(assembly.registers.get(0), Some(5));
//! ```

pub mod error;
pub mod lexer;
pub mod context;
pub mod parser;
pub mod assembler;

pub use error::{AssemblerError, Expected, InvalidSource, Operand, ParseError, ParseErrorKind, Result};
pub use context::ParseContext;
pub use parser::{parse_line, ParsedLine};
pub use assembler::{assemble, assemble_lines, assemble_reader, Assembler, Assembly};
