//! Line parser
//!
//! Classifies one line of URM source and validates it completely. Grammar
//! (keywords are case-insensitive, whitespace is allowed between tokens):
//!
//! ```text
//! line    := blank | init | instr
//! init    := 'R' digits '=' digits
//! instr   := 'Z' '(' digits ')'
//!          | 'S' '(' digits ')'
//!          | 'T' '(' digits ',' digits ')'
//!          | 'J' '(' digits ',' digits ',' digits ')'
//! ```
//!
//! Errors carry the 1-based column of the symbol where something else was
//! expected, or one past the end of the line if it ended too early.

use std::str::FromStr;

use tracing::debug;
use urm_spec::{Instruction, RegisterIndex, RegisterValue};

use crate::context::ParseContext;
use crate::error::{Expected, Operand, ParseError, ParseErrorKind, Result};
use crate::lexer::{Cursor, Lexeme, Token};

/// Outcome of parsing one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedLine {
    /// Empty or whitespace-only line
    Blank,

    /// `R register = value`
    Initialization {
        register: RegisterIndex,
        value: RegisterValue,
    },

    Instruction(Instruction),
}

/// Parse a single line of source text
///
/// Any instruction keyword closes the initialization phase of `context`, even
/// if the rest of the line turns out to be malformed.
pub fn parse_line(line: &str, context: &mut ParseContext) -> Result<ParsedLine> {
    let mut cursor = Cursor::new(line);

    let keyword = match cursor.next() {
        Some(keyword) => keyword,
        None => return Ok(ParsedLine::Blank),
    };

    let parsed = match keyword.token {
        Some(Token::Register) => {
            if !context.is_initialization_open() {
                return Err(ParseError::new(
                    keyword.column,
                    ParseErrorKind::InitializationClosed,
                ));
            }
            parse_initialization(&mut cursor)?
        }
        Some(Token::Zero) | Some(Token::Increment) | Some(Token::Transfer) | Some(Token::Jump) => {
            context.close_initialization();
            ParsedLine::Instruction(parse_instruction(&mut cursor, keyword)?)
        }
        _ => {
            return Err(ParseError::new(
                keyword.column,
                ParseErrorKind::UnknownKeyword(keyword.text.to_string()),
            ))
        }
    };

    expect_end(&mut cursor)?;
    debug!(line = context.line(), ?parsed, "parsed line");
    Ok(parsed)
}

/// `digits '=' digits`, after the `R` keyword
fn parse_initialization(cursor: &mut Cursor<'_>) -> Result<ParsedLine> {
    let register = expect_number(cursor, Operand::Register)?;
    expect(cursor, Token::Equals, Expected::Equals)?;
    let value = expect_number(cursor, Operand::Value)?;

    Ok(ParsedLine::Initialization { register, value })
}

fn parse_instruction(cursor: &mut Cursor<'_>, keyword: Lexeme<'_>) -> Result<Instruction> {
    expect(cursor, Token::LParen, Expected::OpenParen)?;

    let instruction = match keyword.token {
        Some(Token::Zero) => {
            let register = parse_last_operand(cursor, Operand::Register)?;
            Instruction::Zero { register }
        }
        Some(Token::Increment) => {
            let register = parse_last_operand(cursor, Operand::Register)?;
            Instruction::Increment { register }
        }
        Some(Token::Transfer) => {
            let source = parse_operand(cursor, Operand::Register)?;
            let destination = parse_last_operand(cursor, Operand::Register)?;
            Instruction::Copy { source, destination }
        }
        _ => {
            let left = parse_operand(cursor, Operand::Register)?;
            let right = parse_operand(cursor, Operand::Register)?;
            let target = parse_last_operand(cursor, Operand::Target)?;
            Instruction::JumpIfEqual { left, right, target }
        }
    };

    Ok(instruction)
}

/// Operand followed by `,`
fn parse_operand<T: FromStr>(cursor: &mut Cursor<'_>, operand: Operand) -> Result<T> {
    let value = expect_number(cursor, operand)?;
    expect(cursor, Token::Comma, Expected::Comma)?;
    Ok(value)
}

/// Operand followed by `)`
fn parse_last_operand<T: FromStr>(cursor: &mut Cursor<'_>, operand: Operand) -> Result<T> {
    let value = expect_number(cursor, operand)?;
    expect(cursor, Token::RParen, Expected::CloseParen)?;
    Ok(value)
}

fn expect_number<T: FromStr>(cursor: &mut Cursor<'_>, operand: Operand) -> Result<T> {
    let end = cursor.end_column();
    let lexeme = cursor.next().ok_or_else(|| {
        ParseError::new(end, ParseErrorKind::UnexpectedEnd(Expected::Operand(operand)))
    })?;

    match lexeme.token {
        // Digit runs only fail to convert when they overflow
        Some(Token::Digits) => lexeme.text.parse().map_err(|_| {
            ParseError::new(lexeme.column, ParseErrorKind::OperandTooLarge(operand))
        }),
        Some(Token::Comma) | Some(Token::RParen) | Some(Token::Equals) => Err(ParseError::new(
            lexeme.column,
            ParseErrorKind::MissingOperand(operand),
        )),
        _ => Err(unexpected(lexeme, Expected::Operand(operand))),
    }
}

fn expect(cursor: &mut Cursor<'_>, token: Token, expected: Expected) -> Result<()> {
    match cursor.next() {
        Some(lexeme) if lexeme.is(token) => Ok(()),
        Some(lexeme) => Err(unexpected(lexeme, expected)),
        None => Err(ParseError::new(
            cursor.end_column(),
            ParseErrorKind::UnexpectedEnd(expected),
        )),
    }
}

fn expect_end(cursor: &mut Cursor<'_>) -> Result<()> {
    match cursor.next() {
        Some(lexeme) => Err(unexpected(lexeme, Expected::EndOfLine)),
        None => Ok(()),
    }
}

fn unexpected(lexeme: Lexeme<'_>, expected: Expected) -> ParseError {
    ParseError::new(
        lexeme.column,
        ParseErrorKind::UnexpectedSymbol {
            found: lexeme.text.to_string(),
            expected,
        },
    )
}
