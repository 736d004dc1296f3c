//! # Lexer for URM source lines

use std::iter::Peekable;

use logos::{Logos, SpannedIter};

/// Tokens of a single URM line
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\f]+")] // Skip whitespace
pub enum Token {
    /// `R`, initialization keyword
    #[regex("[rR]")]
    Register,

    /// `Z`
    #[regex("[zZ]")]
    Zero,

    /// `S`
    #[regex("[sS]")]
    Increment,

    /// `T`
    #[regex("[tT]")]
    Transfer,

    /// `J`
    #[regex("[jJ]")]
    Jump,

    /// Unsigned decimal digit run
    #[regex("[0-9]+")]
    Digits,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(",")]
    Comma,

    #[token("=")]
    Equals,
}

/// A token with its text and 1-based column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'a> {
    /// `None` for a symbol no token matches
    pub token: Option<Token>,
    pub text: &'a str,
    pub column: usize,
}

impl<'a> Lexeme<'a> {
    pub fn is(&self, token: Token) -> bool {
        self.token == Some(token)
    }
}

/// Column-tracking cursor over the tokens of one line
pub struct Cursor<'a> {
    line: &'a str,
    tokens: Peekable<SpannedIter<'a, Token>>,
}

impl<'a> Cursor<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            tokens: Token::lexer(line).spanned().peekable(),
        }
    }

    /// Consume the next lexeme, `None` at end of line
    pub fn next(&mut self) -> Option<Lexeme<'a>> {
        let (token, span) = self.tokens.next()?;
        let text = match token {
            Ok(_) => self.line.get(span.clone()).unwrap_or_default(),
            Err(()) => self.symbol_at(span.start),
        };
        Some(Lexeme {
            token: token.ok(),
            text,
            column: self.column_of(span.start),
        })
    }

    /// Column one past the last character of the line
    pub fn end_column(&self) -> usize {
        self.line.chars().count() + 1
    }

    fn column_of(&self, offset: usize) -> usize {
        self.line
            .get(..offset)
            .map_or(offset, |prefix| prefix.chars().count())
            + 1
    }

    // Unmatched input is reported one character at a time
    fn symbol_at(&self, offset: usize) -> &'a str {
        let rest = self.line.get(offset..).unwrap_or_default();
        let width = rest.chars().next().map_or(0, char::len_utf8);
        &rest[..width]
    }
}
