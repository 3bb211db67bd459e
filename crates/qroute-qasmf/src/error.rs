//! Error types for the qasmf parser.

use thiserror::Error;

/// Errors that can occur during parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// Lexer error (invalid token).
    #[error("Lexer error at line {line}, column {column}: {message}")]
    LexerError {
        line: usize,
        column: usize,
        message: String,
    },

    /// A line does not match the instruction grammar.
    #[error("Malformed instruction at line {line} ('{text}'): {message}")]
    MalformedInstruction {
        line: usize,
        text: String,
        message: String,
    },
}

impl ParseError {
    /// The 1-based line the error was found on.
    pub fn line(&self) -> usize {
        match self {
            ParseError::LexerError { line, .. } | ParseError::MalformedInstruction { line, .. } => {
                *line
            }
        }
    }
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
