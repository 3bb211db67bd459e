//! Lexer for the qasmf instruction format.

use logos::Logos;

/// Tokens of a single qasmf line.
///
/// Anything that is neither whitespace nor a comma is a word: operator
/// names, qubit names and angles are all kept as opaque text.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\x0C]+")]
pub enum Token {
    #[token(",")]
    Comma,

    #[regex(r"[^ \t\r\n\x0C,]+", |lex| lex.slice().to_string())]
    Word(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Comma => write!(f, ","),
            Token::Word(s) => write!(f, "{s}"),
        }
    }
}

/// A token with its span information.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub span: std::ops::Range<usize>,
}

/// Tokenize one line of qasmf source.
///
/// Line breaks are not tokens; callers split the source into lines first.
pub fn tokenize(line: &str) -> Vec<Result<SpannedToken, (std::ops::Range<usize>, String)>> {
    let mut lexer = Token::lexer(line);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        if let Ok(token) = result {
            tokens.push(Ok(SpannedToken { token, span }));
        } else {
            let slice = line[span.clone()].escape_default();
            tokens.push(Err((span, format!("Invalid token: '{slice}'"))));
        }
    }

    tokens
}
