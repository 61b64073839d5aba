//! Tokenizer for lambda expression text.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::{Error, Result};

/// Kind of a lexical token.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    /// Punctuation or operator, e.g. `.`, `=>`, `!=`.
    Symbol,
    /// Double-quoted string literal, quotes included in the span.
    String,
    /// Numeric literal.
    Number,
    /// Identifier or keyword.
    Ident,
    /// End of input.
    Eof,
}

/// Byte range of a token in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start offset (inclusive).
    pub start: usize,
    /// End offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Returns the text covered by this span.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// A token and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token(pub TokenKind, pub Span);

// Longest symbols first so that `=>` wins over `=`.
const SYMBOLS: &[&str] = &[
    "=>", "==", "!=", "<=", ">=", "&&", "||", "??", "?.", ".", ",", "(", ")", "[", "]", "!", "<",
    ">", "+", "-", "*", "/", "%", "?", ":", "=", "&", "|",
];

/// Splits expression text into tokens.
#[derive(Clone)]
pub struct Lexer<'source> {
    source: &'source str,
    iter: Peekable<CharIndices<'source>>,
}

impl<'source> Lexer<'source> {
    /// Creates a lexer over `source`.
    #[must_use]
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            iter: source.char_indices().peekable(),
        }
    }

    fn peek(&mut self) -> (usize, char) {
        match self.iter.peek() {
            Some((index, chr)) => (*index, *chr),
            _ => (self.source.len(), '\x00'),
        }
    }

    fn skip_ws(&mut self) {
        while self.peek().1.is_whitespace() {
            self.iter.next();
        }
    }

    fn read_ident(&mut self) -> Token {
        let start = self.peek().0;
        loop {
            let ch = self.peek().1;
            if ch.is_alphanumeric() || ch == '_' {
                self.iter.next();
            } else {
                break;
            }
        }
        let end = self.peek().0;
        Token(TokenKind::Ident, Span { start, end })
    }

    // verbatim identifier: @class
    fn read_verbatim_ident(&mut self) -> Result<Token> {
        let start = self.peek().0;
        self.iter.next();
        let ch = self.peek().1;
        if !(ch.is_alphabetic() || ch == '_') {
            return Err(Error::Parse {
                position: start,
                message: "expected identifier after '@'".to_string(),
            });
        }
        Ok(self.read_ident())
    }

    fn read_number(&mut self) -> Result<Token> {
        let start = self.peek().0;
        while self.peek().1.is_ascii_digit() {
            self.iter.next();
        }
        // Fraction only when a digit follows, so `1.ToString()` stays a call.
        if self.peek().1 == '.' {
            let mut ahead = self.iter.clone();
            ahead.next();
            if ahead.peek().is_some_and(|(_, c)| c.is_ascii_digit()) {
                self.iter.next();
                while self.peek().1.is_ascii_digit() {
                    self.iter.next();
                }
            }
        }
        // C# numeric suffixes: 1L, 2.0m, 3f ...
        while matches!(self.peek().1, 'l' | 'L' | 'u' | 'U' | 'm' | 'M' | 'f' | 'F' | 'd' | 'D')
        {
            self.iter.next();
        }
        let (end, ch) = self.peek();
        if ch == '_' || ch.is_alphanumeric() {
            return Err(Error::Parse {
                position: end,
                message: "invalid number".to_string(),
            });
        }
        Ok(Token(TokenKind::Number, Span { start, end }))
    }

    fn read_string(&mut self) -> Result<Token> {
        let start = self.peek().0;
        self.iter.next();
        loop {
            match self.iter.next() {
                Some((_, '\\')) => {
                    self.iter.next();
                }
                Some((_, '"')) => break,
                Some(_) => {}
                None => {
                    return Err(Error::Parse {
                        position: start,
                        message: "unterminated string".to_string(),
                    })
                }
            }
        }
        let end = self.peek().0;
        Ok(Token(TokenKind::String, Span { start, end }))
    }

    fn read_symbol(&mut self) -> Result<Token> {
        let start = self.peek().0;
        let rest = &self.source[start..];
        let Some(symbol) = SYMBOLS.iter().find(|s| rest.starts_with(**s)) else {
            return Err(Error::Parse {
                position: start,
                message: format!("unexpected character '{}'", self.peek().1),
            });
        };
        for _ in 0..symbol.len() {
            self.iter.next();
        }
        Ok(Token(
            TokenKind::Symbol,
            Span {
                start,
                end: start + symbol.len(),
            },
        ))
    }

    /// Produces the next token, `Eof` once input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] on malformed numbers, unterminated strings
    /// and characters that start no known token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_ws();
        let (start, chr) = self.peek();
        match chr {
            '\x00' if start == self.source.len() => Ok(Token(
                TokenKind::Eof,
                Span {
                    start,
                    end: start,
                },
            )),
            '"' => self.read_string(),
            c if c.is_ascii_digit() => self.read_number(),
            '@' => self.read_verbatim_ident(),
            c if c.is_alphabetic() || c == '_' => Ok(self.read_ident()),
            _ => self.read_symbol(),
        }
    }

    /// Tokenizes the whole input, including the trailing `Eof`.
    ///
    /// # Errors
    ///
    /// Propagates the first lexical error.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.0 == TokenKind::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }
}
