//! The cursor the parser reads tokens through.
//!
//! The parser never indexes a token vector directly; it only looks at the
//! current token and asks for the next one. Anything that can do that (an
//! eager token list, a streaming lexer, a test fixture) can drive the parser.

use std::rc::Rc;

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// Current-token/advance view over a token stream.
pub trait TokenSource {
    /// The token under the cursor. Past the end this is an EOF token.
    fn current_token(&self) -> &Token;

    /// Discards the current token and loads the next one, returning the
    /// discarded token.
    fn advance(&mut self) -> Token;

    fn current_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Identifier text; only meaningful when the current kind is `Identifier`.
    fn identifier_str(&self) -> &str {
        &self.current_token().value
    }

    /// Numeric value of the current token, `None` unless it is a well-formed
    /// number literal.
    fn number_value(&self) -> Option<f64> {
        match self.current_kind() {
            TokenKind::Number => self.current_token().value.parse().ok(),
            _ => None,
        }
    }

    /// Where the current token starts.
    fn position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    fn at_eof(&self) -> bool {
        self.current_kind() == TokenKind::EOF
    }
}

/// A `TokenSource` over an already tokenized vector.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
    eof: Token,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        // Reading past the end keeps yielding EOF at the last known offset
        let end = tokens
            .last()
            .map(|token| token.span.end.clone())
            .unwrap_or_else(|| Position(0, Rc::clone(&file)));

        TokenStream {
            tokens,
            pos: 0,
            eof: MK_TOKEN!(
                TokenKind::EOF,
                String::from("EOF"),
                Span {
                    start: end.clone(),
                    end
                }
            ),
        }
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.pos)
    }
}

impl TokenSource for TokenStream {
    fn current_token(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }
}
