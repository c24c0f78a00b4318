//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the top-level driver.
//! The parser is plain recursive descent: one function per production, each
//! reading the current token through the [`TokenSource`] the parser owns.
//!
//! Primary expressions are dispatched through a lookup table keyed by token
//! kind (see [`super::lookups`]).

use std::rc::Rc;

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        source::{TokenSource, TokenStream},
        tokens::{Token, TokenKind},
    },
    Config, Position,
};

use super::{
    functions::parse_top_level,
    lookups::{create_token_lookups, NUDHandler, NUDLookup},
};

/// The main parser structure that maintains parsing state.
///
/// Owns its token cursor exclusively, so independent inputs can be parsed by
/// independent parsers.
pub struct Parser<S: TokenSource> {
    /// The token cursor
    source: S,
    /// Grammar switches
    config: Config,
    /// Lookup table for primary expression handlers
    nud_lookup: NUDLookup<S>,
    /// End of the most recently consumed token
    prev_end: Position,
}

impl<S: TokenSource> Parser<S> {
    /// Creates a parser over `source` with its lookup tables registered.
    pub fn new(source: S, config: Config) -> Self {
        let prev_end = source.position();
        let mut parser = Parser {
            source,
            config,
            nud_lookup: NUDLookup::new(),
            prev_end,
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.source.current_token()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.source.current_kind()
    }

    /// Identifier text of the current token.
    pub fn identifier_str(&self) -> &str {
        self.source.identifier_str()
    }

    /// Numeric value of the current token, if it is a number literal.
    pub fn number_value(&self) -> Option<f64> {
        self.source.number_value()
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Token {
        let token = self.source.advance();
        self.prev_end = token.span.end.clone();
        token
    }

    /// Consumes a token of `expected_kind`, or fails with `error` at the
    /// current token.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: ErrorImpl,
    ) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(self.error(error));
        }

        Ok(self.advance())
    }

    /// Builds an error positioned at the current token.
    pub fn error(&self, error: ErrorImpl) -> Error {
        Error::new(error, self.get_position())
    }

    /// Checks if there is anything left to parse.
    pub fn has_tokens(&self) -> bool {
        !self.source.at_eof()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a reference to the primary expression lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup<S> {
        &self.nud_lookup
    }

    /// Registers a primary expression handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler<S>) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.source.position()
    }

    /// Returns where the last consumed token ended.
    pub fn get_prev_end(&self) -> Position {
        self.prev_end.clone()
    }
}

/// Parses every top-level construct in `parser`'s token stream.
///
/// Each construct yields its own result. A failing construct is dropped as a
/// whole: everything up to and including the next `;` is discarded, so one
/// failure yields exactly one error. Stray `;` between constructs are ignored.
pub fn parse_program<S: TokenSource>(parser: &mut Parser<S>) -> Vec<Result<Expr, Error>> {
    let mut items = vec![];

    while parser.has_tokens() {
        if parser.current_token_kind() == TokenKind::Semicolon {
            parser.advance();
            continue;
        }

        let item = parse_top_level(parser);
        match &item {
            Ok(expr) => tracing::debug!(
                "parsed top-level {:?} at {}..{}",
                expr.get_expr_type(),
                expr.get_span().start.0,
                expr.get_span().end.0
            ),
            Err(error) => {
                tracing::debug!("dropping top-level construct: {}", error);
                skip_construct(parser);
            }
        }
        items.push(item);
    }

    items
}

/// Discards tokens up to and including the next `;`, or up to EOF.
fn skip_construct<S: TokenSource>(parser: &mut Parser<S>) {
    while parser.has_tokens() {
        if parser.advance().kind == TokenKind::Semicolon {
            break;
        }
    }
}

/// Parses a stream of tokens into top-level ASTs.
///
/// This is the main entry point for parsing. It creates a parser instance
/// and parses constructs until EOF.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with state after parsing)
/// - One result per top-level construct, in source order
pub fn parse(
    tokens: Vec<Token>,
    file: Rc<String>,
    config: Config,
) -> (Parser<TokenStream>, Vec<Result<Expr, Error>>) {
    let mut parser = Parser::new(TokenStream::new(tokens, file), config);
    let items = parse_program(&mut parser);

    (parser, items)
}
