use std::collections::HashMap;

use crate::{
    ast::ast::Expr,
    errors::errors::Error,
    lexer::{source::TokenSource, tokens::TokenKind},
};

use super::{expr::*, parser::Parser};

pub type NUDHandler<S> = fn(&mut Parser<S>) -> Result<Expr, Error>;

// Lookup table inside parser struct, so it's easier
pub type NUDLookup<S> = HashMap<TokenKind, NUDHandler<S>>;

pub fn create_token_lookups<S: TokenSource>(parser: &mut Parser<S>) {
    // Literals and symbols
    parser.nud(TokenKind::Number, parse_number);
    parser.nud(TokenKind::Identifier, parse_identifier);
    parser.nud(TokenKind::OpenParen, parse_paren);

    // Control flow
    parser.nud(TokenKind::If, parse_if);
    parser.nud(TokenKind::While, parse_while);
}
