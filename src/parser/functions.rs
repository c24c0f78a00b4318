use crate::{
    ast::{
        ast::Expr,
        functions::{FunctionAst, PrototypeAst},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{source::TokenSource, tokens::TokenKind},
    Span,
};

use super::{expr::parse_expression, parser::Parser};

/// One top-level construct: a definition, an extern or a bare expression.
pub fn parse_top_level<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Def => parse_definition(parser),
        TokenKind::Extern => parse_extern(parser),
        _ => parse_expression(parser),
    }
}

/// `name ( param* )`
pub fn parse_prototype<S: TokenSource>(parser: &mut Parser<S>) -> Result<PrototypeAst, Error> {
    let name = parser.expect_error(TokenKind::Identifier, ErrorImpl::ExpectedFunctionName)?;
    parser.expect_error(TokenKind::OpenParen, ErrorImpl::ExpectedPrototypeOpen)?;

    let mut params = vec![];
    while parser.current_token_kind() == TokenKind::Identifier {
        params.push(parser.advance().value);
    }

    let close = parser.expect_error(TokenKind::CloseParen, ErrorImpl::ExpectedPrototypeClose)?;

    Ok(PrototypeAst::new(
        name.value,
        params,
        Span {
            start: name.span.start,
            end: close.span.end,
        },
    ))
}

/// `def prototype expr`
pub fn parse_definition<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let start = parser.advance().span.start;

    let prototype = parse_prototype(parser)?;
    let body = parse_expression(parser)?;

    Ok(FunctionAst::new(
        Some(prototype),
        Some(body),
        Span {
            start,
            end: parser.get_prev_end(),
        },
    )
    .into())
}

/// `extern prototype`
pub fn parse_extern<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    parser.advance();
    Ok(parse_prototype(parser)?.into())
}
