use crate::{
    ast::{
        ast::Expr,
        expressions::{CallExpr, IfExpr, NumberExpr, VariableExpr, WhileExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{source::TokenSource, tokens::TokenKind},
    Span,
};

use super::parser::Parser;

/// Expression entry point. There are no binary operators, so this is a
/// primary expression.
pub fn parse_expression<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    parse_primary(parser)
}

pub fn parse_primary<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let token_kind = parser.current_token_kind();
    tracing::trace!("parse_primary at {}", parser.current_token());

    let handler = parser.get_nud_lookup().get(&token_kind).copied();
    match handler {
        Some(handler) => handler(parser),
        None => Err(parser.error(ErrorImpl::UnknownToken {
            token: parser.current_token().value.clone(),
        })),
    }
}

pub fn parse_number<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let Some(value) = parser.number_value() else {
        return Err(parser.error(ErrorImpl::NumberParseError {
            token: parser.current_token().value.clone(),
        }));
    };

    let token = parser.advance();
    Ok(NumberExpr::new(value, token.span).into())
}

/// `( expr )`. The parentheses only group; the inner expression is returned
/// as is.
pub fn parse_paren<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expression(parser)?;
    parser.expect_error(TokenKind::CloseParen, ErrorImpl::ExpectedCloseParen)?;

    Ok(expr)
}

/// A variable reference, or a call when calls are enabled and the name is
/// followed by `(`.
pub fn parse_identifier<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let name = parser.identifier_str().to_string();
    let span = parser.advance().span;

    if !parser.config().call_expressions || parser.current_token_kind() != TokenKind::OpenParen {
        return Ok(VariableExpr::new(name, span).into());
    }

    parser.advance();
    let mut args = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            args.push(parse_expression(parser)?);

            match parser.current_token_kind() {
                TokenKind::CloseParen => break,
                TokenKind::Comma => {
                    parser.advance();
                }
                _ => return Err(parser.error(ErrorImpl::ExpectedArgumentSeparator)),
            }
        }
    }

    let end = parser.advance().span.end;

    Ok(CallExpr::new(
        name,
        args,
        Span {
            start: span.start,
            end,
        },
    )
    .into())
}

/// `if <cond> <then> else <else>`. Both branches are bare expressions; `else`
/// is mandatory.
pub fn parse_if<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let start = parser.advance().span.start;

    let condition = parse_expression(parser)?;
    let then_branch = parse_expression(parser)?;

    parser.expect_error(TokenKind::Else, ErrorImpl::ExpectedElse)?;

    let else_branch = parse_expression(parser)?;

    Ok(IfExpr::new(
        Some(condition),
        Some(then_branch),
        Some(else_branch),
        Span {
            start,
            end: parser.get_prev_end(),
        },
    )
    .into())
}

pub fn parse_while<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    let start = parser.advance().span.start;

    let condition = parse_expression(parser)?;
    let body = parse_block(parser)?;

    Ok(WhileExpr::new(
        Some(condition),
        Some(body),
        Span {
            start,
            end: parser.get_prev_end(),
        },
    )
    .into())
}

/// `{ expr [;] }`. A block is transparent: it yields its inner expression.
pub fn parse_block<S: TokenSource>(parser: &mut Parser<S>) -> Result<Expr, Error> {
    parser.expect_error(TokenKind::OpenCurly, ErrorImpl::ExpectedBlockStart)?;

    let body = parse_expression(parser)?;

    if parser.current_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    parser.expect_error(TokenKind::CloseCurly, ErrorImpl::ExpectedBlockEnd)?;

    Ok(body)
}
