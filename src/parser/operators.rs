//! Operators and precedence.
//!
//! From loosest to tightest: `or`, `and`, comparisons, concatenation,
//! addition, multiplication, then the unary operators and primaries. Every
//! binary level associates to the left.

use super::chunks::chunk_expression;
use super::containers::{message_box, part, selection};
use super::functions::function_call;
use super::lexical::{phrase, token};
use super::literals::{literal, variable};
use super::properties::property;
use super::schema::{Schema, choice};
use crate::ast::{BinaryOperator, Expression, UnaryOperator};

/// Operator spellings of one level, longest first where one is a prefix of
/// another (`&&` before `&`, `<=` before `<`).
fn operators(spellings: Vec<(Schema<()>, BinaryOperator)>) -> Schema<BinaryOperator> {
    choice(
        spellings
            .into_iter()
            .map(|(spelling, operator)| spelling.to(operator))
            .collect(),
    )
}

fn level(operand: Schema<Expression>, operator: Schema<BinaryOperator>) -> Schema<Expression> {
    operand.fold_left(operator, |left, operator, right| {
        Expression::binary(operator, left, right)
    })
}

/// Every binary level stacked on top of `unary`.
pub fn binary(unary: Schema<Expression>) -> Schema<Expression> {
    use BinaryOperator::*;

    let multiplication = level(
        unary,
        operators(vec![
            (token("*"), Multiplication),
            (token("/"), Division),
            (token("div"), IntegerDivision),
            (token("mod"), Modulo),
        ]),
    );
    let addition = level(
        multiplication,
        operators(vec![(token("+"), Addition), (token("-"), Subtraction)]),
    );
    let concatenation = level(
        addition,
        operators(vec![
            (token("&&"), ConcatenationWithSpace),
            (token("&"), Concatenation),
        ]),
    );
    let comparison = level(
        concatenation,
        operators(vec![
            (phrase(&["is", "not", "in"]), IsNotIn),
            (phrase(&["is", "in"]), IsIn),
            (phrase(&["is", "not"]), NotEqual),
            (token("is"), Equal),
            (token("contains"), Contains),
            (token("<>"), NotEqual),
            (token("≠"), NotEqual),
            (token("<="), LessOrEqual),
            (token("≤"), LessOrEqual),
            (token(">="), GreaterOrEqual),
            (token("≥"), GreaterOrEqual),
            (token("<"), LessThan),
            (token(">"), GreaterThan),
            (token("="), Equal),
        ]),
    );
    let and = level(comparison, operators(vec![(token("and"), And)]));
    level(and, operators(vec![(token("or"), Or)]))
}

/// `not` and `-` apply to the following unary expression only, so `- 2 + 2`
/// is `(-2) + 2`.
pub fn unary(factor: Schema<Expression>, primary: Schema<Expression>) -> Schema<Expression> {
    choice(vec![
        token("not")
            .ignore_then(factor.clone())
            .map(|operand| Expression::unary(UnaryOperator::Not, operand)),
        token("-")
            .ignore_then(factor)
            .map(|operand| Expression::unary(UnaryOperator::Opposite, operand)),
        primary,
    ])
}

/// The alternatives of a primary expression, in priority order. Calls come
/// before containers so that `exp(2)` is not read as the variable `exp`;
/// literals come before variables so that `true` stays a boolean.
pub fn primary(expression: Schema<Expression>, factor: Schema<Expression>) -> Schema<Expression> {
    let parenthesized = token("(")
        .ignore_then(expression.clone())
        .then_ignore(token(")"))
        .map(|inner| Expression::unary(UnaryOperator::Parentheses, inner));

    choice(vec![
        parenthesized,
        function_call(expression, factor.clone()).map(Expression::FunctionCall),
        chunk_expression(factor.clone()).map(Expression::Chunk),
        property(factor.clone()).map(Expression::Property),
        message_box().map(Expression::ContainerContent),
        selection().map(Expression::ContainerContent),
        part(factor).map(Expression::part),
        literal().map(Expression::Literal),
        variable(),
    ])
}
