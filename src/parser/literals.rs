//! Literals and bare identifiers.

use super::lexical::{fold_eq, identifier, number, quoted_string, token};
use super::schema::{Schema, choice};
use crate::ast::{Expression, Literal};

/// Words that can never name a variable or a custom function.
pub const RESERVED_WORDS: &[&str] = &[
    "the", "of", "in", "to", "and", "or", "not", "div", "mod", "is", "contains",
];

pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.iter().any(|reserved| fold_eq(word, reserved))
}

pub fn boolean() -> Schema<Literal> {
    choice(vec![
        token("true").to(Literal::Boolean(true)),
        token("false").to(Literal::Boolean(false)),
    ])
}

/// Booleans first, so `true` never reads as a variable; then quoted strings
/// and numbers.
pub fn literal() -> Schema<Literal> {
    choice(vec![
        boolean(),
        quoted_string().map(Literal::QuotedString),
        number(),
    ])
}

/// An identifier that is not a reserved word.
pub fn name() -> Schema<String> {
    identifier().filter_map(|name| (!is_reserved(&name)).then_some(name))
}

/// A bare name, read as the content of a variable.
pub fn variable() -> Schema<Expression> {
    name().map(Expression::variable)
}

/// A literal, or failing that a variable. Stands in for the full factor
/// rule when testing rules in isolation.
#[cfg(test)]
pub fn literal_or_variable() -> Schema<Expression> {
    literal().map(Expression::Literal).or(variable())
}
