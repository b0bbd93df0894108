//! Function calls.
//!
//! Builtins form a closed set and are the only names accepted after `the`
//! or before `of`. Custom functions are only recognized by their
//! parentheses, so `the coucou of 2` is not a call at all.

use super::lexical::{fold_eq, identifier, token, tokens};
use super::literals::is_reserved;
use super::schema::{Schema, choice};
use crate::ast::{BuiltinFunction, Exactness, Expression, FunctionCall};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Arity {
    Nullary,
    Unary,
}

/// Alternate spellings besides the documented names.
const ALIASES: &[(&str, BuiltinFunction)] = &[
    ("secs", BuiltinFunction::Seconds),
    ("cmdKey", BuiltinFunction::CommandKey),
];

impl BuiltinFunction {
    pub fn lookup(name: &str) -> Option<BuiltinFunction> {
        BuiltinFunction::ALL
            .iter()
            .map(|function| (function.name(), *function))
            .chain(ALIASES.iter().copied())
            .find(|(spelling, _)| fold_eq(spelling, name))
            .map(|(_, function)| function)
    }

    pub(crate) fn arity(self) -> Arity {
        use BuiltinFunction as F;
        match self {
            F::Abs
            | F::Atan
            | F::CharToNum
            | F::NumToChar
            | F::Cos
            | F::Sin
            | F::Tan
            | F::Exp
            | F::Exp1
            | F::Exp2
            | F::Ln
            | F::Ln1
            | F::Log2
            | F::Round
            | F::Sqrt
            | F::Trunc
            | F::Random
            | F::Length
            | F::Value
            | F::Param => Arity::Unary,
            _ => Arity::Nullary,
        }
    }

    /// Whether `abbr`, `short` or `long` may qualify this function.
    pub fn accepts_exactness(self) -> bool {
        matches!(
            self,
            BuiltinFunction::Date
                | BuiltinFunction::Time
                | BuiltinFunction::Target
                | BuiltinFunction::Version
        )
    }
}

pub fn exactness() -> Schema<Exactness> {
    choice(vec![
        tokens(&["abbreviated", "abbrev", "abbr"]).to(Exactness::Abbreviated),
        token("short").to(Exactness::Short),
        token("long").to(Exactness::Long),
    ])
}

fn builtin_name() -> Schema<BuiltinFunction> {
    identifier().filter_map(|name| BuiltinFunction::lookup(&name))
}

/// Build the call if the argument fits the arity.
fn builtin(
    function: BuiltinFunction,
    exactness: Option<Exactness>,
    argument: Option<Expression>,
) -> Option<FunctionCall> {
    if exactness.is_some() && !function.accepts_exactness() {
        return None;
    }
    match (function.arity(), &argument) {
        (Arity::Nullary, None) | (Arity::Unary, Some(_)) => Some(FunctionCall::Builtin {
            function,
            exactness,
            argument: argument.map(Box::new),
        }),
        _ => None,
    }
}

/// A call with parentheses. A builtin name whose arguments fit its arity
/// is the builtin; any other name that is not reserved is a custom call.
fn parenthesized(identifier: String, arguments: Option<Vec<Expression>>) -> Option<FunctionCall> {
    if let Some(function) = BuiltinFunction::lookup(&identifier) {
        let fits = matches!(
            (function.arity(), arguments.as_deref()),
            (Arity::Nullary, None) | (Arity::Unary, Some([_]))
        );
        if fits {
            return builtin(function, None, arguments.and_then(|mut arguments| arguments.pop()));
        }
    }
    (!is_reserved(&identifier)).then_some(FunctionCall::Custom {
        identifier,
        arguments,
    })
}

/// The four call forms, in order:
/// 1. `the [abbr|short|long] <builtin> [of <factor>]`
/// 2. `<builtin> of <factor>`
/// 3. `<builtin>()` or `<builtin>(<expression>)`
/// 4. `<name>(<expression>, ...)`, a custom function
///
/// Forms 3 and 4 share one rule, so the arguments are read only once.
pub fn function_call(
    expression: Schema<Expression>,
    factor: Schema<Expression>,
) -> Schema<FunctionCall> {
    let with_the = token("the")
        .ignore_then(exactness().optional())
        .then(builtin_name())
        .then(token("of").ignore_then(factor.clone()).optional())
        .filter_map(|((exactness, function), argument)| builtin(function, exactness, argument));

    let with_of = builtin_name()
        .then_ignore(token("of"))
        .then(factor)
        .filter_map(|(function, argument)| builtin(function, None, Some(argument)));

    let with_parentheses = identifier()
        .then_ignore(token("("))
        .then(expression.separated_by(token(",")).optional())
        .then_ignore(token(")"))
        .filter_map(|(identifier, arguments)| parenthesized(identifier, arguments));

    choice(vec![with_the, with_of, with_parentheses])
}
