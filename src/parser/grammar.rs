//! The composed grammar and its entry points.

use thiserror::Error;
use tracing::{debug, trace};

use super::chunks::chunk_container;
use super::containers::{message_box, part, selection};
use super::lexical::skip_blanks;
use super::literals::name;
use super::operators::{binary, primary, unary};
use super::schema::{Deferred, Schema, choice, ensure_bound};
use crate::ast::{ContainerDescriptor, Expression};
use crate::source::TextSource;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("input is not an expression")]
    NoMatch,
    #[error("unexpected input at offset {offset}: {remaining:?}")]
    TrailingInput { offset: usize, remaining: String },
}

/// The HyperTalk expression grammar.
///
/// Building it ties all the rules together once; afterwards it is immutable
/// and can be shared between threads to parse any number of inputs.
#[derive(Debug, Clone)]
pub struct Grammar {
    expression: Schema<Expression>,
    // Kept for the placeholders bound to them, which only hold weak links.
    factor: Schema<Expression>,
    container: Schema<ContainerDescriptor>,
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

impl Grammar {
    pub fn new() -> Self {
        // Placeholders for the rules that refer back to themselves.
        let expression = Deferred::new("expression");
        let factor = Deferred::new("factor");
        let container = Deferred::new("container");

        let primary = primary(expression.schema(), factor.schema());
        let concrete_factor = unary(factor.schema(), primary);
        let concrete_expression = binary(concrete_factor.clone());
        let concrete_container = choice(vec![
            chunk_container(factor.schema(), container.schema()),
            message_box(),
            selection(),
            part(factor.schema()).map(ContainerDescriptor::ButtonOrField),
            name().map(ContainerDescriptor::Variable),
        ]);

        expression.bind(&concrete_expression);
        factor.bind(&concrete_factor);
        container.bind(&concrete_container);
        ensure_bound(&[&expression, &factor, &container]);
        debug!("HyperTalk expression grammar constructed");

        Self {
            expression: concrete_expression,
            factor: concrete_factor,
            container: concrete_container,
        }
    }

    /// Parse a whole expression. `None` when the text is not exactly one
    /// expression, possibly surrounded by blanks.
    pub fn parse(&self, text: &str) -> Option<Expression> {
        self.try_parse(text).ok()
    }

    /// Like [`Grammar::parse`], also telling where parsing stopped.
    pub fn try_parse(&self, text: &str) -> Result<Expression, ParseError> {
        complete(&self.expression, text)
    }

    /// Parse a container, the destination of a `put` command. Unlike
    /// [`Grammar::parse`], a chunk here is a [`ContainerDescriptor::ChunkOf`].
    pub fn parse_container(&self, text: &str) -> Option<ContainerDescriptor> {
        complete(&self.container, text).ok()
    }

    /// Parse a unary-level expression: an operand without binary operators.
    pub fn parse_factor(&self, text: &str) -> Option<Expression> {
        complete(&self.factor, text).ok()
    }

    /// Parse the text handed over by the stack-file layer, ignoring the line
    /// breaks that terminate it.
    pub fn parse_source<S: TextSource + ?Sized>(&self, source: &S) -> Option<Expression> {
        let text = source.read_text();
        self.parse(text.trim_end_matches(['\r', '\n']))
    }
}

fn complete<T: 'static>(schema: &Schema<T>, text: &str) -> Result<T, ParseError> {
    let Some((value, end)) = schema.parse_at(text, 0) else {
        trace!(text, "no rule matched");
        return Err(ParseError::NoMatch);
    };
    let end = skip_blanks(text, end);
    if end < text.len() {
        trace!(text, offset = end, "parse stopped before the end of the input");
        return Err(ParseError::TrailingInput {
            offset: end,
            remaining: text[end..].to_string(),
        });
    }
    Ok(value)
}
