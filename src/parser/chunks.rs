//! Chunk expressions: `char 2 of x`, `the last word of line 3 of field 1`,
//! `item 2 to 4 of x`.

use super::containers::ordinal_word;
use super::lexical::{token, tokens};
use super::schema::{Schema, choice};
use crate::ast::{
    Chunk, ChunkContainer, ChunkElement, ChunkExpression, ChunkKind, ChunkNumber,
    ContainerDescriptor, Expression, Ordinal,
};

pub fn chunk_kind() -> Schema<ChunkKind> {
    choice(vec![
        tokens(&["character", "char"]).to(ChunkKind::Character),
        token("word").to(ChunkKind::Word),
        token("line").to(ChunkKind::Line),
        token("item").to(ChunkKind::Item),
    ])
}

/// `[the] <ordinal-word> <kind>` or `<kind> <factor> [to <factor>]`.
pub fn element(factor: Schema<Expression>) -> Schema<ChunkElement> {
    let by_ordinal_word = token("the")
        .optional()
        .ignore_then(ordinal_word())
        .then(chunk_kind())
        .map(|(ordinal, kind)| ChunkElement::single(kind, ordinal));

    let by_position = chunk_kind()
        .then(factor.clone().map(Ordinal::number))
        .then(token("to").ignore_then(factor.map(Ordinal::number)).optional())
        .map(|((kind, start), end)| ChunkElement {
            kind,
            number: match end {
                Some(end) => ChunkNumber::Range(start, end),
                None => ChunkNumber::Single(start),
            },
        });

    choice(vec![by_ordinal_word, by_position])
}

/// The elements of a chunk followed by the `of` leading to what they apply
/// to. `char 2 of word 3 of x` reads both elements and stops before `x`.
fn elements(factor: Schema<Expression>) -> Schema<Chunk> {
    element(factor)
        .separated_by(token("of"))
        .then_ignore(token("of"))
        .map(|elements| Chunk { elements })
}

/// A chunk of any value. The target is a factor, so `char 1 of x & y`
/// concatenates the chunk with `y`.
pub fn chunk_expression(factor: Schema<Expression>) -> Schema<ChunkExpression> {
    elements(factor.clone())
        .then(factor)
        .map(|(chunk, target)| ChunkExpression {
            target: Box::new(target),
            chunk,
        })
}

/// A chunk of a container, as written after `put ... into`.
pub fn chunk_container(
    factor: Schema<Expression>,
    container: Schema<ContainerDescriptor>,
) -> Schema<ContainerDescriptor> {
    elements(factor)
        .then(container)
        .map(|(chunk, container)| {
            ContainerDescriptor::ChunkOf(ChunkContainer {
                container: Box::new(container),
                chunk,
            })
        })
}
