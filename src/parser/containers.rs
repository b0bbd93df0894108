//! Containers and object references: the message box, the selection, parts
//! and the cards and backgrounds they live on.
//!
//! Several of these rules read a `factor`, the unary-level expression rule,
//! for ordinals and identifiers. The caller passes in the grammar's factor
//! placeholder.

use super::lexical::{quoted_string, token, tokens};
use super::schema::{Schema, choice};
use crate::ast::{
    BackgroundDescriptor, CardDescriptor, ContainerDescriptor, Expression, Layer,
    LayerDescriptor, ObjectIdentification, Ordinal, PartDescriptor, PartType, RelativeOrdinal,
};

const CARD: &[&str] = &["card", "cd"];
const BACKGROUND: &[&str] = &["background", "bkgnd", "bg"];

/// `the message box`, `message box`, `msg box` or just `msg`.
pub fn message_box() -> Schema<ContainerDescriptor> {
    let spellings = choice(vec![
        token("message").then(token("box")).to(()),
        token("msg").then_ignore(token("box").optional()),
    ]);
    token("the")
        .optional()
        .ignore_then(spellings)
        .to(ContainerDescriptor::MessageBox)
}

pub fn selection() -> Schema<ContainerDescriptor> {
    token("the")
        .optional()
        .ignore_then(token("selection"))
        .to(ContainerDescriptor::Selection)
}

/// `first`, `second`... `tenth`, `middle`, `last` and `any`.
pub fn ordinal_word() -> Schema<Ordinal> {
    let words: [(&'static [&'static str], Ordinal); 13] = [
        (&["first"], Ordinal::First),
        (&["second"], Ordinal::Second),
        (&["third"], Ordinal::Third),
        (&["fourth"], Ordinal::Fourth),
        (&["fifth"], Ordinal::Fifth),
        (&["sixth"], Ordinal::Sixth),
        (&["seventh"], Ordinal::Seventh),
        (&["eighth"], Ordinal::Eighth),
        (&["ninth"], Ordinal::Ninth),
        (&["tenth"], Ordinal::Tenth),
        (&["middle", "mid"], Ordinal::Middle),
        (&["last"], Ordinal::Last),
        (&["any"], Ordinal::Any),
    ];
    choice(
        words
            .into_iter()
            .map(|(spellings, ordinal)| tokens(spellings).to(ordinal))
            .collect(),
    )
}

/// An ordinal word after an optional `the`, as in `the first card`.
fn leading_ordinal() -> Schema<Ordinal> {
    token("the").optional().ignore_then(ordinal_word())
}

pub fn layer() -> Schema<Layer> {
    choice(vec![
        tokens(CARD).to(Layer::Card),
        tokens(BACKGROUND).to(Layer::Background),
    ])
}

pub fn part_type() -> Schema<PartType> {
    choice(vec![
        tokens(&["field", "fld"]).to(PartType::Field),
        tokens(&["button", "btn"]).to(PartType::Button),
        token("part").to(PartType::Part),
    ])
}

/// A field with no layer keyword is a background field; a button or a part
/// is looked up on the card.
pub fn default_layer(part_type: PartType) -> Layer {
    match part_type {
        PartType::Field => Layer::Background,
        PartType::Button | PartType::Part => Layer::Card,
    }
}

/// `id <factor>`, then a quoted name, then any factor read as an ordinal.
///
/// The order matters: `field id` has no value after `id`, so it falls
/// through to the ordinal form with the variable `id` as position.
pub fn identification(factor: Schema<Expression>) -> Schema<ObjectIdentification> {
    choice(vec![
        token("id")
            .ignore_then(factor.clone())
            .map(|id| ObjectIdentification::ById(Box::new(id))),
        quoted_string().map(|name| ObjectIdentification::ByName(Box::new(Expression::string(name)))),
        factor.map(|position| ObjectIdentification::ByOrdinal(Ordinal::number(position))),
    ])
}

/// A card or background reference written with the given keywords.
fn layer_descriptor(
    keywords: &'static [&'static str],
    factor: Schema<Expression>,
) -> Schema<LayerDescriptor> {
    let keyword = tokens(keywords);
    choice(vec![
        token("this")
            .ignore_then(keyword.clone())
            .to(LayerDescriptor::Relative(RelativeOrdinal::Current)),
        token("next")
            .ignore_then(keyword.clone())
            .to(LayerDescriptor::Relative(RelativeOrdinal::Next)),
        tokens(&["previous", "prev"])
            .ignore_then(keyword.clone())
            .to(LayerDescriptor::Relative(RelativeOrdinal::Previous)),
        leading_ordinal()
            .then_ignore(keyword.clone())
            .map(|ordinal| LayerDescriptor::Identified(ObjectIdentification::ByOrdinal(ordinal))),
        keyword
            .ignore_then(identification(factor))
            .map(LayerDescriptor::Identified),
    ])
}

pub fn background_descriptor(factor: Schema<Expression>) -> Schema<BackgroundDescriptor> {
    layer_descriptor(BACKGROUND, factor).map(|descriptor| BackgroundDescriptor { descriptor })
}

/// A card, optionally followed by the background it belongs to:
/// `card 2 of bg "Index"`.
pub fn card_descriptor(factor: Schema<Expression>) -> Schema<CardDescriptor> {
    let parent = tokens(&["of", "in"]).ignore_then(background_descriptor(factor.clone()));
    layer_descriptor(CARD, factor)
        .then(parent.optional())
        .map(|(descriptor, parent_background)| CardDescriptor {
            descriptor,
            parent_background,
        })
}

/// `of <card>` after a part; the current card when absent.
fn owning_card(factor: Schema<Expression>) -> Schema<CardDescriptor> {
    tokens(&["of", "in"])
        .ignore_then(card_descriptor(factor))
        .optional()
        .map(Option::unwrap_or_default)
}

/// `[the] <ordinal> [layer] <type> [of card]` or
/// `[layer] <type> <identification> [of card]`.
pub fn part(factor: Schema<Expression>) -> Schema<PartDescriptor> {
    let by_ordinal_word = leading_ordinal()
        .then(layer().optional())
        .then(part_type())
        .map(|((ordinal, layer), part_type)| {
            (part_type, layer, ObjectIdentification::ByOrdinal(ordinal))
        });
    let by_identification = layer()
        .optional()
        .then(part_type())
        .then(identification(factor.clone()))
        .map(|((layer, part_type), identification)| (part_type, layer, identification));

    choice(vec![by_ordinal_word, by_identification])
        .then(owning_card(factor))
        .map(|((part_type, layer, identification), card)| PartDescriptor {
            part_type,
            layer: layer.unwrap_or_else(|| default_layer(part_type)),
            identification,
            card,
        })
}
