//! Property reads: `the name of card field 1`, `the long id of this card`.

use super::containers::{background_descriptor, card_descriptor, part};
use super::functions::exactness;
use super::lexical::{fold_eq, identifier, token};
use super::schema::{Schema, choice};
use crate::ast::{Expression, ObjectDescriptor, PropertyDescriptor, PropertyName};

const ALIASES: &[(&str, PropertyName)] = &[
    ("rect", PropertyName::Rectangle),
    ("loc", PropertyName::Location),
    ("highlight", PropertyName::Hilite),
    ("autoHighlight", PropertyName::AutoHilite),
];

impl PropertyName {
    pub fn lookup(name: &str) -> Option<PropertyName> {
        PropertyName::ALL
            .iter()
            .map(|property| (property.name(), *property))
            .chain(ALIASES.iter().copied())
            .find(|(spelling, _)| fold_eq(spelling, name))
            .map(|(_, property)| property)
    }

    pub fn accepts_exactness(self) -> bool {
        matches!(self, PropertyName::Name | PropertyName::Id)
    }
}

/// A part, then a card, then a background.
pub fn object(factor: Schema<Expression>) -> Schema<ObjectDescriptor> {
    choice(vec![
        part(factor.clone()).map(ObjectDescriptor::Part),
        card_descriptor(factor.clone()).map(ObjectDescriptor::Card),
        background_descriptor(factor).map(ObjectDescriptor::Background),
    ])
}

/// `[the] [abbr|short|long] <property> of <object>`
pub fn property(factor: Schema<Expression>) -> Schema<PropertyDescriptor> {
    token("the")
        .optional()
        .ignore_then(exactness().optional())
        .then(identifier().filter_map(|name| PropertyName::lookup(&name)))
        .then_ignore(token("of"))
        .then(object(factor))
        .filter_map(|((exactness, property), object)| {
            if exactness.is_some() && !property.accepts_exactness() {
                return None;
            }
            Some(PropertyDescriptor {
                property,
                exactness,
                object,
            })
        })
}
