//! Helpers for tests: a shared grammar and builders for common trees.

use crate::ast::{
    BinaryOperator, CardDescriptor, Expression, Layer, ObjectIdentification, Ordinal,
    PartDescriptor, PartType,
};
use crate::textify::Rendered;
use crate::{Grammar, OutputOptions};

pub struct TestContext {
    pub grammar: Grammar,
    pub options: OutputOptions,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            grammar: Grammar::new(),
            options: OutputOptions::default(),
        }
    }

    pub fn with_options(mut self, options: OutputOptions) -> Self {
        self.options = options;
        self
    }

    /// Parse `text`, panicking with the parse error if it fails.
    pub fn parse(&self, text: &str) -> Expression {
        match self.grammar.try_parse(text) {
            Ok(expression) => expression,
            Err(e) => panic!("failed to parse {text:?}: {e}"),
        }
    }

    pub fn textify(&self, expression: &Expression) -> String {
        Rendered::new(expression, &self.options).to_string()
    }

    /// Parse `text`, write it back and check the result reads as the same
    /// tree. Returns the written text.
    pub fn roundtrip(&self, text: &str) -> String {
        let expression = self.parse(text);
        let written = self.textify(&expression);
        let reparsed = self.parse(&written);
        assert_eq!(
            expression, reparsed,
            "{text:?} was written as {written:?}, which reads differently"
        );
        written
    }
}

pub fn add(left: Expression, right: Expression) -> Expression {
    Expression::binary(BinaryOperator::Addition, left, right)
}

pub fn multiply(left: Expression, right: Expression) -> Expression {
    Expression::binary(BinaryOperator::Multiplication, left, right)
}

/// A part on the current card.
pub fn part(part_type: PartType, layer: Layer, identification: ObjectIdentification) -> Expression {
    Expression::part(PartDescriptor {
        part_type,
        layer,
        identification,
        card: CardDescriptor::current(),
    })
}

pub fn by_id(id: i64) -> ObjectIdentification {
    ObjectIdentification::ById(Box::new(Expression::integer(id)))
}

pub fn by_number(number: i64) -> ObjectIdentification {
    ObjectIdentification::ByOrdinal(Ordinal::number(Expression::integer(number)))
}

pub fn by_name(name: &str) -> ObjectIdentification {
    ObjectIdentification::ByName(Box::new(Expression::string(name)))
}
