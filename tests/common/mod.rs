//! Common test utilities for parsing and roundtrip testing

#![allow(dead_code)]

use std::sync::OnceLock;

use hypertalk_parser::fixtures::TestContext;
use hypertalk_parser::{Expression, Grammar, OutputOptions};

/// One grammar for the whole test binary.
pub fn grammar() -> &'static Grammar {
    static GRAMMAR: OnceLock<Grammar> = OnceLock::new();
    GRAMMAR.get_or_init(Grammar::new)
}

pub fn parse(text: &str) -> Option<Expression> {
    grammar().parse(text)
}

/// Parse `input`, write it back, and check both the written text and that
/// it reads as the same tree.
pub fn roundtrip(input: &str, expected: &str) {
    roundtrip_with_options(input, expected, OutputOptions::default());
}

pub fn roundtrip_with_options(input: &str, expected: &str, options: OutputOptions) {
    let context = TestContext::new().with_options(options);
    let actual = context.roundtrip(input);
    assert_eq!(
        actual, expected,
        "Expected:\n---\n{expected}\n---\nActual:\n---\n{actual}\n---"
    );
}
