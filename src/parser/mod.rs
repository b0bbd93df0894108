//! Parse HyperTalk expressions.
//!
//! [`schema`] is a small ordered-choice combinator engine; [`lexical`] holds
//! the token rules built on a pest grammar. The remaining modules build the
//! expression rules on top of both, and [`Grammar`] ties them together.

mod chunks;
mod containers;
mod functions;
mod grammar;
pub mod lexical;
mod literals;
mod operators;
mod properties;
pub mod schema;

pub use grammar::{Grammar, ParseError};
pub use literals::{RESERVED_WORDS, is_reserved};
