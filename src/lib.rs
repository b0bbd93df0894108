//! A parser for HyperTalk expressions, the scripting language of HyperCard.
//!
//! Text such as `the long name of card field 1 & "!"` is parsed into an
//! [`Expression`] tree, and trees can be written back as canonical text.

pub mod ast;
pub mod fixtures;
pub mod parser;
pub mod source;
pub mod textify;

#[cfg(feature = "cli")]
pub mod cli;

// Re-export commonly used types for easier access
pub use ast::Expression;
pub use parser::{Grammar, ParseError};
pub use source::TextSource;
pub use textify::{CallStyle, OutputOptions, Textify};

use textify::Rendered;

/// Parse a HyperTalk expression.
///
/// This builds a fresh [`Grammar`] on each call. To parse many expressions,
/// build one grammar and reuse it.
///
/// # Example
/// ```rust
/// use hypertalk_parser::ast::{BinaryOperator, Expression};
/// use hypertalk_parser::parse;
///
/// let expression = parse("1 + 2").unwrap();
/// assert_eq!(
///     expression,
///     Expression::binary(
///         BinaryOperator::Addition,
///         Expression::integer(1),
///         Expression::integer(2),
///     )
/// );
///
/// // Anything left over makes the whole parse fail.
/// assert!(parse("1 + 2 )").is_none());
/// ```
pub fn parse(text: &str) -> Option<Expression> {
    Grammar::new().parse(text)
}

/// Write an expression as canonical HyperTalk text.
///
/// # Example
/// ```rust
/// use hypertalk_parser::{format, parse};
///
/// let expression = parse("cd fld id 3 of next cd").unwrap();
/// assert_eq!(format(&expression), "card field id 3 of next card");
/// ```
pub fn format(expression: &Expression) -> String {
    format_with_options(expression, &OutputOptions::default())
}

/// Write an expression with custom options.
///
/// # Example
/// ```rust
/// use hypertalk_parser::{OutputOptions, format_with_options, parse};
///
/// let expression = parse("the message box & the sqrt of 2").unwrap();
/// let text = format_with_options(&expression, &OutputOptions::abbreviated());
/// assert_eq!(text, "msg box & sqrt(2)");
/// ```
pub fn format_with_options(expression: &Expression, options: &OutputOptions) -> String {
    Rendered::new(expression, options).to_string()
}
