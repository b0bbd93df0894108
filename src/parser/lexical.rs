//! Tokens: blanks, keywords, numbers, quoted strings and identifiers.
//!
//! Every token skips the blanks in front of it, so the schemas built on top
//! never deal with whitespace. Keywords compare without regard to case or
//! diacritics: `fàLSE` is the keyword `false`.

use pest::Parser as _;
use pest_derive::Parser;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::schema::{Schema, choice};
use crate::ast::Literal;

#[derive(Parser)]
#[grammar = "parser/lexical.pest"] // Path relative to src
struct LexicalParser;

/// Apply a lexical rule after the blanks at `offset`. Returns the matched
/// pair and the offset just past it.
fn scan(rule: Rule, input: &str, offset: usize) -> Option<(pest::iterators::Pair<'_, Rule>, usize)> {
    let start = skip_blanks(input, offset);
    let pair = LexicalParser::parse(rule, &input[start..]).ok()?.next()?;
    let end = start + pair.as_span().end();
    Some((pair, end))
}

/// The offset of the first non-blank character at or after `offset`.
pub fn skip_blanks(input: &str, offset: usize) -> usize {
    LexicalParser::parse(Rule::blanks, &input[offset..])
        .ok()
        .and_then(|mut pairs| pairs.next())
        .map_or(offset, |pair| offset + pair.as_span().end())
}

/// Letters, digits, `_` and combining marks make up words.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || is_combining_mark(c)
}

/// Lowercase `c` and strip its diacritics.
pub fn fold(c: char) -> char {
    let base = std::iter::once(c)
        .nfd()
        .find(|c| !is_combining_mark(*c))
        .unwrap_or(c);
    base.to_lowercase().next().unwrap_or(base)
}

/// Compare two words the way keywords compare.
pub fn fold_eq(a: &str, b: &str) -> bool {
    let a = a.chars().filter(|c| !is_combining_mark(*c)).map(fold);
    let b = b.chars().filter(|c| !is_combining_mark(*c)).map(fold);
    a.eq(b)
}

/// Letters fold; symbols compare exactly, so `≠` never matches `=`.
fn same_char(expected: char, found: char) -> bool {
    if expected.is_alphanumeric() {
        fold(found) == fold(expected)
    } else {
        found == expected
    }
}

/// Match `text` at `offset` (after blanks), returning the end offset. When
/// `text` ends with a word character, the match must end on a word boundary.
fn match_token(text: &str, input: &str, offset: usize) -> Option<usize> {
    let start = skip_blanks(input, offset);
    let rest = &input[start..];
    let mut chars = rest.char_indices().peekable();
    let mut end = 0;
    for expected in text.chars() {
        let (index, found) = chars.find(|(_, c)| !is_combining_mark(*c))?;
        if !same_char(expected, found) {
            return None;
        }
        end = index + found.len_utf8();
        // Decomposed accents belong to the letter just matched.
        while let Some(&(index, mark)) = chars.peek() {
            if !is_combining_mark(mark) {
                break;
            }
            end = index + mark.len_utf8();
            chars.next();
        }
    }
    let needs_boundary = text.chars().last().is_some_and(is_word_char);
    if needs_boundary && rest[end..].chars().next().is_some_and(is_word_char) {
        return None;
    }
    Some(start + end)
}

/// A keyword or a symbol. Keywords ending in a word character only match a
/// whole word: `cd` does not match the start of `cdx`.
pub fn token(text: &'static str) -> Schema<()> {
    Schema::from_fn(move |input, offset| Some(((), match_token(text, input, offset)?)))
}

/// Any of several spellings of the same keyword, tried in order.
pub fn tokens(spellings: &'static [&'static str]) -> Schema<()> {
    choice(spellings.iter().map(|text| token(text)).collect())
}

/// Several keywords in a row, like `is not in`.
pub fn phrase(words: &'static [&'static str]) -> Schema<()> {
    words
        .iter()
        .fold(Schema::succeed(()), |schema, word| schema.then_ignore(token(word)))
}

/// Succeeds when only blanks remain.
pub fn end() -> Schema<()> {
    Schema::from_fn(|input, offset| {
        let end = skip_blanks(input, offset);
        (end == input.len()).then_some(((), end))
    })
}

/// Digits with an optional fractional part. A decimal point makes a real;
/// an integer too large for `i64` is read as a real too. Digits beyond the
/// range of `f64` are not a number.
pub fn number() -> Schema<Literal> {
    Schema::from_fn(|input, offset| {
        let (pair, end) = scan(Rule::number, input, offset)?;
        let text = pair.as_str();
        let real = || text.parse::<f64>().ok().filter(|value| value.is_finite());
        let literal = if text.contains('.') {
            Literal::Real(real()?)
        } else {
            match text.parse::<i64>() {
                Ok(value) => Literal::Integer(value),
                Err(_) => Literal::Real(real()?),
            }
        };
        Some((literal, end))
    })
}

/// The untouched text between two double quotes.
pub fn quoted_string() -> Schema<String> {
    Schema::from_fn(|input, offset| {
        let (pair, end) = scan(Rule::quoted_string, input, offset)?;
        let content = pair.into_inner().next()?;
        Some((content.as_str().to_string(), end))
    })
}

/// A name as written in the source, reserved words included.
pub fn identifier() -> Schema<String> {
    Schema::from_fn(|input, offset| {
        let (pair, end) = scan(Rule::identifier, input, offset)?;
        Some((pair.as_str().to_string(), end))
    })
}
