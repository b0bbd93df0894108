//! Writing parsed expressions back as canonical text

mod common;

use common::{roundtrip, roundtrip_with_options};
use hypertalk_parser::{CallStyle, OutputOptions};
use rstest::rstest;

#[rstest]
#[case("2+2", "2 + 2")]
#[case("- 2 + 2", "-2 + 2")]
#[case("(2 + 2) * 2", "(2 + 2) * 2")]
#[case("not true or fàLSE", "not true or false")]
#[case("a&&b", "a && b")]
#[case("x ≠ 1", "x <> 1")]
#[case("x is not in \"abc\"", "x is not in \"abc\"")]
#[case("00123", "123")]
#[case("123.2500", "123.25")]
#[case("2.0", "2.0")]
#[case("- -2", "- -2")]
#[case("not (a and b)", "not (a and b)")]
fn test_operators_and_literals(#[case] input: &str, #[case] expected: &str) {
    roundtrip(input, expected);
}

#[rstest]
#[case("exp(2)", "the exp of 2")]
#[case("exp of 2", "the exp of 2")]
#[case("exp(1 + 2)", "exp(1 + 2)")]
#[case("the long target", "the long target")]
#[case("target()", "the target")]
#[case("the secs", "the seconds")]
#[case("coucou()", "coucou()")]
#[case("coucou(2.0,3.0)", "coucou(2.0, 3.0)")]
#[case("the abs of -x", "the abs of -x")]
fn test_functions(#[case] input: &str, #[case] expected: &str) {
    roundtrip(input, expected);
}

#[rstest]
#[case("msg", "the message box")]
#[case("selection", "the selection")]
#[case("cd fld id 3", "card field id 3")]
#[case("field 2", "background field 2")]
#[case("button \"OK\"", "card button \"OK\"")]
#[case("the first card button", "first card button")]
#[case("field 1 of next cd", "background field 1 of next card")]
#[case(
    "field x in card \"Index\" of bg 2",
    "background field x of card \"Index\" of background 2"
)]
#[case("btn id 4 of the last card", "card button id 4 of last card")]
fn test_containers(#[case] input: &str, #[case] expected: &str) {
    roundtrip(input, expected);
}

#[rstest]
#[case("char 2 of \"aaa\"", "character 2 of \"aaa\"")]
#[case("the last word of line 2 of x", "last word of line 2 of x")]
#[case("item 1 to 3 of field 1", "item 1 to 3 of background field 1")]
#[case("char 1 of x & y", "character 1 of x & y")]
#[case("the rect of btn 1", "the rectangle of card button 1")]
#[case("the long name of this card", "the long name of this card")]
#[case("the script of bg 1", "the script of background 1")]
fn test_chunks_and_properties(#[case] input: &str, #[case] expected: &str) {
    roundtrip(input, expected);
}

#[test]
fn test_abbreviated_output() {
    let options = OutputOptions::abbreviated();
    roundtrip_with_options(
        "the message box & character 1 of card field 2",
        "msg box & char 1 of cd fld 2",
        options.clone(),
    );
    roundtrip_with_options("the sqrt of 2", "sqrt(2)", options.clone());
    roundtrip_with_options(
        "background button 1 of previous card",
        "bg btn 1 of prev cd",
        options,
    );
}

#[test]
fn test_call_style() {
    let options = OutputOptions {
        call_style: CallStyle::Parenthesized,
        ..OutputOptions::default()
    };
    roundtrip_with_options("the exp of 2 + 1", "exp(2) + 1", options.clone());
    roundtrip_with_options("the date", "the date", options);
}
