//! Parsing HyperTalk expressions into trees

mod common;

use common::{grammar, parse};
use hypertalk_parser::ast::{
    BackgroundDescriptor, BinaryOperator, BuiltinFunction, CardDescriptor, Chunk, ChunkContainer,
    ChunkElement, ChunkExpression, ChunkKind, ChunkNumber, ContainerDescriptor, Exactness,
    Expression, FunctionCall, Layer, LayerDescriptor, ObjectDescriptor, ObjectIdentification,
    Ordinal, PartDescriptor, PartType, PropertyDescriptor, PropertyName, RelativeOrdinal,
    UnaryOperator,
};
use hypertalk_parser::fixtures::{add, by_id, by_name, by_number, multiply, part};
use rstest::rstest;
use std::time::{Duration, Instant};

fn int(value: i64) -> Expression {
    Expression::integer(value)
}

fn var(name: &str) -> Expression {
    Expression::variable(name)
}

fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Expression {
    Expression::binary(operator, left, right)
}

fn custom(identifier: &str, arguments: Option<Vec<Expression>>) -> Expression {
    Expression::FunctionCall(FunctionCall::Custom {
        identifier: identifier.to_string(),
        arguments,
    })
}

fn chunk_of(target: Expression, elements: Vec<ChunkElement>) -> Expression {
    Expression::Chunk(ChunkExpression {
        target: Box::new(target),
        chunk: Chunk { elements },
    })
}

fn position(n: i64) -> Ordinal {
    Ordinal::number(int(n))
}

#[test]
fn test_literals() {
    assert_eq!(parse("true"), Some(Expression::boolean(true)));
    assert_eq!(parse("false"), Some(Expression::boolean(false)));
    assert_eq!(parse("fàLSE"), Some(Expression::boolean(false)));
    assert_eq!(parse("\"true\""), Some(Expression::string("true")));
    assert_eq!(
        parse("\"several words\""),
        Some(Expression::string("several words"))
    );
    assert_eq!(parse("unquoted"), Some(var("unquoted")));
    assert_eq!(parse("123"), Some(int(123)));
    assert_eq!(parse("00123"), Some(int(123)));
    assert_eq!(parse("123.25"), Some(Expression::real(123.25)));
    assert_eq!(parse("123.2500"), Some(Expression::real(123.25)));
}

#[test]
fn test_integer_overflow_reads_as_real() {
    assert_eq!(
        parse("99999999999999999999"),
        Some(Expression::real(99999999999999999999.0))
    );
}

#[test]
fn test_operators() {
    assert_eq!(parse("2 + 2"), Some(add(int(2), int(2))));
    assert_eq!(
        parse("- 2 + 2"),
        Some(add(
            Expression::unary(UnaryOperator::Opposite, int(2)),
            int(2)
        ))
    );
    assert_eq!(parse("2 * 2 + 2"), Some(add(multiply(int(2), int(2)), int(2))));
    assert_eq!(parse("2 + 2 * 2"), Some(add(int(2), multiply(int(2), int(2)))));
    assert_eq!(
        parse("(2 + 2)"),
        Some(Expression::unary(
            UnaryOperator::Parentheses,
            add(int(2), int(2))
        ))
    );
    assert_eq!(
        parse("not true"),
        Some(Expression::unary(
            UnaryOperator::Not,
            Expression::boolean(true)
        ))
    );
    assert_eq!(
        parse("a&&b"),
        Some(binary(
            BinaryOperator::ConcatenationWithSpace,
            var("a"),
            var("b")
        ))
    );
}

#[rstest]
#[case("a * b", BinaryOperator::Multiplication)]
#[case("a / b", BinaryOperator::Division)]
#[case("a div b", BinaryOperator::IntegerDivision)]
#[case("a mod b", BinaryOperator::Modulo)]
#[case("a - b", BinaryOperator::Subtraction)]
#[case("a & b", BinaryOperator::Concatenation)]
#[case("a && b", BinaryOperator::ConcatenationWithSpace)]
#[case("a = b", BinaryOperator::Equal)]
#[case("a is b", BinaryOperator::Equal)]
#[case("a <> b", BinaryOperator::NotEqual)]
#[case("a ≠ b", BinaryOperator::NotEqual)]
#[case("a is not b", BinaryOperator::NotEqual)]
#[case("a < b", BinaryOperator::LessThan)]
#[case("a > b", BinaryOperator::GreaterThan)]
#[case("a <= b", BinaryOperator::LessOrEqual)]
#[case("a ≤ b", BinaryOperator::LessOrEqual)]
#[case("a >= b", BinaryOperator::GreaterOrEqual)]
#[case("a ≥ b", BinaryOperator::GreaterOrEqual)]
#[case("a contains b", BinaryOperator::Contains)]
#[case("a is in b", BinaryOperator::IsIn)]
#[case("a is not in b", BinaryOperator::IsNotIn)]
#[case("a and b", BinaryOperator::And)]
#[case("a or b", BinaryOperator::Or)]
#[case("a OR b", BinaryOperator::Or)]
fn test_operator_spellings(#[case] text: &str, #[case] operator: BinaryOperator) {
    assert_eq!(parse(text), Some(binary(operator, var("a"), var("b"))));
}

#[test]
fn test_precedence_and_associativity() {
    assert_eq!(
        parse("2 - 3 - 4"),
        Some(binary(
            BinaryOperator::Subtraction,
            binary(BinaryOperator::Subtraction, int(2), int(3)),
            int(4)
        ))
    );
    assert_eq!(
        parse("1 & 2 + 3"),
        Some(binary(BinaryOperator::Concatenation, int(1), add(int(2), int(3))))
    );
    assert_eq!(
        parse("a or b and c"),
        Some(binary(
            BinaryOperator::Or,
            var("a"),
            binary(BinaryOperator::And, var("b"), var("c"))
        ))
    );
    assert_eq!(
        parse("a = 1 and b < 2"),
        Some(binary(
            BinaryOperator::And,
            binary(BinaryOperator::Equal, var("a"), int(1)),
            binary(BinaryOperator::LessThan, var("b"), int(2))
        ))
    );
    // Unary operators take a single operand.
    assert_eq!(
        parse("not a = b"),
        Some(binary(
            BinaryOperator::Equal,
            Expression::unary(UnaryOperator::Not, var("a")),
            var("b")
        ))
    );
}

#[test]
fn test_functions() {
    let target = |exactness| Some(Expression::builtin(BuiltinFunction::Target, exactness, None));
    let exp_of_two = Some(Expression::builtin(BuiltinFunction::Exp, None, Some(int(2))));

    assert_eq!(parse("the target"), target(None));
    assert_ne!(parse("target"), target(None));
    assert_eq!(parse("the long target"), target(Some(Exactness::Long)));
    assert_eq!(parse("the abbr target"), target(Some(Exactness::Abbreviated)));
    assert_eq!(parse("the short target"), target(Some(Exactness::Short)));
    assert_eq!(parse("the exp of 2"), exp_of_two);
    assert_eq!(parse("exp of 2"), exp_of_two);
    assert_eq!(parse("exp(2)"), exp_of_two);
    assert_eq!(parse("coucou()"), Some(custom("coucou", None)));
    assert_eq!(
        parse("coucou(2.0)"),
        Some(custom("coucou", Some(vec![Expression::real(2.0)])))
    );
    assert_eq!(
        parse("coucou(2.0, 3.0)"),
        Some(custom(
            "coucou",
            Some(vec![Expression::real(2.0), Expression::real(3.0)])
        ))
    );
    assert_eq!(
        parse("coucou(2.0,3.0,4.0)"),
        Some(custom(
            "coucou",
            Some(vec![
                Expression::real(2.0),
                Expression::real(3.0),
                Expression::real(4.0)
            ])
        ))
    );
    assert_eq!(
        parse("coucou(2.0,3.0,4.0, \"coucou\")"),
        Some(custom(
            "coucou",
            Some(vec![
                Expression::real(2.0),
                Expression::real(3.0),
                Expression::real(4.0),
                Expression::string("coucou")
            ])
        ))
    );
    assert_eq!(parse("the coucou of 2.0"), None);
}

#[test]
fn test_function_arguments() {
    // `of` takes a unary expression; parentheses take a whole expression.
    assert_eq!(
        parse("the abs of -2 + 1"),
        Some(add(
            Expression::builtin(
                BuiltinFunction::Abs,
                None,
                Some(Expression::unary(UnaryOperator::Opposite, int(2)))
            ),
            int(1)
        ))
    );
    assert_eq!(
        parse("abs(-2 + 1)"),
        Some(Expression::builtin(
            BuiltinFunction::Abs,
            None,
            Some(add(Expression::unary(UnaryOperator::Opposite, int(2)), int(1)))
        ))
    );
    assert_eq!(
        parse("the length of the selection"),
        Some(Expression::builtin(
            BuiltinFunction::Length,
            None,
            Some(Expression::ContainerContent(ContainerDescriptor::Selection))
        ))
    );
    assert_eq!(
        parse("f(g(1), x)"),
        Some(custom(
            "f",
            Some(vec![custom("g", Some(vec![int(1)])), var("x")])
        ))
    );
}

#[rstest]
#[case("the secs", BuiltinFunction::Seconds)]
#[case("the seconds", BuiltinFunction::Seconds)]
#[case("the cmdKey", BuiltinFunction::CommandKey)]
#[case("the MOUSEH", BuiltinFunction::MouseH)]
#[case("the result", BuiltinFunction::CommandResult)]
#[case("ticks()", BuiltinFunction::Ticks)]
#[case("the paramCount", BuiltinFunction::ParamCount)]
fn test_builtin_spellings(#[case] text: &str, #[case] function: BuiltinFunction) {
    assert_eq!(parse(text), Some(Expression::builtin(function, None, None)));
}

#[rstest]
#[case("the long exp of 2")]
#[case("the short ticks")]
#[case("the exp")]
#[case("the target of 2")]
#[case("ticks of 2")]
fn test_builtin_misuse(#[case] text: &str) {
    assert_eq!(parse(text), None);
}

#[test]
fn test_containers() {
    let content = |container| Some(Expression::ContainerContent(container));
    assert_eq!(parse("the message box"), content(ContainerDescriptor::MessageBox));
    assert_eq!(parse("message box"), content(ContainerDescriptor::MessageBox));
    assert_eq!(parse("msg box"), content(ContainerDescriptor::MessageBox));
    assert_eq!(parse("msg"), content(ContainerDescriptor::MessageBox));
    assert_eq!(parse("the selection"), content(ContainerDescriptor::Selection));
    assert_eq!(parse("selection"), content(ContainerDescriptor::Selection));
    assert_eq!(parse("coucou"), Some(var("coucou")));
}

#[test]
fn test_parts() {
    use Layer::{Background, Card};
    use PartType::{Button, Field, Part};

    let cases = [
        ("card field id 3", part(Field, Card, by_id(3))),
        ("card field 3", part(Field, Card, by_number(3))),
        (
            "card field coucou",
            part(
                Field,
                Card,
                ObjectIdentification::ByOrdinal(Ordinal::number(var("coucou"))),
            ),
        ),
        (
            "card field id",
            part(
                Field,
                Card,
                ObjectIdentification::ByOrdinal(Ordinal::number(var("id"))),
            ),
        ),
        ("card field \"coucou\"", part(Field, Card, by_name("coucou"))),
        ("cd fld id 3", part(Field, Card, by_id(3))),
        ("field id 3", part(Field, Background, by_id(3))),
        ("background field id 3", part(Field, Background, by_id(3))),
        ("card button id 3", part(Button, Card, by_id(3))),
        ("button id 3", part(Button, Card, by_id(3))),
        ("card part id 3", part(Part, Card, by_id(3))),
        ("part id 3", part(Part, Card, by_id(3))),
        ("bg part id 3", part(Part, Background, by_id(3))),
        ("bkgnd btn 2", part(Button, Background, by_number(2))),
        (
            "the first card button",
            part(Button, Card, ObjectIdentification::ByOrdinal(Ordinal::First)),
        ),
        (
            "last fld",
            part(Field, Background, ObjectIdentification::ByOrdinal(Ordinal::Last)),
        ),
    ];
    for (text, expected) in cases {
        assert_eq!(parse(text), Some(expected), "{text}");
    }
}

#[test]
fn test_parts_on_other_cards() {
    let field_on = |card: CardDescriptor| {
        Some(Expression::part(PartDescriptor {
            part_type: PartType::Field,
            layer: Layer::Background,
            identification: by_number(1),
            card,
        }))
    };

    assert_eq!(
        parse("field 1 of next card"),
        field_on(CardDescriptor {
            descriptor: LayerDescriptor::Relative(RelativeOrdinal::Next),
            parent_background: None,
        })
    );
    assert_eq!(
        parse("field 1 of prev cd"),
        field_on(CardDescriptor {
            descriptor: LayerDescriptor::Relative(RelativeOrdinal::Previous),
            parent_background: None,
        })
    );
    assert_eq!(
        parse("field 1 in card \"Index\" of bg 2"),
        field_on(CardDescriptor {
            descriptor: LayerDescriptor::Identified(by_name("Index")),
            parent_background: Some(BackgroundDescriptor {
                descriptor: LayerDescriptor::Identified(by_number(2)),
            }),
        })
    );
    assert_eq!(parse("field 1 of this card"), parse("field 1"));
}

#[test]
fn test_chunks() {
    assert_eq!(
        parse("char 2 of \"aaa\""),
        Some(chunk_of(
            Expression::string("aaa"),
            vec![ChunkElement::single(ChunkKind::Character, position(2))]
        ))
    );
    assert_eq!(
        parse("item 1 to 3 of x"),
        Some(chunk_of(
            var("x"),
            vec![ChunkElement {
                kind: ChunkKind::Item,
                number: ChunkNumber::Range(position(1), position(3)),
            }]
        ))
    );
    assert_eq!(
        parse("the first word of line 2 of field 1"),
        Some(chunk_of(
            part(PartType::Field, Layer::Background, by_number(1)),
            vec![
                ChunkElement::single(ChunkKind::Word, Ordinal::First),
                ChunkElement::single(ChunkKind::Line, position(2)),
            ]
        ))
    );
    // The target is a unary expression, so the chunk is concatenated here.
    assert_eq!(
        parse("char 1 of x & y"),
        Some(binary(
            BinaryOperator::Concatenation,
            chunk_of(
                var("x"),
                vec![ChunkElement::single(ChunkKind::Character, position(1))]
            ),
            var("y")
        ))
    );
}

#[test]
fn test_properties() {
    assert_eq!(
        parse("the name of card field 1"),
        Some(Expression::Property(PropertyDescriptor {
            property: PropertyName::Name,
            exactness: None,
            object: ObjectDescriptor::Part(PartDescriptor {
                part_type: PartType::Field,
                layer: Layer::Card,
                identification: by_number(1),
                card: CardDescriptor::current(),
            }),
        }))
    );
    assert_eq!(
        parse("the long id of this card"),
        Some(Expression::Property(PropertyDescriptor {
            property: PropertyName::Id,
            exactness: Some(Exactness::Long),
            object: ObjectDescriptor::Card(CardDescriptor::current()),
        }))
    );
    assert_eq!(parse("the rect of btn 1"), parse("the rectangle of button 1"));
    assert_eq!(parse("the loc of btn 1"), parse("the location of button 1"));
    assert_eq!(parse("the long width of btn 1"), None);
}

#[test]
fn test_rejected_input() {
    for text in ["", "   ", "the", "2 +", "(2", "2 2", "2 + 2)", "not", "of x"] {
        assert_eq!(parse(text), None, "{text:?}");
    }
}

#[test]
fn test_blanks() {
    assert_eq!(parse("  2\t+ 2  "), Some(add(int(2), int(2))));
    assert_eq!(parse("2 + ¬\n2"), Some(add(int(2), int(2))));
    assert_eq!(parse("2 +\n2"), None);
}

#[test]
fn test_parse_container() {
    let grammar = grammar();
    assert_eq!(
        grammar.parse_container("x"),
        Some(ContainerDescriptor::Variable("x".to_string()))
    );
    assert_eq!(
        grammar.parse_container("msg"),
        Some(ContainerDescriptor::MessageBox)
    );
    assert_eq!(
        grammar.parse_container("line 1 of char 2 of x"),
        Some(ContainerDescriptor::ChunkOf(ChunkContainer {
            container: Box::new(ContainerDescriptor::Variable("x".to_string())),
            chunk: Chunk {
                elements: vec![
                    ChunkElement::single(ChunkKind::Line, position(1)),
                    ChunkElement::single(ChunkKind::Character, position(2)),
                ],
            },
        }))
    );
    assert!(matches!(
        grammar.parse_container("word 2 of card field 1"),
        Some(ContainerDescriptor::ChunkOf(ChunkContainer { container, .. }))
            if matches!(*container, ContainerDescriptor::ButtonOrField(_))
    ));
    assert_eq!(grammar.parse_container("2 + 2"), None);
    assert_eq!(grammar.parse_container("the"), None);
}

#[test]
fn test_grammar_shared_across_threads() {
    let inputs = [
        "2 + 2 * 2",
        "the long name of card field 1",
        "char 1 to 3 of the selection",
        "coucou(1, 2) & the target",
    ];
    let expected: Vec<_> = inputs.iter().map(|text| parse(text)).collect();
    assert!(expected.iter().all(Option::is_some));

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| inputs.map(|text| grammar().parse(text))))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().to_vec(), expected);
        }
    });
}

#[test]
fn test_nested_calls_parse_in_linear_time() {
    let depth = 30;
    let started = Instant::now();

    let text = format!("{}1{}", "exp(".repeat(depth), ", 1)".repeat(depth));
    let mut expected = int(1);
    for _ in 0..depth {
        expected = custom("exp", Some(vec![expected, int(1)]));
    }
    assert_eq!(parse(&text), Some(expected));

    let text = format!("{}1{}", "exp(".repeat(depth), ")".repeat(depth));
    assert!(matches!(
        parse(&text),
        Some(Expression::FunctionCall(FunctionCall::Builtin {
            function: BuiltinFunction::Exp,
            ..
        }))
    ));

    let unfinished = format!("{}1,", "exp(".repeat(depth));
    assert_eq!(parse(&unfinished), None);

    let elapsed = started.elapsed();
    assert!(elapsed < Duration::from_secs(2), "took {elapsed:?}");
}

#[test]
fn test_numbers_beyond_real_range() {
    assert_eq!(parse(&"9".repeat(400)), None);
    assert_eq!(parse(&"9".repeat(300)), Some(Expression::real(1e300)));
}
