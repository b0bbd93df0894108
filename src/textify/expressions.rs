use std::fmt;

use super::foundation::{CallStyle, OutputOptions, Rendered, Textify, write_separated};
use crate::ast::{
    BinaryOperator, BuiltinFunction, Chunk, ChunkElement, ChunkExpression, ChunkKind, ChunkNumber,
    Exactness, Expression, FunctionCall, Literal, Operator, PropertyDescriptor, PropertyName,
    UnaryOperator,
};

/// Write an expression where only a unary-level expression may appear, such
/// as after `of`. Binary operations get parentheses.
pub(crate) fn write_factor<W: fmt::Write>(
    expression: &Expression,
    options: &OutputOptions,
    w: &mut W,
) -> fmt::Result {
    if expression.is_binary() {
        w.write_char('(')?;
        expression.textify(options, w)?;
        w.write_char(')')
    } else {
        expression.textify(options, w)
    }
}

impl Textify for Expression {
    fn textify<W: fmt::Write>(&self, options: &OutputOptions, w: &mut W) -> fmt::Result {
        match self {
            Expression::Literal(literal) => literal.textify(options, w),
            Expression::Operator(operator) => operator.textify(options, w),
            Expression::ContainerContent(container) => container.textify(options, w),
            Expression::FunctionCall(call) => call.textify(options, w),
            Expression::Property(property) => property.textify(options, w),
            Expression::Chunk(chunk) => chunk.textify(options, w),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Rendered::new(self, &OutputOptions::default()), f)
    }
}

impl Textify for Literal {
    fn textify<W: fmt::Write>(&self, _options: &OutputOptions, w: &mut W) -> fmt::Result {
        match self {
            Literal::Boolean(value) => write!(w, "{value}"),
            Literal::Integer(value) => write!(w, "{value}"),
            Literal::Real(value) => {
                let text = value.to_string();
                if text.contains('.') {
                    w.write_str(&text)
                } else {
                    write!(w, "{text}.0")
                }
            }
            Literal::QuotedString(value) => write!(w, "\"{value}\""),
        }
    }
}

impl BinaryOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Addition => "+",
            BinaryOperator::Subtraction => "-",
            BinaryOperator::Multiplication => "*",
            BinaryOperator::Division => "/",
            BinaryOperator::IntegerDivision => "div",
            BinaryOperator::Modulo => "mod",
            BinaryOperator::Concatenation => "&",
            BinaryOperator::ConcatenationWithSpace => "&&",
            BinaryOperator::Equal => "=",
            BinaryOperator::NotEqual => "<>",
            BinaryOperator::LessThan => "<",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::LessOrEqual => "<=",
            BinaryOperator::GreaterOrEqual => ">=",
            BinaryOperator::Contains => "contains",
            BinaryOperator::IsIn => "is in",
            BinaryOperator::IsNotIn => "is not in",
            BinaryOperator::And => "and",
            BinaryOperator::Or => "or",
        }
    }
}

impl Textify for Operator {
    fn textify<W: fmt::Write>(&self, options: &OutputOptions, w: &mut W) -> fmt::Result {
        match self {
            Operator::Binary {
                operator,
                left,
                right,
            } => {
                left.textify(options, w)?;
                write!(w, " {} ", operator.symbol())?;
                right.textify(options, w)
            }
            Operator::Unary {
                operator: UnaryOperator::Parentheses,
                operand,
            } => {
                w.write_char('(')?;
                operand.textify(options, w)?;
                w.write_char(')')
            }
            Operator::Unary {
                operator: UnaryOperator::Not,
                operand,
            } => {
                w.write_str("not ")?;
                write_factor(operand, options, w)
            }
            Operator::Unary {
                operator: UnaryOperator::Opposite,
                operand,
            } => {
                let text = Rendered::new(operand.as_ref(), options).to_string();
                // `- -2` rather than `--2`
                if text.starts_with('-') {
                    w.write_str("- ")?;
                } else {
                    w.write_char('-')?;
                }
                if operand.is_binary() {
                    write!(w, "({text})")
                } else {
                    w.write_str(&text)
                }
            }
        }
    }
}

impl Textify for Exactness {
    fn textify<W: fmt::Write>(&self, options: &OutputOptions, w: &mut W) -> fmt::Result {
        match self {
            Exactness::Abbreviated => w.write_str(options.keyword("abbreviated", "abbr")),
            Exactness::Short => w.write_str("short"),
            Exactness::Long => w.write_str("long"),
        }
    }
}

fn write_the_name<W: fmt::Write>(
    exactness: Option<Exactness>,
    name: &str,
    options: &OutputOptions,
    w: &mut W,
) -> fmt::Result {
    w.write_str("the ")?;
    if let Some(exactness) = exactness {
        exactness.textify(options, w)?;
        w.write_char(' ')?;
    }
    w.write_str(name)
}

fn write_builtin<W: fmt::Write>(
    function: BuiltinFunction,
    exactness: Option<Exactness>,
    argument: Option<&Expression>,
    options: &OutputOptions,
    w: &mut W,
) -> fmt::Result {
    let Some(argument) = argument else {
        return write_the_name(exactness, function.name(), options, w);
    };
    let parenthesized = argument.is_binary() || options.call_style == CallStyle::Parenthesized;
    if parenthesized && exactness.is_none() {
        write!(w, "{}(", function.name())?;
        argument.textify(options, w)?;
        w.write_char(')')
    } else {
        write_the_name(exactness, function.name(), options, w)?;
        w.write_str(" of ")?;
        write_factor(argument, options, w)
    }
}

impl Textify for FunctionCall {
    fn textify<W: fmt::Write>(&self, options: &OutputOptions, w: &mut W) -> fmt::Result {
        match self {
            FunctionCall::Builtin {
                function,
                exactness,
                argument,
            } => write_builtin(*function, *exactness, argument.as_deref(), options, w),
            FunctionCall::Custom {
                identifier,
                arguments,
            } => {
                write!(w, "{identifier}(")?;
                if let Some(arguments) = arguments {
                    write_separated(options, w, arguments, ", ")?;
                }
                w.write_char(')')
            }
        }
    }
}

impl Textify for PropertyName {
    fn textify<W: fmt::Write>(&self, _options: &OutputOptions, w: &mut W) -> fmt::Result {
        w.write_str(self.name())
    }
}

impl Textify for PropertyDescriptor {
    fn textify<W: fmt::Write>(&self, options: &OutputOptions, w: &mut W) -> fmt::Result {
        write_the_name(self.exactness, self.property.name(), options, w)?;
        w.write_str(" of ")?;
        self.object.textify(options, w)
    }
}

impl Textify for ChunkKind {
    fn textify<W: fmt::Write>(&self, options: &OutputOptions, w: &mut W) -> fmt::Result {
        w.write_str(match self {
            ChunkKind::Character => options.keyword("character", "char"),
            ChunkKind::Word => "word",
            ChunkKind::Line => "line",
            ChunkKind::Item => "item",
        })
    }
}

impl Textify for ChunkElement {
    fn textify<W: fmt::Write>(&self, options: &OutputOptions, w: &mut W) -> fmt::Result {
        match &self.number {
            ChunkNumber::Single(ordinal) => match ordinal.word() {
                Some(word) => {
                    write!(w, "{word} ")?;
                    self.kind.textify(options, w)
                }
                None => {
                    self.kind.textify(options, w)?;
                    w.write_char(' ')?;
                    ordinal.textify(options, w)
                }
            },
            ChunkNumber::Range(start, end) => {
                self.kind.textify(options, w)?;
                w.write_char(' ')?;
                start.textify(options, w)?;
                w.write_str(" to ")?;
                end.textify(options, w)
            }
        }
    }
}

impl Textify for Chunk {
    fn textify<W: fmt::Write>(&self, options: &OutputOptions, w: &mut W) -> fmt::Result {
        write_separated(options, w, &self.elements, " of ")
    }
}

impl Textify for ChunkExpression {
    fn textify<W: fmt::Write>(&self, options: &OutputOptions, w: &mut W) -> fmt::Result {
        self.chunk.textify(options, w)?;
        w.write_str(" of ")?;
        write_factor(&self.target, options, w)
    }
}
