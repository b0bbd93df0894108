//! The expression tree produced by the parser.
//!
//! Every node owns its children, so a tree is a plain value: it can be
//! cloned, compared structurally and dropped without any bookkeeping.
//! Equality ignores how the source was spelled: `cd fld id 3` and
//! `card field id 3` produce equal trees.

#[cfg(feature = "serde")]
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Expression {
    Literal(Literal),
    Operator(Operator),
    ContainerContent(ContainerDescriptor),
    FunctionCall(FunctionCall),
    Property(PropertyDescriptor),
    Chunk(ChunkExpression),
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Literal {
    Boolean(bool),
    Integer(i64),
    Real(f64),
    /// The raw text between the quotes. No escape sequences exist.
    QuotedString(String),
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Operator {
    Binary {
        operator: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Unary {
        operator: UnaryOperator,
        operand: Box<Expression>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum BinaryOperator {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    IntegerDivision,
    Modulo,
    Concatenation,
    ConcatenationWithSpace,
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    LessOrEqual,
    GreaterOrEqual,
    Contains,
    IsIn,
    IsNotIn,
    And,
    Or,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum UnaryOperator {
    Not,
    Opposite,
    /// Grouping is kept in the tree even though it does not change the value.
    Parentheses,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ContainerDescriptor {
    Variable(String),
    ButtonOrField(PartDescriptor),
    MessageBox,
    Selection,
    ChunkOf(ChunkContainer),
}

/// A chunk of a container, as the target of commands like `put`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ChunkContainer {
    pub container: Box<ContainerDescriptor>,
    pub chunk: Chunk,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PartDescriptor {
    pub part_type: PartType,
    pub layer: Layer,
    pub identification: ObjectIdentification,
    pub card: CardDescriptor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum PartType {
    Field,
    Button,
    /// `part`, matching either a field or a button.
    Part,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Layer {
    Card,
    Background,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ObjectIdentification {
    ById(Box<Expression>),
    ByOrdinal(Ordinal),
    ByName(Box<Expression>),
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Ordinal {
    /// A position given by an expression, e.g. `3` or a variable.
    Number(Box<Expression>),
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
    Ninth,
    Tenth,
    Middle,
    Last,
    Any,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CardDescriptor {
    pub descriptor: LayerDescriptor,
    pub parent_background: Option<BackgroundDescriptor>,
}

impl CardDescriptor {
    /// The card the script is running on.
    pub fn current() -> Self {
        Self {
            descriptor: LayerDescriptor::Relative(RelativeOrdinal::Current),
            parent_background: None,
        }
    }
}

impl Default for CardDescriptor {
    fn default() -> Self {
        Self::current()
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BackgroundDescriptor {
    pub descriptor: LayerDescriptor,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum LayerDescriptor {
    Relative(RelativeOrdinal),
    Identified(ObjectIdentification),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum RelativeOrdinal {
    Current,
    Next,
    Previous,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum FunctionCall {
    Builtin {
        function: BuiltinFunction,
        exactness: Option<Exactness>,
        argument: Option<Box<Expression>>,
    },
    Custom {
        identifier: String,
        arguments: Option<Vec<Expression>>,
    },
}

/// The `abbr`, `short` and `long` qualifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Exactness {
    Abbreviated,
    Short,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum BuiltinFunction {
    Date,
    Time,
    Target,
    Version,
    Seconds,
    Ticks,
    Mouse,
    MouseClick,
    MouseH,
    MouseV,
    MouseLoc,
    ClickH,
    ClickV,
    ClickLoc,
    CommandKey,
    OptionKey,
    ShiftKey,
    CommandResult,
    SelectedText,
    SelectedLine,
    SelectedField,
    SelectedChunk,
    FoundText,
    FoundLine,
    FoundField,
    FoundChunk,
    ScreenRect,
    Sound,
    Tool,
    Menus,
    Windows,
    Stacks,
    ParamCount,
    Params,
    DiskSpace,
    HeapSpace,
    StackSpace,
    SystemVersion,
    Abs,
    Atan,
    CharToNum,
    NumToChar,
    Cos,
    Sin,
    Tan,
    Exp,
    Exp1,
    Exp2,
    Ln,
    Ln1,
    Log2,
    Round,
    Sqrt,
    Trunc,
    Random,
    Length,
    Value,
    Param,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PropertyDescriptor {
    pub property: PropertyName,
    pub exactness: Option<Exactness>,
    pub object: ObjectDescriptor,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ObjectDescriptor {
    Part(PartDescriptor),
    Card(CardDescriptor),
    Background(BackgroundDescriptor),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum PropertyName {
    Name,
    Id,
    Number,
    Script,
    Visible,
    Rectangle,
    Location,
    Left,
    Top,
    Right,
    Bottom,
    Width,
    Height,
    Style,
    TextFont,
    TextSize,
    TextStyle,
    TextAlign,
    TextHeight,
    Hilite,
    AutoHilite,
    ShowName,
    LockText,
    DontWrap,
    WideMargins,
    ShowLines,
    Icon,
    Enabled,
    SharedText,
    SharedHilite,
    Scroll,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ChunkExpression {
    pub target: Box<Expression>,
    pub chunk: Chunk,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Chunk {
    /// Outermost first, in source order: `char 2 of word 3` is
    /// `[char 2, word 3]`.
    pub elements: Vec<ChunkElement>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ChunkElement {
    pub kind: ChunkKind,
    pub number: ChunkNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ChunkKind {
    Character,
    Word,
    Line,
    Item,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ChunkNumber {
    Single(Ordinal),
    Range(Ordinal, Ordinal),
}

// Shorthands for building trees by hand.
impl Expression {
    pub fn boolean(value: bool) -> Self {
        Expression::Literal(Literal::Boolean(value))
    }

    pub fn integer(value: i64) -> Self {
        Expression::Literal(Literal::Integer(value))
    }

    pub fn real(value: f64) -> Self {
        Expression::Literal(Literal::Real(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expression::Literal(Literal::QuotedString(value.into()))
    }

    pub fn variable(identifier: impl Into<String>) -> Self {
        Expression::ContainerContent(ContainerDescriptor::Variable(identifier.into()))
    }

    pub fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Self {
        Expression::Operator(Operator::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn unary(operator: UnaryOperator, operand: Expression) -> Self {
        Expression::Operator(Operator::Unary {
            operator,
            operand: Box::new(operand),
        })
    }

    pub fn builtin(
        function: BuiltinFunction,
        exactness: Option<Exactness>,
        argument: Option<Expression>,
    ) -> Self {
        Expression::FunctionCall(FunctionCall::Builtin {
            function,
            exactness,
            argument: argument.map(Box::new),
        })
    }

    pub fn part(descriptor: PartDescriptor) -> Self {
        Expression::ContainerContent(ContainerDescriptor::ButtonOrField(descriptor))
    }

    /// True for operator nodes that bind looser than a unary expression.
    pub fn is_binary(&self) -> bool {
        matches!(self, Expression::Operator(Operator::Binary { .. }))
    }
}

impl Ordinal {
    pub fn number(expression: Expression) -> Self {
        Ordinal::Number(Box::new(expression))
    }
}

impl ChunkElement {
    pub fn single(kind: ChunkKind, ordinal: Ordinal) -> Self {
        Self {
            kind,
            number: ChunkNumber::Single(ordinal),
        }
    }
}

impl BuiltinFunction {
    pub const ALL: &'static [BuiltinFunction] = &[
        BuiltinFunction::Date,
        BuiltinFunction::Time,
        BuiltinFunction::Target,
        BuiltinFunction::Version,
        BuiltinFunction::Seconds,
        BuiltinFunction::Ticks,
        BuiltinFunction::Mouse,
        BuiltinFunction::MouseClick,
        BuiltinFunction::MouseH,
        BuiltinFunction::MouseV,
        BuiltinFunction::MouseLoc,
        BuiltinFunction::ClickH,
        BuiltinFunction::ClickV,
        BuiltinFunction::ClickLoc,
        BuiltinFunction::CommandKey,
        BuiltinFunction::OptionKey,
        BuiltinFunction::ShiftKey,
        BuiltinFunction::CommandResult,
        BuiltinFunction::SelectedText,
        BuiltinFunction::SelectedLine,
        BuiltinFunction::SelectedField,
        BuiltinFunction::SelectedChunk,
        BuiltinFunction::FoundText,
        BuiltinFunction::FoundLine,
        BuiltinFunction::FoundField,
        BuiltinFunction::FoundChunk,
        BuiltinFunction::ScreenRect,
        BuiltinFunction::Sound,
        BuiltinFunction::Tool,
        BuiltinFunction::Menus,
        BuiltinFunction::Windows,
        BuiltinFunction::Stacks,
        BuiltinFunction::ParamCount,
        BuiltinFunction::Params,
        BuiltinFunction::DiskSpace,
        BuiltinFunction::HeapSpace,
        BuiltinFunction::StackSpace,
        BuiltinFunction::SystemVersion,
        BuiltinFunction::Abs,
        BuiltinFunction::Atan,
        BuiltinFunction::CharToNum,
        BuiltinFunction::NumToChar,
        BuiltinFunction::Cos,
        BuiltinFunction::Sin,
        BuiltinFunction::Tan,
        BuiltinFunction::Exp,
        BuiltinFunction::Exp1,
        BuiltinFunction::Exp2,
        BuiltinFunction::Ln,
        BuiltinFunction::Ln1,
        BuiltinFunction::Log2,
        BuiltinFunction::Round,
        BuiltinFunction::Sqrt,
        BuiltinFunction::Trunc,
        BuiltinFunction::Random,
        BuiltinFunction::Length,
        BuiltinFunction::Value,
        BuiltinFunction::Param,
    ];

    /// The name as HyperTalk documentation spells it.
    pub fn name(self) -> &'static str {
        match self {
            BuiltinFunction::Date => "date",
            BuiltinFunction::Time => "time",
            BuiltinFunction::Target => "target",
            BuiltinFunction::Version => "version",
            BuiltinFunction::Seconds => "seconds",
            BuiltinFunction::Ticks => "ticks",
            BuiltinFunction::Mouse => "mouse",
            BuiltinFunction::MouseClick => "mouseClick",
            BuiltinFunction::MouseH => "mouseH",
            BuiltinFunction::MouseV => "mouseV",
            BuiltinFunction::MouseLoc => "mouseLoc",
            BuiltinFunction::ClickH => "clickH",
            BuiltinFunction::ClickV => "clickV",
            BuiltinFunction::ClickLoc => "clickLoc",
            BuiltinFunction::CommandKey => "commandKey",
            BuiltinFunction::OptionKey => "optionKey",
            BuiltinFunction::ShiftKey => "shiftKey",
            BuiltinFunction::CommandResult => "result",
            BuiltinFunction::SelectedText => "selectedText",
            BuiltinFunction::SelectedLine => "selectedLine",
            BuiltinFunction::SelectedField => "selectedField",
            BuiltinFunction::SelectedChunk => "selectedChunk",
            BuiltinFunction::FoundText => "foundText",
            BuiltinFunction::FoundLine => "foundLine",
            BuiltinFunction::FoundField => "foundField",
            BuiltinFunction::FoundChunk => "foundChunk",
            BuiltinFunction::ScreenRect => "screenRect",
            BuiltinFunction::Sound => "sound",
            BuiltinFunction::Tool => "tool",
            BuiltinFunction::Menus => "menus",
            BuiltinFunction::Windows => "windows",
            BuiltinFunction::Stacks => "stacks",
            BuiltinFunction::ParamCount => "paramCount",
            BuiltinFunction::Params => "params",
            BuiltinFunction::DiskSpace => "diskSpace",
            BuiltinFunction::HeapSpace => "heapSpace",
            BuiltinFunction::StackSpace => "stackSpace",
            BuiltinFunction::SystemVersion => "systemVersion",
            BuiltinFunction::Abs => "abs",
            BuiltinFunction::Atan => "atan",
            BuiltinFunction::CharToNum => "charToNum",
            BuiltinFunction::NumToChar => "numToChar",
            BuiltinFunction::Cos => "cos",
            BuiltinFunction::Sin => "sin",
            BuiltinFunction::Tan => "tan",
            BuiltinFunction::Exp => "exp",
            BuiltinFunction::Exp1 => "exp1",
            BuiltinFunction::Exp2 => "exp2",
            BuiltinFunction::Ln => "ln",
            BuiltinFunction::Ln1 => "ln1",
            BuiltinFunction::Log2 => "log2",
            BuiltinFunction::Round => "round",
            BuiltinFunction::Sqrt => "sqrt",
            BuiltinFunction::Trunc => "trunc",
            BuiltinFunction::Random => "random",
            BuiltinFunction::Length => "length",
            BuiltinFunction::Value => "value",
            BuiltinFunction::Param => "param",
        }
    }
}

impl PropertyName {
    pub const ALL: &'static [PropertyName] = &[
        PropertyName::Name,
        PropertyName::Id,
        PropertyName::Number,
        PropertyName::Script,
        PropertyName::Visible,
        PropertyName::Rectangle,
        PropertyName::Location,
        PropertyName::Left,
        PropertyName::Top,
        PropertyName::Right,
        PropertyName::Bottom,
        PropertyName::Width,
        PropertyName::Height,
        PropertyName::Style,
        PropertyName::TextFont,
        PropertyName::TextSize,
        PropertyName::TextStyle,
        PropertyName::TextAlign,
        PropertyName::TextHeight,
        PropertyName::Hilite,
        PropertyName::AutoHilite,
        PropertyName::ShowName,
        PropertyName::LockText,
        PropertyName::DontWrap,
        PropertyName::WideMargins,
        PropertyName::ShowLines,
        PropertyName::Icon,
        PropertyName::Enabled,
        PropertyName::SharedText,
        PropertyName::SharedHilite,
        PropertyName::Scroll,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PropertyName::Name => "name",
            PropertyName::Id => "id",
            PropertyName::Number => "number",
            PropertyName::Script => "script",
            PropertyName::Visible => "visible",
            PropertyName::Rectangle => "rectangle",
            PropertyName::Location => "location",
            PropertyName::Left => "left",
            PropertyName::Top => "top",
            PropertyName::Right => "right",
            PropertyName::Bottom => "bottom",
            PropertyName::Width => "width",
            PropertyName::Height => "height",
            PropertyName::Style => "style",
            PropertyName::TextFont => "textFont",
            PropertyName::TextSize => "textSize",
            PropertyName::TextStyle => "textStyle",
            PropertyName::TextAlign => "textAlign",
            PropertyName::TextHeight => "textHeight",
            PropertyName::Hilite => "hilite",
            PropertyName::AutoHilite => "autoHilite",
            PropertyName::ShowName => "showName",
            PropertyName::LockText => "lockText",
            PropertyName::DontWrap => "dontWrap",
            PropertyName::WideMargins => "wideMargins",
            PropertyName::ShowLines => "showLines",
            PropertyName::Icon => "icon",
            PropertyName::Enabled => "enabled",
            PropertyName::SharedText => "sharedText",
            PropertyName::SharedHilite => "sharedHilite",
            PropertyName::Scroll => "scroll",
        }
    }
}
