use std::fmt;

/// How builtin functions with an argument are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CallStyle {
    /// `the exp of 2`
    #[default]
    Of,
    /// `exp(2)`
    Parenthesized,
}

/// OutputOptions holds the options for writing an expression tree back as
/// HyperTalk text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputOptions {
    /// Use the short keywords: `cd`, `bg`, `fld`, `btn`, `msg box`, `char`.
    pub abbreviate: bool,
    /// Write `the` in front of the message box and the selection.
    pub explicit_the: bool,
    /// How to write builtin calls that take an argument. An argument that
    /// is a binary operation is always parenthesized.
    pub call_style: CallStyle,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            abbreviate: false,
            explicit_the: true,
            call_style: CallStyle::Of,
        }
    }
}

impl OutputOptions {
    /// The terse style most scripts are written in.
    pub fn abbreviated() -> Self {
        Self {
            abbreviate: true,
            explicit_the: false,
            call_style: CallStyle::Parenthesized,
        }
    }

    /// Pick between the full and the abbreviated spelling of a keyword.
    pub(crate) fn keyword(&self, full: &'static str, short: &'static str) -> &'static str {
        if self.abbreviate { short } else { full }
    }
}

/// A value that can be written as HyperTalk source.
///
/// Writing a tree built by the parser gives text that parses back to an
/// equal tree.
pub trait Textify {
    fn textify<W: fmt::Write>(&self, options: &OutputOptions, w: &mut W) -> fmt::Result;
}

impl<T: Textify + ?Sized> Textify for &T {
    fn textify<W: fmt::Write>(&self, options: &OutputOptions, w: &mut W) -> fmt::Result {
        (**self).textify(options, w)
    }
}

impl<T: Textify> Textify for Box<T> {
    fn textify<W: fmt::Write>(&self, options: &OutputOptions, w: &mut W) -> fmt::Result {
        self.as_ref().textify(options, w)
    }
}

/// Writes `value` with `options` through [`fmt::Display`].
pub struct Rendered<'a, T: ?Sized> {
    value: &'a T,
    options: &'a OutputOptions,
}

impl<'a, T: Textify + ?Sized> Rendered<'a, T> {
    pub fn new(value: &'a T, options: &'a OutputOptions) -> Self {
        Self { value, options }
    }
}

impl<T: Textify + ?Sized> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.textify(self.options, f)
    }
}

/// Write `items` separated by `separator`.
pub(crate) fn write_separated<W, T>(
    options: &OutputOptions,
    w: &mut W,
    items: impl IntoIterator<Item = T>,
    separator: &str,
) -> fmt::Result
where
    W: fmt::Write,
    T: Textify,
{
    let mut first = true;
    for item in items {
        if !first {
            w.write_str(separator)?;
        }
        first = false;
        item.textify(options, w)?;
    }
    Ok(())
}
