//! Where expression text comes from.
//!
//! Scripts and field contents are decoded by the stack-file layer before
//! they reach the parser; any type that can hand over that text implements
//! [`TextSource`].

use std::borrow::Cow;

pub trait TextSource {
    fn read_text(&self) -> Cow<'_, str>;
}

impl TextSource for str {
    fn read_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl TextSource for String {
    fn read_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl TextSource for Cow<'_, str> {
    fn read_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}
