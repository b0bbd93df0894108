//! Write expression trees back as HyperTalk text.

pub mod expressions;
pub mod foundation;
pub mod references;

pub use foundation::{CallStyle, OutputOptions, Rendered, Textify};
