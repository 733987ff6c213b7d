//! Layout parsing module.

mod flatten;
mod layout_parser;
mod options;

pub use flatten::{flatten, FlatLine};
pub use layout_parser::LayoutParser;
pub use options::{PageSelection, ParseOptions};
