//! Tag-based ANSI markup formatter for terminal styling.
//!
//! This crate parses `<tag>content</tag>` markup embedded in strings and
//! turns it into ANSI-decorated (or plain) terminal text. It is the
//! formatting foundation for the `garnish` output toolkit, but stands on
//! its own.
//!
//! # Markup language
//!
//! - `<name>...</name>` applies a registered style.
//! - `<fg=COLOR;bg=COLOR;options=OPT,OPT>...</>` applies an ad-hoc style.
//! - `</>` closes the most recently opened style.
//! - A literal `<` is written `\<` (see [`escape`]).
//!
//! Colors: black, red, green, yellow, blue, magenta, cyan, white, default.
//! Options: bold, underscore, blink, reverse, dim, conceal.
//!
//! # Example
//!
//! ```rust
//! use garnish_markup::{MarkupFormatter, StyleRegistry};
//!
//! let mut formatter = MarkupFormatter::new(true, StyleRegistry::new());
//!
//! let styled = formatter.format("<error>failed</error>").unwrap();
//! assert_eq!(styled, "\x1b[37;41mfailed\x1b[39;49m");
//!
//! // Visible width ignores markup and escape codes.
//! assert_eq!(formatter.length_without_decoration("<error>failed</error>").unwrap(), 6);
//! ```

mod error;
mod formatter;
mod registry;
mod stack;
mod style;

pub use error::MarkupError;
pub use formatter::{escape, escape_trailing_backslash, MarkupFormatter};
pub use registry::StyleRegistry;
pub use stack::StyleStack;
pub use style::{Color, Style, TextOption};
