//! Terminal output styling: tables, progress bars, admonition blocks, and
//! interactive prompts, all rendered through the `garnish-markup` tag
//! language.
//!
//! The pieces compose around two seams:
//!
//! - [`Output`]: where rendered text goes. [`TermOutput`] writes to stdout
//!   with capability detection; [`MemoryOutput`] captures writes for tests.
//! - [`TerminalIo`](question::TerminalIo): where prompt answers come from.
//!
//! # Quick start
//!
//! ```rust
//! use garnish::{MemoryOutput, Styled};
//!
//! let mut ui = Styled::new(MemoryOutput::new().with_width(80));
//! ui.title("Deploy").unwrap();
//! ui.listing(&["build", "upload", "switch"]).unwrap();
//! ui.success(&["Deployed in 3s"]).unwrap();
//! ```

pub mod error;
pub mod output;
pub mod progress;
pub mod question;
pub mod styled;
pub mod table;
pub mod text;

pub use error::{ProgressError, QuestionError, TableError};
pub use output::{MemoryOutput, Output, TermOutput, Verbosity};
pub use progress::ProgressBar;
pub use question::{ChoiceQuestion, ConfirmationQuestion, MockTerminal, Question, RealTerminal};
pub use styled::Styled;
pub use table::{PadAlign, Table, TableCell, TableRow, TableStyle};

pub use garnish_markup::{escape, MarkupError, MarkupFormatter, StyleRegistry};
