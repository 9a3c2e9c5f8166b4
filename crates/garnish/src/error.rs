//! Error types for the output toolkit.

use garnish_markup::MarkupError;

/// Errors raised by table rendering.
///
/// Row shapes are constrained by the [`TableRow`](crate::table::TableRow)
/// type itself, so the only runtime failure is bad markup in a cell.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Markup inside a cell failed to format.
    #[error(transparent)]
    Markup(#[from] MarkupError),
}

/// Errors raised by progress bars.
#[derive(Debug, thiserror::Error)]
pub enum ProgressError {
    /// The bar was advanced, redrawn, or finished before `start`.
    #[error("Progress bar has not been started")]
    NotStarted,

    /// A placeholder needs a known maximum, but none was set.
    #[error("Unable to display the \"{0}\" placeholder: the maximum step is unknown")]
    UnknownMax(&'static str),

    /// Markup in the format template failed to format.
    #[error(transparent)]
    Markup(#[from] MarkupError),
}

/// Errors raised by interactive prompts.
#[derive(Debug, thiserror::Error)]
pub enum QuestionError {
    /// The user closed the input stream (EOF).
    #[error("Prompt cancelled")]
    Cancelled,

    /// The session is not interactive and the question has no default.
    #[error("Session is not interactive and no default answer is available")]
    NotInteractive,

    /// Terminal I/O failed.
    #[error("Prompt I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The answer failed validation and the attempt limit ran out.
    #[error("{0}")]
    Validation(String),
}
