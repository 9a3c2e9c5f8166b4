//! Output sinks and verbosity.
//!
//! Rendering components write through the [`Output`] trait so they never
//! touch process streams directly. [`TermOutput`] is the stdout-backed
//! implementation with capability detection; [`MemoryOutput`] captures
//! writes for tests and for buffered lookback.

use std::io::Write;

use serde::{Deserialize, Serialize};

/// How chatty the output should be. Ordered: `Quiet < Normal < Verbose <
/// VeryVerbose < Debug`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    VeryVerbose,
    Debug,
}

impl Verbosity {
    /// Whether writes should be emitted at all.
    pub fn is_quiet(self) -> bool {
        self == Verbosity::Quiet
    }
}

/// A line-oriented writable sink.
pub trait Output {
    /// Write text without a trailing newline.
    fn write(&mut self, message: &str);

    /// Write text followed by a newline.
    fn write_line(&mut self, message: &str) {
        self.write(message);
        self.write("\n");
    }

    /// The verbosity level this sink was configured with.
    fn verbosity(&self) -> Verbosity;

    /// Whether the sink supports (and wants) ANSI decoration.
    fn is_decorated(&self) -> bool;

    /// Terminal column width, when known.
    fn width(&self) -> Option<usize>;
}

/// An in-memory sink.
///
/// Captures everything written so tests (and buffered lookback) can
/// inspect it. `fetch` drains the buffer.
#[derive(Debug, Clone, Default)]
pub struct MemoryOutput {
    buffer: String,
    decorated: bool,
    verbosity: Verbosity,
    width: Option<usize>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable decoration on this sink.
    pub fn decorated(mut self, decorated: bool) -> Self {
        self.decorated = decorated;
        self
    }

    /// Set the verbosity level. Named apart from [`Output::verbosity`] so
    /// the trait accessor stays callable on the concrete type.
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Pretend the terminal is `width` columns wide.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Everything written so far, draining the buffer.
    pub fn fetch(&mut self) -> String {
        std::mem::take(&mut self.buffer)
    }

    /// Peek at the buffer without draining it.
    pub fn contents(&self) -> &str {
        &self.buffer
    }
}

impl Output for MemoryOutput {
    fn write(&mut self, message: &str) {
        self.buffer.push_str(message);
    }

    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn is_decorated(&self) -> bool {
        self.decorated
    }

    fn width(&self) -> Option<usize> {
        self.width
    }
}

/// The stdout-backed sink.
///
/// Decoration defaults to what the `console` crate detects for the
/// attached terminal; width comes from `terminal_size`.
#[derive(Debug)]
pub struct TermOutput {
    decorated: bool,
    verbosity: Verbosity,
}

impl Default for TermOutput {
    fn default() -> Self {
        TermOutput {
            decorated: console::colors_enabled(),
            verbosity: Verbosity::Normal,
        }
    }
}

impl TermOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force decoration on or off, overriding detection.
    pub fn decorated(mut self, decorated: bool) -> Self {
        self.decorated = decorated;
        self
    }

    /// Set the verbosity level.
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }
}

impl Output for TermOutput {
    fn write(&mut self, message: &str) {
        let mut stdout = std::io::stdout().lock();
        // A styling sink has no channel to report stdout failure on.
        let _ = stdout.write_all(message.as_bytes());
        let _ = stdout.flush();
    }

    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn is_decorated(&self) -> bool {
        self.decorated
    }

    fn width(&self) -> Option<usize> {
        terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
    }
}
