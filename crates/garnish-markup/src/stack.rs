//! Nested style scopes.
//!
//! The stack tracks styles opened during markup parsing, outermost first.
//! Closing a tag by name matches on rendered escape output rather than
//! identity, so `<fg=red>` can be closed by `</fg=red>` or by any
//! registered style that renders identically.

use crate::error::MarkupError;
use crate::style::Style;

/// An ordered sequence of active styles.
///
/// The stack persists across format calls; it is only cleared by an
/// explicit [`reset`](StyleStack::reset).
#[derive(Debug, Clone, Default)]
pub struct StyleStack {
    styles: Vec<Style>,
    empty: Style,
}

impl StyleStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every open style.
    pub fn reset(&mut self) {
        self.styles.clear();
    }

    /// Open a new innermost scope.
    pub fn push(&mut self, style: Style) {
        self.styles.push(style);
    }

    /// Close the innermost scope. Popping an empty stack yields the empty
    /// style.
    pub fn pop(&mut self) -> Style {
        self.styles.pop().unwrap_or_else(|| self.empty.clone())
    }

    /// Close the topmost scope whose rendered output equals `style`'s,
    /// discarding anything opened above it.
    pub fn pop_matching(&mut self, style: &Style) -> Result<Style, MarkupError> {
        if self.styles.is_empty() {
            return Ok(self.empty.clone());
        }

        let wanted = style.rendered();
        for index in (0..self.styles.len()).rev() {
            if self.styles[index].rendered() == wanted {
                let popped = self.styles[index].clone();
                self.styles.truncate(index);
                return Ok(popped);
            }
        }

        Err(MarkupError::UnbalancedTag(wanted))
    }

    /// The innermost open style, or the empty style when none is open.
    pub fn current(&self) -> &Style {
        self.styles.last().unwrap_or(&self.empty)
    }

    /// Number of open scopes.
    pub fn depth(&self) -> usize {
        self.styles.len()
    }
}
