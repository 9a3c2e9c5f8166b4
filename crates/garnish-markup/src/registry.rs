//! Named style registry.
//!
//! The registry owns the set of named styles a formatter knows about. It is
//! an explicit value passed to (or owned by) each formatter instance, so
//! formatters stay independently testable; there is no process-wide table.

use std::collections::HashMap;

use crate::error::MarkupError;
use crate::style::{Color, Style};

/// Maps style names to [`Style`] values and resolves inline specs.
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    styles: HashMap<String, Style>,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        let mut registry = StyleRegistry {
            styles: HashMap::new(),
        };
        registry.register("error", Style::new().fg(Color::White).bg(Color::Red));
        registry.register("info", Style::new().fg(Color::Green));
        registry.register("comment", Style::new().fg(Color::Yellow));
        registry.register("question", Style::new().fg(Color::Black).bg(Color::Cyan));
        registry
    }
}

impl StyleRegistry {
    /// A registry pre-loaded with the stock `error`, `info`, `comment`, and
    /// `question` styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with no entries at all.
    pub fn empty() -> Self {
        StyleRegistry {
            styles: HashMap::new(),
        }
    }

    /// Register or override a named style. Names are stored lowercased.
    pub fn register(&mut self, name: impl Into<String>, style: Style) {
        self.styles.insert(name.into().to_lowercase(), style);
    }

    /// Whether a style with this name exists.
    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(&name.to_lowercase())
    }

    /// Look up a registered style by name.
    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(&name.to_lowercase())
    }

    /// Fetch a registered style, failing hard if it was never registered.
    pub fn style(&self, name: &str) -> Result<&Style, MarkupError> {
        self.get(name)
            .ok_or_else(|| MarkupError::UnknownStyle(name.to_string()))
    }

    /// Resolve a tag body to a style: registered name first, inline spec
    /// second.
    ///
    /// Errors from this method mean "not a style"; the formatter then emits
    /// the tag text literally rather than aborting.
    pub fn resolve(&self, name_or_spec: &str) -> Result<Style, MarkupError> {
        if let Some(style) = self.get(name_or_spec) {
            return Ok(style.clone());
        }
        Style::parse_spec(name_or_spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::TextOption;

    #[test]
    fn default_styles_present() {
        let registry = StyleRegistry::new();
        for name in ["error", "info", "comment", "question"] {
            assert!(registry.has(name), "{} should be pre-registered", name);
        }
    }

    #[test]
    fn error_style_is_white_on_red() {
        let registry = StyleRegistry::new();
        let expected = Style::new().fg(Color::White).bg(Color::Red);
        assert_eq!(registry.get("error").unwrap().rendered(), expected.rendered());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = StyleRegistry::new();
        assert!(registry.has("ERROR"));
        assert!(registry.get("Info").is_some());
    }

    #[test]
    fn register_overrides_existing() {
        let mut registry = StyleRegistry::new();
        registry.register("info", Style::new().fg(Color::Blue));
        assert_eq!(
            registry.get("info").unwrap().rendered(),
            Style::new().fg(Color::Blue).rendered()
        );
    }

    #[test]
    fn style_accessor_fails_for_unregistered_name() {
        let registry = StyleRegistry::new();
        assert!(matches!(
            registry.style("missing"),
            Err(MarkupError::UnknownStyle(_))
        ));
    }

    #[test]
    fn resolve_prefers_registered_name() {
        let mut registry = StyleRegistry::new();
        registry.register("fire", Style::new().fg(Color::Red).option(TextOption::Bold));
        let style = registry.resolve("fire").unwrap();
        assert_eq!(
            style.rendered(),
            Style::new().fg(Color::Red).option(TextOption::Bold).rendered()
        );
    }

    #[test]
    fn resolve_falls_back_to_inline_spec() {
        let registry = StyleRegistry::new();
        let style = registry.resolve("fg=cyan;options=underscore").unwrap();
        assert_eq!(style.apply("x"), "\x1b[36;4mx\x1b[39;24m");
    }

    #[test]
    fn resolve_rejects_garbage() {
        let registry = StyleRegistry::new();
        assert!(registry.resolve("nonsense").is_err());
        assert!(registry.resolve("fg=nope").is_err());
    }
}
