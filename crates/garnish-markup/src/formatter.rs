//! The markup formatting engine.
//!
//! Parses `<tag>...</tag>` markup embedded in text, drives the style stack,
//! and emits ANSI-decorated or plain output. Tags resolve through the
//! formatter's [`StyleRegistry`]: either a registered name (`<info>`) or an
//! inline spec (`<fg=green;options=bold>`). `</>` closes the innermost open
//! style, `</name>` closes by match.
//!
//! Parsing is independent of decoration: a decoration-disabled formatter
//! still consumes tags, it just skips the escape-code emission.
//!
//! # Example
//!
//! ```rust
//! use garnish_markup::{MarkupFormatter, StyleRegistry};
//!
//! let mut formatter = MarkupFormatter::new(true, StyleRegistry::new());
//! let out = formatter.format("<fg=green>OK</>").unwrap();
//! assert_eq!(out, "\x1b[32mOK\x1b[39m");
//!
//! formatter.set_decorated(false);
//! assert_eq!(formatter.format("<fg=green>OK</>").unwrap(), "OK");
//! ```

use crate::error::MarkupError;
use crate::registry::StyleRegistry;
use crate::stack::StyleStack;

/// A tag token found in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Tag<'a> {
    /// Byte offset of the opening `<`.
    start: usize,
    /// Byte offset just past the closing `>`.
    end: usize,
    /// Tag body, without delimiters or the leading `/`.
    body: &'a str,
    closing: bool,
}

/// Parses embedded markup and applies styles from a registry.
#[derive(Debug, Clone)]
pub struct MarkupFormatter {
    decorated: bool,
    registry: StyleRegistry,
    stack: StyleStack,
}

impl MarkupFormatter {
    /// Create a formatter. `decorated` controls whether escape codes are
    /// actually emitted.
    pub fn new(decorated: bool, registry: StyleRegistry) -> Self {
        MarkupFormatter {
            decorated,
            registry,
            stack: StyleStack::new(),
        }
    }

    /// Whether escape codes are emitted.
    pub fn is_decorated(&self) -> bool {
        self.decorated
    }

    /// Toggle escape-code emission. Parsing behavior is unaffected.
    pub fn set_decorated(&mut self, decorated: bool) {
        self.decorated = decorated;
    }

    /// The formatter's style registry.
    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Mutable access to the registry, for registering custom styles.
    pub fn registry_mut(&mut self) -> &mut StyleRegistry {
        &mut self.registry
    }

    /// Clear any styles left open by previous format calls.
    pub fn reset(&mut self) {
        self.stack.reset();
    }

    /// Format a message, resolving markup tags against the registry.
    ///
    /// Unresolvable tags are emitted as literal text; a closing tag that
    /// matches no open style is a hard [`MarkupError::UnbalancedTag`].
    pub fn format(&mut self, message: &str) -> Result<String, MarkupError> {
        let message = escape_trailing_backslash(message);
        let mut output = String::with_capacity(message.len());
        let mut offset = 0;
        let mut search_from = 0;

        while let Some(tag) = next_tag(&message, search_from) {
            // A backslash right before the tag makes it literal.
            if tag.start > 0 && message.as_bytes()[tag.start - 1] == b'\\' {
                search_from = tag.start + 1;
                continue;
            }

            self.append_styled(&mut output, &message[offset..tag.start]);
            offset = tag.end;
            search_from = tag.end;

            if tag.closing && tag.body.is_empty() {
                self.stack.pop();
                continue;
            }

            match self.registry.resolve(tag.body) {
                Err(_) => {
                    // Not a style: the whole tag is literal content.
                    self.append_styled(&mut output, &message[tag.start..tag.end]);
                }
                Ok(style) if !tag.closing => self.stack.push(style),
                Ok(style) => {
                    self.stack.pop_matching(&style)?;
                }
            }
        }

        self.append_styled(&mut output, &message[offset..]);
        Ok(restore_escapes(&output))
    }

    /// Visible character count of `message` once markup and any raw ANSI
    /// sequences are removed.
    ///
    /// The decorated flag is saved and restored around the computation.
    pub fn length_without_decoration(&mut self, message: &str) -> Result<usize, MarkupError> {
        Ok(self.remove_decoration(message)?.chars().count())
    }

    /// `message` with markup consumed and raw CSI sequences stripped.
    pub fn remove_decoration(&mut self, message: &str) -> Result<String, MarkupError> {
        let was_decorated = self.decorated;
        self.decorated = false;
        let result = self.format(message);
        self.decorated = was_decorated;
        let plain = result?;
        Ok(console::strip_ansi_codes(&plain).into_owned())
    }

    fn append_styled(&self, output: &mut String, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.decorated {
            output.push_str(&self.stack.current().apply(text));
        } else {
            output.push_str(text);
        }
    }
}

/// Escape markup-significant characters so text renders literally.
///
/// Each unescaped `<` gains a `\` prefix; trailing backslashes are swapped
/// for NUL sentinels so they survive a later parse (see
/// [`escape_trailing_backslash`]).
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut previous_backslash = false;
    for c in text.chars() {
        if c == '<' && !previous_backslash {
            escaped.push('\\');
        }
        previous_backslash = c == '\\';
        escaped.push(c);
    }
    escape_trailing_backslash(&escaped)
}

/// Replace trailing backslashes with NUL sentinels.
///
/// A trailing `\` would otherwise be misread as escaping whatever the
/// caller appends next; the formatter reverses the substitution after tag
/// parsing, so the round trip preserves the literal backslashes.
pub fn escape_trailing_backslash(text: &str) -> String {
    if !text.ends_with('\\') {
        return text.to_string();
    }
    let total = text.len();
    let trimmed: String = text.trim_end_matches('\\').replace('\0', "");
    let sentinels = total - trimmed.len();
    let mut result = trimmed;
    result.extend(std::iter::repeat('\0').take(sentinels));
    result
}

/// Undo sentinel and `\<` escapes in one pass.
fn restore_escapes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\0' => result.push('\\'),
            '\\' if chars.peek() == Some(&'<') => {
                chars.next();
                result.push('<');
            }
            other => result.push(other),
        }
    }
    result
}

/// Find the next well-formed tag token at or after `from`.
///
/// A tag is `<body>` or `</body>` where an open body starts with an ASCII
/// letter and a close body is empty or starts with an ASCII letter; bodies
/// never contain `<` or `>`. Anything else leaves the `<` as plain text.
fn next_tag(text: &str, from: usize) -> Option<Tag<'_>> {
    let mut search = from;
    while let Some(rel) = text[search..].find('<') {
        let start = search + rel;
        if let Some(tag) = parse_tag_at(text, start) {
            return Some(tag);
        }
        search = start + 1;
    }
    None
}

fn parse_tag_at(text: &str, start: usize) -> Option<Tag<'_>> {
    let bytes = text.as_bytes();
    let mut pos = start + 1;
    let closing = bytes.get(pos) == Some(&b'/');
    if closing {
        pos += 1;
    }

    let body_start = pos;
    loop {
        match bytes.get(pos) {
            Some(b'>') => break,
            Some(b'<') | None => return None,
            Some(_) => pos += 1,
        }
    }

    let body = &text[body_start..pos];
    let valid = if closing {
        body.is_empty() || body.starts_with(|c: char| c.is_ascii_alphabetic())
    } else {
        body.starts_with(|c: char| c.is_ascii_alphabetic())
    };
    if !valid {
        return None;
    }

    Some(Tag {
        start,
        end: pos + 1,
        body,
        closing,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn tag_free_text() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 .,!?:;'\"]{0,60}"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(400))]

        #[test]
        fn plain_text_is_identity_when_undecorated(text in tag_free_text()) {
            let mut formatter = MarkupFormatter::new(false, StyleRegistry::new());
            prop_assert_eq!(formatter.format(&text).unwrap(), text);
        }

        #[test]
        fn visible_length_equals_char_count_for_plain_text(text in tag_free_text()) {
            let mut formatter = MarkupFormatter::new(true, StyleRegistry::new());
            let len = formatter.length_without_decoration(&text).unwrap();
            prop_assert_eq!(len, text.chars().count());
        }

        #[test]
        fn escape_format_round_trip(text in "[a-zA-Z0-9 <>]{0,40}") {
            let mut formatter = MarkupFormatter::new(true, StyleRegistry::new());
            prop_assert_eq!(formatter.format(&escape(&text)).unwrap(), text);
        }

        #[test]
        fn wrapped_content_is_preserved_when_stripped(content in tag_free_text()) {
            let mut formatter = MarkupFormatter::new(false, StyleRegistry::new());
            let input = format!("<info>{}</info>", content);
            prop_assert_eq!(formatter.format(&input).unwrap(), content);
        }

        #[test]
        fn length_invariant_to_decoration_flag(content in tag_free_text()) {
            let input = format!("<comment>{}</comment>", content);
            let mut on = MarkupFormatter::new(true, StyleRegistry::new());
            let mut off = MarkupFormatter::new(false, StyleRegistry::new());
            prop_assert_eq!(
                on.length_without_decoration(&input).unwrap(),
                off.length_without_decoration(&input).unwrap()
            );
        }
    }
}
