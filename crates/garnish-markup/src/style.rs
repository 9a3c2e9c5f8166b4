//! Style values: colors, text options, and their ANSI code pairs.
//!
//! A [`Style`] is a plain value: an optional foreground color, an optional
//! background color, and a set of text options. Applying a style wraps text
//! in a single combined escape sequence on each side, so nested styles can
//! be compared by their rendered output rather than by identity.

use crate::error::MarkupError;

/// The eight ANSI colors plus the terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Default,
}

impl Color {
    /// Parse a color name as used in markup specs.
    pub fn parse(name: &str) -> Result<Self, MarkupError> {
        match name.to_ascii_lowercase().as_str() {
            "black" => Ok(Color::Black),
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            "blue" => Ok(Color::Blue),
            "magenta" => Ok(Color::Magenta),
            "cyan" => Ok(Color::Cyan),
            "white" => Ok(Color::White),
            "default" => Ok(Color::Default),
            other => Err(MarkupError::invalid_style(format!(
                "unknown color \"{}\"",
                other
            ))),
        }
    }

    /// Set/unset codes when used as a foreground color.
    pub fn fg_codes(self) -> (u8, u8) {
        match self {
            Color::Black => (30, 39),
            Color::Red => (31, 39),
            Color::Green => (32, 39),
            Color::Yellow => (33, 39),
            Color::Blue => (34, 39),
            Color::Magenta => (35, 39),
            Color::Cyan => (36, 39),
            Color::White => (37, 39),
            Color::Default => (39, 39),
        }
    }

    /// Set/unset codes when used as a background color.
    pub fn bg_codes(self) -> (u8, u8) {
        let (set, _) = self.fg_codes();
        (set + 10, 49)
    }
}

/// Text attribute options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOption {
    Bold,
    Underscore,
    Blink,
    Reverse,
    Dim,
    Conceal,
}

impl TextOption {
    /// Parse an option name as used in `options=` clauses.
    pub fn parse(name: &str) -> Result<Self, MarkupError> {
        match name.to_ascii_lowercase().as_str() {
            "bold" => Ok(TextOption::Bold),
            "underscore" => Ok(TextOption::Underscore),
            "blink" => Ok(TextOption::Blink),
            "reverse" => Ok(TextOption::Reverse),
            "dim" => Ok(TextOption::Dim),
            "conceal" => Ok(TextOption::Conceal),
            other => Err(MarkupError::invalid_style(format!(
                "unknown option \"{}\"",
                other
            ))),
        }
    }

    /// Set/unset code pair for this option.
    pub fn codes(self) -> (u8, u8) {
        match self {
            TextOption::Bold => (1, 22),
            TextOption::Dim => (2, 22),
            TextOption::Underscore => (4, 24),
            TextOption::Blink => (5, 25),
            TextOption::Reverse => (7, 27),
            TextOption::Conceal => (8, 28),
        }
    }
}

/// A terminal text style: foreground, background, and option flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    foreground: Option<Color>,
    background: Option<Color>,
    options: Vec<TextOption>,
}

impl Style {
    /// An empty style that leaves text untouched.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreground color.
    pub fn fg(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Set the background color.
    pub fn bg(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Add a text option. Duplicates are ignored.
    pub fn option(mut self, option: TextOption) -> Self {
        if !self.options.contains(&option) {
            self.options.push(option);
        }
        self
    }

    /// Parse an inline style spec such as `fg=green;bg=black;options=bold,dim`.
    ///
    /// Clause keys are case-insensitive. Unknown keys, colors, or options
    /// fail with [`MarkupError::InvalidStyle`]; callers treat the whole tag
    /// as literal text in that case.
    pub fn parse_spec(spec: &str) -> Result<Self, MarkupError> {
        let mut style = Style::new();
        let mut matched = false;

        for clause in spec.split(';') {
            let clause = clause.trim();
            if clause.is_empty() {
                continue;
            }
            let (key, value) = clause.split_once('=').ok_or_else(|| {
                MarkupError::invalid_style(format!("malformed clause \"{}\"", clause))
            })?;
            matched = true;
            match key.trim().to_ascii_lowercase().as_str() {
                "fg" => style.foreground = Some(Color::parse(value.trim())?),
                "bg" => style.background = Some(Color::parse(value.trim())?),
                "options" => {
                    for name in value.split(',') {
                        let name = name.trim();
                        if name.is_empty() {
                            continue;
                        }
                        let option = TextOption::parse(name)?;
                        if !style.options.contains(&option) {
                            style.options.push(option);
                        }
                    }
                }
                other => {
                    return Err(MarkupError::invalid_style(format!(
                        "unknown clause \"{}\"",
                        other
                    )))
                }
            }
        }

        if !matched {
            return Err(MarkupError::invalid_style(format!(
                "\"{}\" contains no style clauses",
                spec
            )));
        }
        Ok(style)
    }

    /// Whether this style carries any active color or option.
    pub fn is_empty(&self) -> bool {
        self.foreground.is_none() && self.background.is_none() && self.options.is_empty()
    }

    /// Wrap `text` in this style's escape sequences.
    ///
    /// Set codes are joined into one escape sequence, unset codes into
    /// another. An empty style returns the text unchanged.
    pub fn apply(&self, text: &str) -> String {
        let mut set = Vec::new();
        let mut unset = Vec::new();

        if let Some(fg) = self.foreground {
            let (s, u) = fg.fg_codes();
            set.push(s);
            unset.push(u);
        }
        if let Some(bg) = self.background {
            let (s, u) = bg.bg_codes();
            set.push(s);
            unset.push(u);
        }
        for option in &self.options {
            let (s, u) = option.codes();
            set.push(s);
            unset.push(u);
        }

        if set.is_empty() {
            return text.to_string();
        }

        format!(
            "\x1b[{}m{}\x1b[{}m",
            join_codes(&set),
            text,
            join_codes(&unset)
        )
    }

    /// The escape-sequence pair this style renders, with empty content.
    ///
    /// Two styles with equal terminal output are interchangeable when
    /// closing tags, even if built differently.
    pub fn rendered(&self) -> String {
        self.apply("")
    }
}

fn join_codes(codes: &[u8]) -> String {
    codes
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(";")
}

#[cfg(test)]
mod tests {
    use super::*;

    mod colors {
        use super::*;

        #[test]
        fn parse_all_names() {
            for name in [
                "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white", "default",
            ] {
                assert!(Color::parse(name).is_ok(), "{} should parse", name);
            }
        }

        #[test]
        fn parse_is_case_insensitive() {
            assert_eq!(Color::parse("RED").unwrap(), Color::Red);
            assert_eq!(Color::parse("Green").unwrap(), Color::Green);
        }

        #[test]
        fn unknown_color_rejected() {
            assert!(matches!(
                Color::parse("pink"),
                Err(MarkupError::InvalidStyle(_))
            ));
        }

        #[test]
        fn background_codes_offset_by_ten() {
            assert_eq!(Color::Red.bg_codes(), (41, 49));
            assert_eq!(Color::Default.bg_codes(), (49, 49));
        }
    }

    mod apply {
        use super::*;

        #[test]
        fn empty_style_is_identity() {
            assert_eq!(Style::new().apply("plain"), "plain");
        }

        #[test]
        fn foreground_only() {
            let style = Style::new().fg(Color::Green);
            assert_eq!(style.apply("OK"), "\x1b[32mOK\x1b[39m");
        }

        #[test]
        fn combined_codes_joined_with_semicolons() {
            let style = Style::new()
                .fg(Color::White)
                .bg(Color::Red)
                .option(TextOption::Bold);
            assert_eq!(style.apply("x"), "\x1b[37;41;1mx\x1b[39;49;22m");
        }

        #[test]
        fn duplicate_option_applied_once() {
            let style = Style::new().option(TextOption::Bold).option(TextOption::Bold);
            assert_eq!(style.apply("x"), "\x1b[1mx\x1b[22m");
        }
    }

    mod spec_parsing {
        use super::*;

        #[test]
        fn full_spec() {
            let style = Style::parse_spec("fg=green;bg=black;options=bold,underscore").unwrap();
            assert_eq!(style.apply(""), "\x1b[32;40;1;4m\x1b[39;49;22;24m");
        }

        #[test]
        fn keys_case_insensitive() {
            let a = Style::parse_spec("FG=red").unwrap();
            let b = Style::parse_spec("fg=red").unwrap();
            assert_eq!(a, b);
        }

        #[test]
        fn unknown_color_fails() {
            assert!(Style::parse_spec("fg=chartreuse").is_err());
        }

        #[test]
        fn unknown_option_fails() {
            assert!(Style::parse_spec("options=sparkle").is_err());
        }

        #[test]
        fn unknown_clause_key_fails() {
            assert!(Style::parse_spec("color=red").is_err());
        }

        #[test]
        fn plain_word_is_not_a_spec() {
            assert!(Style::parse_spec("notastyle").is_err());
        }
    }

    mod rendered_equality {
        use super::*;

        #[test]
        fn differently_built_styles_compare_by_output() {
            let a = Style::parse_spec("fg=red").unwrap();
            let b = Style::new().fg(Color::Red);
            assert_eq!(a.rendered(), b.rendered());
        }
    }
}
