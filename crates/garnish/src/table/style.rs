//! Table visual styles: border characters and cell templates.

use serde::{Deserialize, Serialize};

/// Which side padding goes on when a cell is shorter than its column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PadAlign {
    /// Pad on the right (content flush left).
    #[default]
    Left,
    /// Pad on the left (content flush right).
    Right,
    /// Pad on both sides.
    Center,
}

/// Visual configuration for table rendering.
///
/// Cell templates use a single `{}` placeholder. The content template's
/// extra characters (beyond the placeholder) become the per-column content
/// padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStyle {
    padding_char: char,
    horizontal_border_char: Option<char>,
    vertical_border_char: Option<char>,
    crossing_char: Option<char>,
    cell_header_format: String,
    cell_row_format: String,
    cell_row_content_format: String,
    border_format: String,
    pad_align: PadAlign,
}

impl Default for TableStyle {
    /// The classic ASCII grid: `+----+----+` borders, `|` separators,
    /// headers wrapped in `<info>`.
    fn default() -> Self {
        TableStyle {
            padding_char: ' ',
            horizontal_border_char: Some('-'),
            vertical_border_char: Some('|'),
            crossing_char: Some('+'),
            cell_header_format: "<info>{}</info>".to_string(),
            cell_row_format: "{}".to_string(),
            cell_row_content_format: " {} ".to_string(),
            border_format: "{}".to_string(),
            pad_align: PadAlign::Left,
        }
    }
}

impl TableStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// No borders at all, single-space column gaps, no content padding.
    pub fn compact() -> Self {
        TableStyle {
            horizontal_border_char: None,
            vertical_border_char: Some(' '),
            crossing_char: None,
            cell_row_content_format: "{}".to_string(),
            ..Self::default()
        }
    }

    /// Horizontal rules only, no vertical borders.
    pub fn borderless() -> Self {
        TableStyle {
            horizontal_border_char: Some('='),
            vertical_border_char: Some(' '),
            crossing_char: Some(' '),
            ..Self::default()
        }
    }

    /// Unicode light box-drawing borders.
    pub fn boxed() -> Self {
        TableStyle {
            horizontal_border_char: Some('─'),
            vertical_border_char: Some('│'),
            crossing_char: Some('┼'),
            ..Self::default()
        }
    }

    /// Look up a named preset: `default`, `compact`, `borderless`, `box`.
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::default()),
            "compact" => Some(Self::compact()),
            "borderless" => Some(Self::borderless()),
            "box" => Some(Self::boxed()),
            _ => None,
        }
    }

    pub fn padding_char(mut self, c: char) -> Self {
        self.padding_char = c;
        self
    }

    pub fn horizontal_border_char(mut self, c: Option<char>) -> Self {
        self.horizontal_border_char = c;
        self
    }

    pub fn vertical_border_char(mut self, c: Option<char>) -> Self {
        self.vertical_border_char = c;
        self
    }

    pub fn crossing_char(mut self, c: Option<char>) -> Self {
        self.crossing_char = c;
        self
    }

    pub fn cell_header_format(mut self, format: impl Into<String>) -> Self {
        self.cell_header_format = format.into();
        self
    }

    pub fn cell_row_format(mut self, format: impl Into<String>) -> Self {
        self.cell_row_format = format.into();
        self
    }

    pub fn cell_row_content_format(mut self, format: impl Into<String>) -> Self {
        self.cell_row_content_format = format.into();
        self
    }

    pub fn border_format(mut self, format: impl Into<String>) -> Self {
        self.border_format = format.into();
        self
    }

    pub fn pad_align(mut self, align: PadAlign) -> Self {
        self.pad_align = align;
        self
    }

    pub fn get_padding_char(&self) -> char {
        self.padding_char
    }

    pub fn get_horizontal_border_char(&self) -> Option<char> {
        self.horizontal_border_char
    }

    pub fn get_vertical_border_char(&self) -> Option<char> {
        self.vertical_border_char
    }

    pub fn get_crossing_char(&self) -> Option<char> {
        self.crossing_char
    }

    pub fn get_cell_header_format(&self) -> &str {
        &self.cell_header_format
    }

    pub fn get_cell_row_format(&self) -> &str {
        &self.cell_row_format
    }

    pub fn get_cell_row_content_format(&self) -> &str {
        &self.cell_row_content_format
    }

    pub fn get_border_format(&self) -> &str {
        &self.border_format
    }

    pub fn get_pad_align(&self) -> PadAlign {
        self.pad_align
    }

    /// Characters the content template adds around a cell (the "+2" of the
    /// default `" {} "`).
    pub fn content_padding(&self) -> usize {
        self.cell_row_content_format.chars().count().saturating_sub(2)
    }

    /// Substitute `value` into a cell/border template.
    pub fn apply_format(format: &str, value: &str) -> String {
        format.replacen("{}", value, 1)
    }
}
