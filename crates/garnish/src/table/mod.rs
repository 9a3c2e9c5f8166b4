//! Table rendering with colspan/rowspan expansion.
//!
//! A [`Table`] holds header rows and body rows of [`TableCell`]s. Layout
//! happens entirely inside [`Table::render`]: spanning cells are expanded
//! into a flat grid, column widths are computed from visible text lengths,
//! and bordered lines come back as strings. Nothing layout-related is
//! cached on the table between renders.
//!
//! # Example
//!
//! ```rust
//! use garnish::table::{Table, TableRow};
//! use garnish_markup::{MarkupFormatter, StyleRegistry};
//!
//! let mut formatter = MarkupFormatter::new(false, StyleRegistry::new());
//! let table = Table::new()
//!     .set_header_row(["A", "B"])
//!     .add_row(TableRow::cells(["1", "2"]));
//!
//! let lines = table.render(&mut formatter).unwrap();
//! assert_eq!(lines, vec![
//!     "+---+---+",
//!     "| A | B |",
//!     "+---+---+",
//!     "| 1 | 2 |",
//!     "+---+---+",
//! ]);
//! ```

mod cell;
mod style;

pub use cell::{TableCell, TableRow};
pub use style::{PadAlign, TableStyle};

use garnish_markup::MarkupFormatter;

use crate::error::TableError;

/// A table: headers, body rows, a visual style, and minimum column widths.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<Vec<TableCell>>,
    rows: Vec<TableRow>,
    style: TableStyle,
    column_min_widths: Vec<usize>,
}

/// A cell during layout: rowspan is consumed by expansion, colspan survives
/// until rendering.
#[derive(Debug, Clone)]
struct WorkCell {
    content: String,
    colspan: usize,
    rowspan: usize,
}

impl WorkCell {
    fn blank(colspan: usize) -> Self {
        WorkCell {
            content: String::new(),
            colspan,
            rowspan: 1,
        }
    }
}

#[derive(Debug, Clone)]
enum WorkRow {
    Cells(Vec<WorkCell>),
    Separator,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all header rows.
    pub fn set_headers<I, R>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = TableCell>,
    {
        self.headers = headers
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();
        self
    }

    /// Set a single header row.
    pub fn set_header_row<I, C>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<TableCell>,
    {
        self.headers = vec![cells.into_iter().map(Into::into).collect()];
        self
    }

    /// Replace all body rows.
    pub fn set_rows<I, R>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<TableRow>,
    {
        self.rows = rows.into_iter().map(Into::into).collect();
        self
    }

    /// Append one body row.
    pub fn add_row(mut self, row: impl Into<TableRow>) -> Self {
        self.rows.push(row.into());
        self
    }

    /// Set the visual style.
    pub fn set_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    /// Enforce a minimum width for one column (zero-based).
    pub fn set_column_min_width(mut self, column: usize, width: usize) -> Self {
        if self.column_min_widths.len() <= column {
            self.column_min_widths.resize(column + 1, 0);
        }
        self.column_min_widths[column] = width;
        self
    }

    /// Lay the table out and render it to bordered lines.
    ///
    /// Column widths and the column count are computed here and discarded;
    /// rendering twice always recomputes from the current contents.
    pub fn render(&self, formatter: &mut MarkupFormatter) -> Result<Vec<String>, TableError> {
        let total_columns = self.count_columns();
        if total_columns == 0 {
            return Ok(Vec::new());
        }

        let headers: Vec<WorkRow> = self
            .headers
            .iter()
            .map(|row| WorkRow::Cells(row.iter().map(to_work_cell).collect()))
            .collect();
        let body: Vec<WorkRow> = self
            .rows
            .iter()
            .map(|row| match row {
                TableRow::Cells(cells) => WorkRow::Cells(cells.iter().map(to_work_cell).collect()),
                TableRow::Separator => WorkRow::Separator,
            })
            .collect();

        let headers = expand_rows(headers, total_columns);
        let body = expand_rows(body, total_columns);

        let widths = self.calculate_column_widths(&headers, &body, total_columns, formatter)?;

        let mut lines = Vec::new();
        if let Some(rule) = self.render_rule(&widths) {
            lines.push(rule);
        }

        for header in &headers {
            if let WorkRow::Cells(cells) = header {
                lines.push(self.render_content_row(
                    cells,
                    &widths,
                    self.style.get_cell_header_format(),
                    formatter,
                )?);
                if let Some(rule) = self.render_rule(&widths) {
                    lines.push(rule);
                }
            }
        }

        for row in &body {
            match row {
                WorkRow::Separator => {
                    if let Some(rule) = self.render_rule(&widths) {
                        lines.push(rule);
                    }
                }
                WorkRow::Cells(cells) => {
                    lines.push(self.render_content_row(
                        cells,
                        &widths,
                        self.style.get_cell_row_format(),
                        formatter,
                    )?);
                }
            }
        }

        if !body.is_empty() {
            if let Some(rule) = self.render_rule(&widths) {
                lines.push(rule);
            }
        }

        Ok(lines)
    }

    /// Logical column count: the widest row wins, counting colspans.
    fn count_columns(&self) -> usize {
        let header_max = self
            .headers
            .iter()
            .map(|row| logical_width_cells(row))
            .max()
            .unwrap_or(0);
        let body_max = self
            .rows
            .iter()
            .filter_map(|row| match row {
                TableRow::Cells(cells) => Some(logical_width_cells(cells)),
                TableRow::Separator => None,
            })
            .max()
            .unwrap_or(0);
        header_max.max(body_max)
    }

    fn calculate_column_widths(
        &self,
        headers: &[WorkRow],
        body: &[WorkRow],
        total_columns: usize,
        formatter: &mut MarkupFormatter,
    ) -> Result<Vec<usize>, TableError> {
        let mut widths = vec![0usize; total_columns];

        for row in headers.iter().chain(body.iter()) {
            let WorkRow::Cells(cells) = row else {
                continue;
            };
            let mut column = 0;
            for cell in cells {
                if column >= total_columns {
                    break;
                }
                let visible = formatter.length_without_decoration(&cell.content)?;
                if cell.colspan == 1 {
                    widths[column] = widths[column].max(visible);
                    column += 1;
                } else {
                    // Distribute the text evenly across the spanned columns.
                    let chunk = visible.div_ceil(cell.colspan);
                    let mut remaining = visible;
                    for offset in 0..cell.colspan {
                        let share = chunk.min(remaining);
                        remaining -= share;
                        if let Some(slot) = widths.get_mut(column + offset) {
                            *slot = (*slot).max(share);
                        }
                    }
                    column += cell.colspan;
                }
            }
        }

        let padding = self.style.content_padding();
        for (index, width) in widths.iter_mut().enumerate() {
            let min = self.column_min_widths.get(index).copied().unwrap_or(0);
            *width = (*width).max(min) + padding;
        }
        Ok(widths)
    }

    /// One horizontal rule, or nothing when the style has no horizontal
    /// border character.
    fn render_rule(&self, widths: &[usize]) -> Option<String> {
        let horizontal = self.style.get_horizontal_border_char()?;
        let crossing = self
            .style
            .get_crossing_char()
            .map(String::from)
            .unwrap_or_default();

        let mut line = crossing.clone();
        for width in widths {
            line.extend(std::iter::repeat(horizontal).take(*width));
            line.push_str(&crossing);
        }
        Some(TableStyle::apply_format(
            self.style.get_border_format(),
            &line,
        ))
    }

    fn render_content_row(
        &self,
        cells: &[WorkCell],
        widths: &[usize],
        cell_format: &str,
        formatter: &mut MarkupFormatter,
    ) -> Result<String, TableError> {
        let separator = self
            .style
            .get_vertical_border_char()
            .map(String::from)
            .unwrap_or_default();
        let separator_width = separator.chars().count();

        let mut line = separator.clone();
        let mut column = 0;

        for cell in cells {
            if column >= widths.len() {
                break;
            }
            line.push_str(&self.render_cell(cell, column, widths, separator_width, cell_format, formatter)?);
            line.push_str(&separator);
            column += cell.colspan;
        }

        // Short rows get blank cells out to the full grid width.
        while column < widths.len() {
            let blank = WorkCell::blank(1);
            line.push_str(&self.render_cell(&blank, column, widths, separator_width, cell_format, formatter)?);
            line.push_str(&separator);
            column += 1;
        }

        Ok(formatter.format(&line)?)
    }

    fn render_cell(
        &self,
        cell: &WorkCell,
        column: usize,
        widths: &[usize],
        separator_width: usize,
        cell_format: &str,
        formatter: &mut MarkupFormatter,
    ) -> Result<String, TableError> {
        let mut width = widths[column];
        if cell.colspan > 1 {
            // The spanned columns contribute their widths and separators.
            for next in (column + 1)..(column + cell.colspan).min(widths.len()) {
                width += separator_width + widths[next];
            }
        }

        let visible = formatter.length_without_decoration(&cell.content)?;
        let raw = cell.content.chars().count();
        // Markup characters take no visible space; widen the pad target so
        // they do not eat into the column.
        let target = width + (raw - visible.min(raw));

        let content = TableStyle::apply_format(
            self.style.get_cell_row_content_format(),
            &cell.content,
        );
        let padded = pad(
            &content,
            target,
            self.style.get_padding_char(),
            self.style.get_pad_align(),
        );
        Ok(TableStyle::apply_format(cell_format, &padded))
    }
}

fn to_work_cell(cell: &TableCell) -> WorkCell {
    WorkCell {
        content: cell.content().to_string(),
        colspan: cell.get_colspan(),
        rowspan: cell.get_rowspan(),
    }
}

fn logical_width_cells(cells: &[TableCell]) -> usize {
    cells.iter().map(TableCell::get_colspan).sum()
}

fn logical_width(cells: &[WorkCell]) -> usize {
    cells.iter().map(|c| c.colspan).sum()
}

/// Expand rowspans and multi-line cells into a flat grid of single-line,
/// rowspan-free rows.
fn expand_rows(mut rows: Vec<WorkRow>, total_columns: usize) -> Vec<WorkRow> {
    let mut index = 0;
    while index < rows.len() {
        if matches!(rows[index], WorkRow::Cells(_)) {
            // Rowspans first: their overflow pairs with the next real
            // row, not with line-spill rows created below.
            expand_rowspans_at(&mut rows, index, total_columns);
            expand_multiline_at(&mut rows, index);
        }
        index += 1;
    }
    rows
}

/// Split rowspan cells at `index` into entries for the rows below.
///
/// Governing rule: an overflow row merges into the existing next row when
/// their combined logical column count still fits the table, otherwise a
/// new row is inserted, shaped like the row above it.
fn expand_rowspans_at(rows: &mut Vec<WorkRow>, index: usize, total_columns: usize) {
    let mut pending: Vec<(usize, Vec<(usize, WorkCell)>)> = Vec::new();

    {
        let WorkRow::Cells(cells) = &mut rows[index] else {
            return;
        };
        for (position, cell) in cells.iter_mut().enumerate() {
            if cell.rowspan <= 1 {
                continue;
            }
            let mut extra_rows = cell.rowspan - 1;
            let lines: Vec<String> = cell.content.split('\n').map(str::to_string).collect();
            if lines.len() > 1 && lines.len() - 1 > extra_rows {
                extra_rows = lines.len() - 1;
            }

            cell.content = lines[0].clone();
            cell.rowspan = 1;
            let colspan = cell.colspan;

            for offset in 1..=extra_rows {
                let content = lines.get(offset).cloned().unwrap_or_default();
                let entry = WorkCell {
                    content,
                    colspan,
                    rowspan: 1,
                };
                match pending.iter_mut().find(|(o, _)| *o == offset) {
                    Some((_, entries)) => entries.push((position, entry)),
                    None => pending.push((offset, vec![(position, entry)])),
                }
            }
        }
    }

    pending.sort_by_key(|(offset, _)| *offset);

    for (offset, entries) in pending {
        let target = index + offset;
        let overflow_width: usize = entries.iter().map(|(_, cell)| cell.colspan).sum();

        let merges = match rows.get(target) {
            Some(WorkRow::Cells(existing)) => {
                logical_width(existing) + overflow_width <= total_columns
            }
            _ => false,
        };

        if merges {
            if let Some(WorkRow::Cells(existing)) = rows.get_mut(target) {
                for (position, cell) in entries {
                    existing.insert(position.min(existing.len()), cell);
                }
            }
        } else {
            // Copy the shape of the row above as blank filler.
            let mut new_row: Vec<WorkCell> = match &rows[target - 1] {
                WorkRow::Cells(above) => {
                    above.iter().map(|c| WorkCell::blank(c.colspan)).collect()
                }
                WorkRow::Separator => Vec::new(),
            };
            for (position, cell) in entries {
                if position < new_row.len() {
                    new_row[position] = cell;
                } else {
                    new_row.push(cell);
                }
            }
            rows.insert(target.min(rows.len()), WorkRow::Cells(new_row));
        }
    }
}

/// Split multi-line cells at `index`: the first line stays put, later lines
/// move into fresh rows inserted right below, keeping column position and
/// colspan.
fn expand_multiline_at(rows: &mut Vec<WorkRow>, index: usize) {
    let (spills, shape) = {
        let WorkRow::Cells(cells) = &mut rows[index] else {
            return;
        };
        let mut spills: Vec<(usize, Vec<String>)> = Vec::new();
        for (position, cell) in cells.iter_mut().enumerate() {
            // Rowspan cells keep their line breaks for rowspan expansion.
            if cell.rowspan > 1 || !cell.content.contains('\n') {
                continue;
            }
            let mut lines = cell.content.split('\n').map(str::to_string);
            let first = lines.next().unwrap_or_default();
            let rest: Vec<String> = lines.collect();
            cell.content = first;
            spills.push((position, rest));
        }
        if spills.is_empty() {
            return;
        }
        let shape: Vec<usize> = cells.iter().map(|c| c.colspan).collect();
        (spills, shape)
    };

    let extra_lines = spills.iter().map(|(_, rest)| rest.len()).max().unwrap_or(0);
    for line_index in 0..extra_lines {
        let mut new_row: Vec<WorkCell> =
            shape.iter().map(|colspan| WorkCell::blank(*colspan)).collect();
        for (position, rest) in &spills {
            if let Some(content) = rest.get(line_index) {
                new_row[*position].content = content.clone();
            }
        }
        rows.insert(index + 1 + line_index, WorkRow::Cells(new_row));
    }
}

/// Pad `text` with `pad_char` to `target` characters.
fn pad(text: &str, target: usize, pad_char: char, align: PadAlign) -> String {
    let len = text.chars().count();
    if len >= target {
        return text.to_string();
    }
    let missing = target - len;
    let fill = |n: usize| pad_char.to_string().repeat(n);
    match align {
        PadAlign::Left => format!("{}{}", text, fill(missing)),
        PadAlign::Right => format!("{}{}", fill(missing), text),
        PadAlign::Center => {
            let left = missing / 2;
            format!("{}{}{}", fill(left), text, fill(missing - left))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garnish_markup::StyleRegistry;

    fn plain_formatter() -> MarkupFormatter {
        MarkupFormatter::new(false, StyleRegistry::new())
    }

    fn decorated_formatter() -> MarkupFormatter {
        MarkupFormatter::new(true, StyleRegistry::new())
    }

    fn render(table: &Table) -> Vec<String> {
        table.render(&mut plain_formatter()).unwrap()
    }

    mod basic {
        use super::*;

        #[test]
        fn two_by_one_table_renders_five_lines() {
            let table = Table::new()
                .set_header_row(["A", "B"])
                .add_row(TableRow::cells(["1", "2"]));
            let lines = render(&table);
            assert_eq!(
                lines,
                vec!["+---+---+", "| A | B |", "+---+---+", "| 1 | 2 |", "+---+---+",]
            );
        }

        #[test]
        fn empty_table_renders_nothing() {
            assert!(render(&Table::new()).is_empty());
        }

        #[test]
        fn headers_only_no_bottom_border() {
            let table = Table::new().set_header_row(["A"]);
            let lines = render(&table);
            // Top border, header, header separator; no body, no bottom.
            assert_eq!(lines, vec!["+---+", "| A |", "+---+"]);
        }

        #[test]
        fn rows_without_headers() {
            let table = Table::new().add_row(TableRow::cells(["x"]));
            assert_eq!(render(&table), vec!["+---+", "| x |", "+---+"]);
        }

        #[test]
        fn column_width_follows_longest_cell() {
            let table = Table::new()
                .set_header_row(["Name"])
                .add_row(TableRow::cells(["Evangeline"]));
            assert_eq!(
                render(&table),
                vec![
                    "+------------+",
                    "| Name       |",
                    "+------------+",
                    "| Evangeline |",
                    "+------------+",
                ]
            );
        }

        #[test]
        fn short_rows_are_padded_with_blank_cells() {
            let table = Table::new()
                .set_header_row(["A", "B"])
                .add_row(TableRow::cells(["1"]));
            assert_eq!(
                render(&table),
                vec!["+---+---+", "| A | B |", "+---+---+", "| 1 |   |", "+---+---+",]
            );
        }

        #[test]
        fn markup_errors_propagate_from_render() {
            let table = Table::new().add_row(TableRow::cells(["<info>x</error>"]));
            let result = table.render(&mut plain_formatter());
            assert!(matches!(result, Err(TableError::Markup(_))));
        }

        #[test]
        fn decorated_header_cells_use_info_style() {
            let table = Table::new()
                .set_header_row(["A"])
                .add_row(TableRow::cells(["1"]));
            let lines = table.render(&mut decorated_formatter()).unwrap();
            assert_eq!(lines[1], "|\x1b[32m A \x1b[39m|");
            assert_eq!(lines[3], "| 1 |");
        }
    }

    mod separators {
        use super::*;

        #[test]
        fn separator_rows_render_as_rules() {
            let table = Table::new()
                .add_row(TableRow::cells(["a"]))
                .add_row(TableRow::separator())
                .add_row(TableRow::cells(["b"]));
            assert_eq!(
                render(&table),
                vec!["+---+", "| a |", "+---+", "| b |", "+---+"]
            );
        }

        #[test]
        fn rule_count_matches_structure() {
            // top + one per header row + one per body separator + bottom
            let table = Table::new()
                .set_header_row(["A"])
                .add_row(TableRow::cells(["1"]))
                .add_row(TableRow::separator())
                .add_row(TableRow::cells(["2"]));
            let lines = render(&table);
            let rules = lines.iter().filter(|l| l.starts_with('+')).count();
            assert_eq!(rules, 4);
        }
    }

    mod spans {
        use super::*;

        #[test]
        fn colspan_cell_spans_column_widths_and_separators() {
            let table = Table::new()
                .set_header_row(["A", "B", "C"])
                .add_row(TableRow::Cells(vec![
                    TableCell::new("span2").colspan(2),
                    TableCell::new("c"),
                ]));
            let lines = render(&table);
            assert_eq!(
                lines,
                vec![
                    "+-----+----+---+",
                    "| A   | B  | C |",
                    "+-----+----+---+",
                    "| span2    | c |",
                    "+-----+----+---+",
                ]
            );
        }

        #[test]
        fn rowspan_merges_into_following_row_when_it_fits() {
            let table = Table::new()
                .add_row(TableRow::Cells(vec![
                    TableCell::new("a").rowspan(2),
                    TableCell::new("b1"),
                ]))
                .add_row(TableRow::cells(["b2"]));
            assert_eq!(
                render(&table),
                vec![
                    "+---+----+",
                    "| a | b1 |",
                    "|   | b2 |",
                    "+---+----+",
                ]
            );
        }

        #[test]
        fn rowspan_inserts_a_new_row_when_nothing_follows() {
            let table = Table::new().add_row(TableRow::Cells(vec![
                TableCell::new("x\ny").rowspan(2),
                TableCell::new("r"),
            ]));
            assert_eq!(
                render(&table),
                vec![
                    "+---+---+",
                    "| x | r |",
                    "| y |   |",
                    "+---+---+",
                ]
            );
        }

        #[test]
        fn rowspan_inserts_rather_than_overflowing_a_full_row() {
            // The following row is already at full width, so the spill
            // line gets its own row.
            let table = Table::new()
                .add_row(TableRow::Cells(vec![
                    TableCell::new("tall").rowspan(2),
                    TableCell::new("b1"),
                ]))
                .add_row(TableRow::cells(["c1", "c2"]));
            assert_eq!(
                render(&table),
                vec![
                    "+------+----+",
                    "| tall | b1 |",
                    "|      |    |",
                    "| c1   | c2 |",
                    "+------+----+",
                ]
            );
        }

        #[test]
        fn combined_rowspan_and_colspan() {
            let table = Table::new()
                .set_header_row(["A", "B", "C"])
                .add_row(TableRow::Cells(vec![
                    TableCell::new("wide").colspan(2).rowspan(2),
                    TableCell::new("c1"),
                ]))
                .add_row(TableRow::cells(["c2"]));
            let lines = render(&table);
            // All rendered rows share one width.
            let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
            assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", lines);
            assert!(lines[3].contains("wide"));
            assert!(lines[3].contains("c1"));
            assert!(lines[4].contains("c2"));
        }
    }

    mod multiline {
        use super::*;

        #[test]
        fn multiline_cell_becomes_follow_up_rows() {
            let table = Table::new().add_row(TableRow::Cells(vec![
                TableCell::new("l1\nl2"),
                TableCell::new("z"),
            ]));
            assert_eq!(
                render(&table),
                vec![
                    "+----+---+",
                    "| l1 | z |",
                    "| l2 |   |",
                    "+----+---+",
                ]
            );
        }

        #[test]
        fn two_multiline_cells_share_follow_up_rows() {
            let table = Table::new().add_row(TableRow::Cells(vec![
                TableCell::new("a1\na2"),
                TableCell::new("b1\nb2\nb3"),
            ]));
            assert_eq!(
                render(&table),
                vec![
                    "+----+----+",
                    "| a1 | b1 |",
                    "| a2 | b2 |",
                    "|    | b3 |",
                    "+----+----+",
                ]
            );
        }
    }

    mod widths_and_styles {
        use super::*;

        #[test]
        fn min_column_width_is_honored() {
            let table = Table::new()
                .add_row(TableRow::cells(["x"]))
                .set_column_min_width(0, 5);
            assert_eq!(render(&table), vec!["+-------+", "| x     |", "+-------+"]);
        }

        #[test]
        fn markup_in_cells_does_not_inflate_widths() {
            let table = Table::new()
                .add_row(TableRow::cells(["<info>ok</info>"]))
                .add_row(TableRow::cells(["no"]));
            let lines = render(&table);
            assert_eq!(lines[0], "+----+");
            assert_eq!(lines[1], "| ok |");
            assert_eq!(lines[2], "| no |");
        }

        #[test]
        fn compact_style_drops_borders() {
            let table = Table::new()
                .set_style(TableStyle::compact())
                .set_header_row(["A"])
                .add_row(TableRow::cells(["1"]));
            assert_eq!(render(&table), vec![" A ", " 1 "]);
        }

        #[test]
        fn right_alignment_pads_on_the_left() {
            let table = Table::new()
                .set_style(TableStyle::default().pad_align(PadAlign::Right))
                .add_row(TableRow::cells(["ab"]))
                .add_row(TableRow::cells(["c"]));
            let lines = render(&table);
            assert_eq!(lines[2], "|  c |");
        }

        #[test]
        fn every_content_row_has_equal_rendered_width() {
            let table = Table::new()
                .set_header_row(["one", "two", "three"])
                .add_row(TableRow::Cells(vec![
                    TableCell::new("spanning text").colspan(3),
                ]))
                .add_row(TableRow::cells(["a", "bb", "ccc"]))
                .add_row(TableRow::separator())
                .add_row(TableRow::cells(["dddd", "e", "f"]));
            let lines = render(&table);
            let first = lines[0].chars().count();
            for line in &lines {
                assert_eq!(line.chars().count(), first, "uneven line: {:?}", line);
            }
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use garnish_markup::StyleRegistry;
    use proptest::prelude::*;

    fn cell_text() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 ]{0,12}"
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn rendered_lines_always_share_one_width(
            rows in proptest::collection::vec(
                proptest::collection::vec(cell_text(), 1..4),
                1..5,
            ),
        ) {
            let mut table = Table::new();
            for row in rows {
                table = table.add_row(TableRow::cells(row));
            }
            let mut formatter = MarkupFormatter::new(false, StyleRegistry::new());
            let lines = table.render(&mut formatter).unwrap();
            prop_assert!(!lines.is_empty());
            let width = lines[0].chars().count();
            for line in &lines {
                prop_assert_eq!(line.chars().count(), width);
            }
        }
    }
}
