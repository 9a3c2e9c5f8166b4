//! Table cells and rows.

/// One cell of a table: content plus the number of grid columns and rows
/// it spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    content: String,
    colspan: usize,
    rowspan: usize,
}

impl TableCell {
    /// A plain 1x1 cell. Content may contain markup and line breaks.
    pub fn new(content: impl Into<String>) -> Self {
        TableCell {
            content: content.into(),
            colspan: 1,
            rowspan: 1,
        }
    }

    /// Span this many grid columns (clamped to at least 1).
    pub fn colspan(mut self, colspan: usize) -> Self {
        self.colspan = colspan.max(1);
        self
    }

    /// Span this many grid rows (clamped to at least 1).
    pub fn rowspan(mut self, rowspan: usize) -> Self {
        self.rowspan = rowspan.max(1);
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn get_colspan(&self) -> usize {
        self.colspan
    }

    pub fn get_rowspan(&self) -> usize {
        self.rowspan
    }
}

impl<S: Into<String>> From<S> for TableCell {
    fn from(content: S) -> Self {
        TableCell::new(content)
    }
}

/// A body row: either a sequence of cells or a horizontal rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Cells(Vec<TableCell>),
    Separator,
}

impl TableRow {
    /// Build a cell row from anything cell-convertible.
    pub fn cells<I, C>(cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<TableCell>,
    {
        TableRow::Cells(cells.into_iter().map(Into::into).collect())
    }

    /// A full-width horizontal rule.
    pub fn separator() -> Self {
        TableRow::Separator
    }
}

impl<C: Into<TableCell>> From<Vec<C>> for TableRow {
    fn from(cells: Vec<C>) -> Self {
        TableRow::cells(cells)
    }
}
