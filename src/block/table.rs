//! Pipe tables.

use crate::render::HtmlWriter;
use smallvec::SmallVec;

/// One table row: trimmed, non-empty cells between pipes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow<'a> {
    pub cells: SmallVec<[&'a str; 8]>,
}

impl<'a> TableRow<'a> {
    pub fn parse(line: &'a str) -> Self {
        Self {
            cells: line
                .split('|')
                .map(str::trim)
                .filter(|cell| !cell.is_empty())
                .collect(),
        }
    }
}

/// A header row and body rows; the divider row is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<'a> {
    pub header: TableRow<'a>,
    pub body: Vec<TableRow<'a>>,
}

impl<'a> Table<'a> {
    /// Parse table text: a header line, a divider line, then body rows.
    ///
    /// # Example
    /// ```
    /// use glossmark::block::Table;
    ///
    /// let table = Table::parse("| A | B |\n|---|---|\n| 1 | 2 |").unwrap();
    /// assert_eq!(table.header.cells.as_slice(), ["A", "B"]);
    /// assert_eq!(table.body.len(), 1);
    /// assert!(Table::parse("a | b\nnot a divider").is_none());
    /// ```
    pub fn parse(text: &'a str) -> Option<Self> {
        if !text.contains('|') {
            return None;
        }
        let mut lines = text.split('\n');
        let header = lines.next()?;
        if !is_divider(lines.next()?) {
            return None;
        }

        Some(Self {
            header: TableRow::parse(header),
            body: lines.map(TableRow::parse).collect(),
        })
    }

    /// Write the table, calling `cell` for the content of every cell.
    ///
    /// Rows keep their own cell count. `<tbody>` is left out when there are
    /// no body rows.
    pub fn render<F>(&self, out: &mut HtmlWriter, mut cell: F)
    where
        F: FnMut(&str, &mut HtmlWriter),
    {
        out.table_start();
        out.thead_start();
        out.tr_start();
        for content in &self.header.cells {
            out.th_start();
            cell(content, out);
            out.th_end();
        }
        out.tr_end();
        out.thead_end();

        if !self.body.is_empty() {
            out.tbody_start();
            for row in &self.body {
                out.tr_start();
                for content in &row.cells {
                    out.td_start();
                    cell(content, out);
                    out.td_end();
                }
                out.tr_end();
            }
            out.tbody_end();
        }
        out.table_end();
    }
}

/// A divider row holds only `|`, `-`, `:` and whitespace, with at least one
/// `|` and one `-`.
pub fn is_divider(line: &str) -> bool {
    let mut pipe = false;
    let mut dash = false;
    for b in line.bytes() {
        match b {
            b'|' => pipe = true,
            b'-' => dash = true,
            b':' | b' ' | b'\t' => {}
            _ => return false,
        }
    }
    pipe && dash
}
