use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

/// A table line: aligned cells, or a free-form note indented under the
/// previous row (travel legs, gear hand-overs).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Cells(Vec<String>),
    Note(String),
}

impl TableRow {
    pub fn cells<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TableRow::Cells(cells.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Clone)]
pub struct Table<'a> {
    pub title: &'a str,
    pub headers: &'a [&'a str],
    pub rows: Vec<TableRow>,
    pub empty_message: Option<&'a str>,
    pub min_width: usize,
}

impl<'a> Table<'a> {
    pub fn new(title: &'a str, headers: &'a [&'a str], rows: Vec<TableRow>) -> Self {
        Self {
            title,
            headers,
            rows,
            empty_message: None,
            min_width: 0,
        }
    }

    pub fn empty_message(mut self, msg: &'a str) -> Self {
        self.empty_message = Some(msg);
        self
    }

    pub fn min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }
}

const COLUMN_JOIN: &str = " | ";
const NOTE_INDENT: &str = "    ";

#[derive(Debug, Clone, Default)]
pub struct TablePrinter {
    util: WidthUtil,
}

impl TablePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_banner<W: Write + ?Sized>(
        &self,
        title: &str,
        width: usize,
        out: &mut W,
    ) -> io::Result<()> {
        let w = width.max(self.util.visible_width(title));
        writeln!(out, "{}", "=".repeat(w))?;
        writeln!(out, "{}", title.to_uppercase())?;
        writeln!(out, "{}", "=".repeat(w))
    }

    /// Natural width of `table`, ignoring its minimum.
    pub fn table_width(&self, table: &Table<'_>) -> usize {
        let cols = self.column_widths(table);
        let cells = if cols.is_empty() {
            0
        } else {
            cols.iter().sum::<usize>() + (cols.len() - 1) * COLUMN_JOIN.len()
        };
        let notes = table
            .rows
            .iter()
            .filter_map(|r| match r {
                TableRow::Note(n) => Some(NOTE_INDENT.len() + self.util.visible_width(n)),
                TableRow::Cells(_) => None,
            })
            .max()
            .unwrap_or(0);
        let empty = if table.rows.is_empty() {
            table
                .empty_message
                .map(|m| self.util.visible_width(m))
                .unwrap_or(0)
        } else {
            0
        };
        cells
            .max(notes)
            .max(empty)
            .max(self.util.visible_width(table.title))
    }

    pub fn print(&self, table: &Table<'_>) {
        let mut stdout = io::stdout();
        let _ = self.render(table, &mut stdout);
    }

    pub fn render<W: Write + ?Sized>(&self, table: &Table<'_>, out: &mut W) -> io::Result<()> {
        let cols = self.column_widths(table);
        let width = self.table_width(table).max(table.min_width);
        let rule = "-".repeat(width.max(1));

        writeln!(out, "{rule}")?;
        writeln!(out, "{}", table.title.to_uppercase())?;
        writeln!(out, "{rule}")?;

        if table.rows.is_empty() {
            if let Some(msg) = table.empty_message {
                writeln!(out, "{msg}")?;
                return writeln!(out, "{rule}");
            }
        }

        if !table.headers.is_empty() {
            let header: Vec<String> = table.headers.iter().map(|h| h.to_string()).collect();
            writeln!(out, "{}", self.join_cells(&header, &cols))?;
            writeln!(out, "{rule}")?;
        }

        for row in &table.rows {
            match row {
                TableRow::Cells(cells) => writeln!(out, "{}", self.join_cells(cells, &cols))?,
                TableRow::Note(note) => writeln!(out, "{NOTE_INDENT}{note}")?,
            }
        }
        writeln!(out, "{rule}")
    }

    fn column_widths(&self, table: &Table<'_>) -> Vec<usize> {
        let mut widths: Vec<usize> = table
            .headers
            .iter()
            .map(|h| self.util.visible_width(h))
            .collect();
        for row in &table.rows {
            if let TableRow::Cells(cells) = row {
                for (i, cell) in cells.iter().enumerate() {
                    let w = self.util.visible_width(cell);
                    match widths.get_mut(i) {
                        Some(slot) => *slot = (*slot).max(w),
                        None => widths.push(w),
                    }
                }
            }
        }
        widths
    }

    /// Pads every cell but the last, so rows carry no trailing spaces.
    fn join_cells(&self, cells: &[String], widths: &[usize]) -> String {
        let last = cells.len().saturating_sub(1);
        cells
            .iter()
            .enumerate()
            .map(|(i, c)| {
                if i == last {
                    c.clone()
                } else {
                    self.util.pad_visible(c, widths.get(i).copied().unwrap_or(0))
                }
            })
            .collect::<Vec<_>>()
            .join(COLUMN_JOIN)
    }
}
