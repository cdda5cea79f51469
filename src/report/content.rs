//! Content blocks: the units a section renders to.
//!
//! DESIGN
//! ======
//! Blocks are plain data. They borrow `'static` text because every string
//! in the report is authored into the binary; nothing is read at runtime.
//! Table cells keep their numeric type so callers can compare figures
//! without re-parsing display strings.

use std::fmt;

use serde::Serialize;

// =============================================================================
// CONTENT BLOCK
// =============================================================================

/// One unit of section output, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Page title; only the opening section carries one.
    Title(&'static str),
    /// Section header.
    Header(&'static str),
    /// Bold run-in heading inside a section.
    Subheader(&'static str),
    Paragraph(&'static str),
    List { ordered: bool, items: Vec<&'static str> },
    Table(Table),
}

impl ContentBlock {
    #[must_use]
    pub fn bullets(items: &[&'static str]) -> Self {
        Self::List { ordered: false, items: items.to_vec() }
    }

    #[must_use]
    pub fn numbered(items: &[&'static str]) -> Self {
        Self::List { ordered: true, items: items.to_vec() }
    }

    /// The embedded table, if this block is one.
    #[must_use]
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }
}

// =============================================================================
// TABLE
// =============================================================================

/// Column headers plus literal rows. The first column names the row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| *c == name)
    }

    /// Row whose first cell is the text `key`.
    #[must_use]
    pub fn row(&self, key: &str) -> Option<&[Cell]> {
        self.rows
            .iter()
            .find(|row| matches!(row.first(), Some(Cell::Text(t)) if *t == key))
            .map(Vec::as_slice)
    }

    /// Cell at row `key`, column `column`.
    #[must_use]
    pub fn cell(&self, key: &str, column: &str) -> Option<&Cell> {
        let idx = self.column_index(column)?;
        self.row(key)?.get(idx)
    }
}

/// A literal table value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(&'static str),
    Count(u64),
    /// Model score, printed with the report's six decimal places.
    Score(f64),
}

impl Cell {
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Count(_) | Self::Score(_))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Count(n) => write!(f, "{n}"),
            Self::Score(v) => write!(f, "{v:.6}"),
        }
    }
}
