//! Row sources: where raw price-list rows come from
//!
//! A source exposes its first/last row index and, per index, exactly
//! `COLUMN_COUNT` formatted text cells. Blank cells are empty strings.

mod workbook;

pub use workbook::{format_cell, sheet_names, WorkbookSource};

/// Columns read from every row
pub const COLUMN_COUNT: usize = 7;

pub type Row = Vec<String>;

pub trait RowSource {
    /// First and last row index (inclusive), `None` for an empty sheet
    fn bounds(&self) -> Option<(usize, usize)>;

    /// Cells of row `index`, always `COLUMN_COUNT` long
    fn row(&self, index: usize) -> Row;
}

/// True when every cell is empty or whitespace
pub fn is_blank(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

/// Rows held in memory, indexed from 0
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    rows: Vec<Row>,
}

impl MemorySource {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn from_strs(rows: &[&[&str]]) -> Self {
        Self::new(
            rows.iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
        )
    }
}

impl RowSource for MemorySource {
    fn bounds(&self) -> Option<(usize, usize)> {
        if self.rows.is_empty() {
            None
        } else {
            Some((0, self.rows.len() - 1))
        }
    }

    fn row(&self, index: usize) -> Row {
        let mut row = self.rows.get(index).cloned().unwrap_or_default();
        row.resize(COLUMN_COUNT, String::new());
        row
    }
}
