//! Spreadsheet row source (.xls / .xlsx / .ods) backed by calamine

use super::{Row, RowSource, COLUMN_COUNT};
use crate::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;
use tracing::debug;

/// One worksheet, read into memory when opened
pub struct WorkbookSource {
    range: Range<Data>,
}

impl WorkbookSource {
    /// Open `path` and read `sheet`. The workbook handle is dropped before
    /// this returns, so the file is held open for the read only.
    pub fn open<P: AsRef<Path>>(path: P, sheet: &str) -> ImportResult<Self> {
        let path = path.as_ref();
        let mut workbook = open_workbook_auto(path).map_err(|e| {
            ImportError::Workbook(format!("Failed to open '{}': {}", path.display(), e))
        })?;

        let names = workbook.sheet_names();
        if !names.iter().any(|name| name == sheet) {
            return Err(ImportError::SheetNotFound {
                sheet: sheet.to_string(),
                available: names.join(", "),
            });
        }

        let range = workbook.worksheet_range(sheet).map_err(|e| {
            ImportError::Workbook(format!("Failed to read sheet '{}': {}", sheet, e))
        })?;
        debug!(sheet, start = ?range.start(), end = ?range.end(), "sheet loaded");

        Ok(Self { range })
    }
}

impl RowSource for WorkbookSource {
    fn bounds(&self) -> Option<(usize, usize)> {
        let (first, _) = self.range.start()?;
        let (last, _) = self.range.end()?;
        Some((first as usize, last as usize))
    }

    fn row(&self, index: usize) -> Row {
        (0..COLUMN_COUNT)
            .map(|col| {
                self.range
                    .get_value((index as u32, col as u32))
                    .map(format_cell)
                    .unwrap_or_default()
            })
            .collect()
    }
}

/// Sheet names of a workbook, in workbook order
pub fn sheet_names<P: AsRef<Path>>(path: P) -> ImportResult<Vec<String>> {
    let path = path.as_ref();
    let workbook = open_workbook_auto(path).map_err(|e| {
        ImportError::Workbook(format!("Failed to open '{}': {}", path.display(), e))
    })?;
    Ok(workbook.sheet_names())
}

/// Cell value as the spreadsheet would display it with General formatting
pub fn format_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format_number(*f),
        Data::Bool(b) => String::from(if *b { "TRUE" } else { "FALSE" }),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => datetime.format("%-m/%-d/%y").to_string(),
            None => format_number(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}

/// Significant digits shown for non-whole numbers in General format
const GENERAL_DIGITS: i32 = 10;

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        return format!("{}", n as i64);
    }

    let magnitude = n.abs().log10().floor() as i32;
    let decimals = (GENERAL_DIGITS - 1 - magnitude).clamp(0, 15) as usize;
    let text = format!("{:.*}", decimals, n);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}
