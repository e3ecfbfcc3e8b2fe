//! Record sinks: where assembled tire records go

mod sqlite;

pub use sqlite::SqliteSink;

use crate::error::{ImportError, ImportResult};
use crate::types::TireRecord;

pub trait RecordSink {
    /// Persist one record. An error aborts the import.
    fn accept(&mut self, record: TireRecord) -> ImportResult<()>;
}

/// Table a sink writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkSchema {
    pub table: String,
    /// Drop and recreate the table before the first insert
    pub recreate: bool,
}

impl Default for SinkSchema {
    fn default() -> Self {
        Self {
            table: "tires".to_string(),
            recreate: true,
        }
    }
}

impl SinkSchema {
    /// The table name is spliced into SQL, so only plain identifiers pass
    pub fn validate(&self) -> ImportResult<()> {
        if is_identifier(&self.table) {
            Ok(())
        } else {
            Err(ImportError::Validation(format!(
                "table name '{}' must be a plain SQL identifier",
                self.table
            )))
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Collects records in memory (dry runs, tests)
#[derive(Debug, Default)]
pub struct MemorySink {
    pub records: Vec<TireRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordSink for MemorySink {
    fn accept(&mut self, record: TireRecord) -> ImportResult<()> {
        self.records.push(record);
        Ok(())
    }
}
