//! Import pipeline: row source → header detection → assembly → record sink

use crate::assembler::RecordAssembler;
use crate::config::ImportConfig;
use crate::error::{ImportError, ImportResult};
use crate::header::HeaderValidator;
use crate::sink::RecordSink;
use crate::source::{is_blank, RowSource};
use tracing::{debug, info, warn};

/// Counters for one import run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Rows read from the source, header and blanks included
    pub rows_scanned: usize,
    /// Source index of the header row, if one was found
    pub header_row: Option<usize>,
    /// Rows before the header (not imported)
    pub rows_before_header: usize,
    /// Blank rows inside the data region
    pub blank_rows: usize,
    /// Records handed to the sink
    pub records: usize,
}

pub struct Pipeline {
    header: HeaderValidator,
    assembler: RecordAssembler,
    strict: bool,
}

impl Pipeline {
    pub fn new(header: HeaderValidator) -> ImportResult<Self> {
        Ok(Self {
            header,
            assembler: RecordAssembler::new()?,
            strict: false,
        })
    }

    pub fn from_config(config: &ImportConfig) -> ImportResult<Self> {
        config.validate()?;
        Self::new(HeaderValidator::new(config.header.clone())?)
    }

    /// Fail with `HeaderNotFound` instead of importing nothing
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Read every row of `source` in order and hand each data row's record
    /// to `sink`. A sink error stops the run.
    pub fn run<S, K>(&self, source: &S, sink: &mut K) -> ImportResult<ImportSummary>
    where
        S: RowSource + ?Sized,
        K: RecordSink + ?Sized,
    {
        let mut summary = ImportSummary::default();

        if let Some((first, last)) = source.bounds() {
            for index in first..=last {
                summary.rows_scanned += 1;
                let row = source.row(index);

                if summary.header_row.is_none() {
                    if self.header.matches(&row) {
                        debug!(row = index, "header found");
                        summary.header_row = Some(index);
                    } else {
                        summary.rows_before_header += 1;
                    }
                    continue;
                }

                if is_blank(&row) {
                    summary.blank_rows += 1;
                    continue;
                }

                let record = self.assembler.assemble(&row);
                debug!(row = index, ?record, "decoded");
                sink.accept(record)?;
                summary.records += 1;
            }
        }

        if summary.header_row.is_none() {
            if self.strict {
                return Err(ImportError::HeaderNotFound(self.header.labels().join(" | ")));
            }
            warn!(
                rows = summary.rows_scanned,
                "header row not found, nothing imported"
            );
        }

        info!(
            records = summary.records,
            blank_rows = summary.blank_rows,
            skipped = summary.rows_before_header,
            "import finished"
        );
        Ok(summary)
    }
}
