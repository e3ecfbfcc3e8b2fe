//! Row → TireRecord assembly

use crate::decode::{normalize_year, AbbreviationDecoder, CategoryClassifier};
use crate::error::ImportResult;
use crate::types::{PassThrough, TireRecord};

/// Source column positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceColumn {
    Category = 0,
    Season = 1,
    Abbreviation = 2,
    Remainder = 3,
    Price = 4,
    Country = 5,
    Year = 6,
}

impl SourceColumn {
    fn cell(self, row: &[String]) -> &str {
        row.get(self as usize).map(String::as_str).unwrap_or("")
    }
}

pub struct RecordAssembler {
    classifier: CategoryClassifier,
    decoder: AbbreviationDecoder,
}

impl RecordAssembler {
    pub fn new() -> ImportResult<Self> {
        Ok(Self {
            classifier: CategoryClassifier::new()?,
            decoder: AbbreviationDecoder::new()?,
        })
    }

    /// Build the record for one data row. Pure: depends on the row text only.
    pub fn assemble(&self, row: &[String]) -> TireRecord {
        let category = self.classifier.classify(SourceColumn::Category.cell(row));
        let abbreviation = self.decoder.decode(SourceColumn::Abbreviation.cell(row));
        let production_year = normalize_year(SourceColumn::Year.cell(row));
        let pass_through = PassThrough {
            season: SourceColumn::Season.cell(row).to_string(),
            remainder: SourceColumn::Remainder.cell(row).to_string(),
            price: SourceColumn::Price.cell(row).to_string(),
            country: SourceColumn::Country.cell(row).to_string(),
        };

        TireRecord::new(category, abbreviation, pass_through, production_year)
    }
}
