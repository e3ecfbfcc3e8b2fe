//! Import configuration (YAML)
//!
//! ```yaml
//! input: "Прайс шины.xls"
//! sheet: ACBA-2017-02-22-tyres
//! database: tires.db
//! table: tires
//! recreate_table: true
//! header: [Тип шины, Сезон, Название, Остаток, Цена, Страна, Год]
//! ```
//!
//! Every key is optional; missing keys take the defaults below.

use crate::error::{ImportError, ImportResult};
use crate::sink::SinkSchema;
use crate::source::COLUMN_COUNT;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Header labels of the reference price list, in column order
pub const DEFAULT_HEADER: [&str; COLUMN_COUNT] = [
    "Тип шины", "Сезон", "Название", "Остаток", "Цена", "Страна", "Год",
];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    pub input: PathBuf,
    pub sheet: String,
    pub database: PathBuf,
    pub table: String,
    pub recreate_table: bool,
    pub header: Vec<String>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("Прайс шины.xls"),
            sheet: "ACBA-2017-02-22-tyres".to_string(),
            database: PathBuf::from("tires.db"),
            table: "tires".to_string(),
            recreate_table: true,
            header: DEFAULT_HEADER.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ImportConfig {
    /// Load and validate a YAML config file
    pub fn load(path: &Path) -> ImportResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ImportConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ImportResult<()> {
        if self.header.len() != COLUMN_COUNT {
            return Err(ImportError::Validation(format!(
                "header must list {} labels, got {}",
                COLUMN_COUNT,
                self.header.len()
            )));
        }
        self.schema().validate()?;
        if self.sheet.is_empty() {
            return Err(ImportError::Validation("sheet name is empty".to_string()));
        }
        Ok(())
    }

    pub fn schema(&self) -> SinkSchema {
        SinkSchema {
            table: self.table.clone(),
            recreate: self.recreate_table,
        }
    }
}
