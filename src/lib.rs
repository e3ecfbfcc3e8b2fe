//! tire-import - tire price-list importer
//!
//! Reads a price-list worksheet, decodes each row's free-text model cell
//! (`215/60 R16 Nokian Hakka 95H XL шип FR`) into structured tire fields and
//! stores one record per row.
//!
//! # Example
//!
//! ```no_run
//! use tire_import::config::ImportConfig;
//! use tire_import::pipeline::Pipeline;
//! use tire_import::sink::SqliteSink;
//! use tire_import::source::WorkbookSource;
//!
//! let config = ImportConfig::default();
//! let source = WorkbookSource::open(&config.input, &config.sheet)?;
//! let mut sink = SqliteSink::open(&config.database, &config.schema())?;
//!
//! let summary = Pipeline::from_config(&config)?.run(&source, &mut sink)?;
//! println!("Records: {}", summary.records);
//! # Ok::<(), tire_import::error::ImportError>(())
//! ```

pub mod assembler;
pub mod cli;
pub mod config;
pub mod decode;
pub mod error;
pub mod header;
pub mod pipeline;
pub mod sink;
pub mod source;
pub mod types;

// Re-export commonly used types
pub use error::{ImportError, ImportResult};
pub use types::{Abbreviation, Category, TireRecord};
