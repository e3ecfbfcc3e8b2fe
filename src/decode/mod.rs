//! Cell decoders: category, production year and the model abbreviation

pub mod abbreviation;
pub mod category;
pub mod year;

pub use abbreviation::AbbreviationDecoder;
pub use category::CategoryClassifier;
pub use year::{epoch_default, normalize_year};
