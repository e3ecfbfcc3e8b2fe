//! Header row detection

use crate::error::{ImportError, ImportResult};
use crate::source::COLUMN_COUNT;

/// Recognises the price-list header row by its labels
#[derive(Debug, Clone)]
pub struct HeaderValidator {
    labels: Vec<String>,
}

impl HeaderValidator {
    pub fn new(labels: Vec<String>) -> ImportResult<Self> {
        if labels.len() != COLUMN_COUNT {
            return Err(ImportError::Validation(format!(
                "expected {} header labels, got {}",
                COLUMN_COUNT,
                labels.len()
            )));
        }
        Ok(Self { labels })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Every cell equals its label, ignoring case
    pub fn matches(&self, row: &[String]) -> bool {
        row.len() >= self.labels.len()
            && self
                .labels
                .iter()
                .zip(row)
                .all(|(label, cell)| label.to_lowercase() == cell.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_HEADER;

    fn validator() -> HeaderValidator {
        HeaderValidator::new(DEFAULT_HEADER.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_header() {
        assert!(validator().matches(&row(&DEFAULT_HEADER)));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(validator().matches(&row(&[
            "ТИП ШИНЫ", "сезон", "НАЗВАНИЕ", "остаток", "Цена", "СТРАНА", "год"
        ])));
    }

    #[test]
    fn test_mismatch() {
        assert!(!validator().matches(&row(&[
            "Тип шины", "Сезон", "Модель", "Остаток", "Цена", "Страна", "Год"
        ])));
        assert!(!validator().matches(&row(&["", "", "", "", "", "", ""])));
        assert!(!validator().matches(&row(&["Тип шины", "Сезон"])));
    }

    #[test]
    fn test_whitespace_is_significant() {
        assert!(!validator().matches(&row(&[
            "Тип шины ", "Сезон", "Название", "Остаток", "Цена", "Страна", "Год"
        ])));
    }

    #[test]
    fn test_wrong_label_count() {
        assert!(HeaderValidator::new(vec!["a".to_string()]).is_err());
    }
}
