//! Tire category classification from the "Тип шины" cell

use crate::error::{ImportError, ImportResult};
use crate::types::Category;
use regex::Regex;

/// Ordered rule table: first match wins, no match is `Category::Car`.
/// Patterns are whole-cell and case-insensitive.
const CATEGORY_RULES: [(&str, Category); 4] = [
    (r"^(?i:мото)$", Category::Bike),
    (r"^(?i:грузов).*$", Category::Freight),
    (r"^(?i:с/х)$", Category::Agricultural),
    (r"^(?i:индустр).*$", Category::Industrial),
];

pub struct CategoryClassifier {
    rules: Vec<(Regex, Category)>,
}

impl CategoryClassifier {
    pub fn new() -> ImportResult<Self> {
        let rules = CATEGORY_RULES
            .iter()
            .map(|(pattern, category)| {
                Regex::new(pattern)
                    .map(|re| (re, *category))
                    .map_err(|e| ImportError::Validation(format!("Regex error: {}", e)))
            })
            .collect::<ImportResult<Vec<_>>>()?;

        Ok(Self { rules })
    }

    pub fn classify(&self, text: &str) -> Category {
        self.rules
            .iter()
            .find(|(re, _)| re.is_match(text))
            .map(|(_, category)| *category)
            .unwrap_or_default()
    }
}
