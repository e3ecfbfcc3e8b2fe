use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

//==============================================================================
// Tire Category
//==============================================================================

/// Tire category tag stored alongside every record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    #[default]
    Car,
    Bike,
    Freight,
    Agricultural,
    Industrial,
}

impl Category {
    /// All categories, in schema order
    pub const ALL: [Category; 5] = [
        Category::Car,
        Category::Bike,
        Category::Freight,
        Category::Agricultural,
        Category::Industrial,
    ];

    /// Database/enum label of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Car => "CAR",
            Category::Bike => "BIKE",
            Category::Freight => "FREIGHT",
            Category::Agricultural => "AGRICULTURAL",
            Category::Industrial => "INDUSTRIAL",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//==============================================================================
// Decoded abbreviation
//==============================================================================

/// Structured fields decoded from the free-text model cell,
/// e.g. `215/60 R16С Nokian Hakka 95H XL шип FR`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Abbreviation {
    pub width: String,
    pub height: String,
    pub diameter: String,
    pub brand_name: String,
    pub model_name: String,
    pub weight_index: String,
    pub speed_index: String,
    pub strengthened: String,
    pub is_studded: bool,
    pub additional: String,
}

//==============================================================================
// Tire Record
//==============================================================================

/// One normalized price-list row, in table column order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TireRecord {
    pub category: Category,
    pub season: String,
    pub width: String,
    pub height: String,
    pub diameter: String,
    pub brand_name: String,
    pub model_name: String,
    pub weight_index: String,
    pub speed_index: String,
    pub strengthened: String,
    pub is_studded: bool,
    pub additional: String,
    pub remainder: String,
    pub price: String,
    pub country: String,
    pub production_year: NaiveDate,
}

impl TireRecord {
    /// Build a record from its decoded parts and pass-through columns
    pub fn new(
        category: Category,
        abbreviation: Abbreviation,
        pass_through: PassThrough,
        production_year: NaiveDate,
    ) -> Self {
        let Abbreviation {
            width,
            height,
            diameter,
            brand_name,
            model_name,
            weight_index,
            speed_index,
            strengthened,
            is_studded,
            additional,
        } = abbreviation;
        let PassThrough {
            season,
            remainder,
            price,
            country,
        } = pass_through;

        Self {
            category,
            season,
            width,
            height,
            diameter,
            brand_name,
            model_name,
            weight_index,
            speed_index,
            strengthened,
            is_studded,
            additional,
            remainder,
            price,
            country,
            production_year,
        }
    }

    /// Decoded abbreviation fields of this record
    pub fn abbreviation(&self) -> Abbreviation {
        Abbreviation {
            width: self.width.clone(),
            height: self.height.clone(),
            diameter: self.diameter.clone(),
            brand_name: self.brand_name.clone(),
            model_name: self.model_name.clone(),
            weight_index: self.weight_index.clone(),
            speed_index: self.speed_index.clone(),
            strengthened: self.strengthened.clone(),
            is_studded: self.is_studded,
            additional: self.additional.clone(),
        }
    }
}

/// Cells copied verbatim from the source row into the record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassThrough {
    pub season: String,
    pub remainder: String,
    pub price: String,
    pub country: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_default_is_car() {
        assert_eq!(Category::default(), Category::Car);
    }

    #[test]
    fn test_category_serializes_as_its_label() {
        for category in Category::ALL {
            let yaml = serde_yaml::to_string(&category).unwrap();
            assert_eq!(yaml.trim(), category.as_str());
        }
    }

    #[test]
    fn test_record_new_moves_fields_into_place() {
        let abbreviation = Abbreviation {
            width: "215".to_string(),
            height: "60".to_string(),
            diameter: "16".to_string(),
            weight_index: "95".to_string(),
            speed_index: "H".to_string(),
            is_studded: true,
            ..Default::default()
        };
        let pass_through = PassThrough {
            season: "Зима".to_string(),
            price: "4500".to_string(),
            ..Default::default()
        };
        let year = NaiveDate::from_ymd_opt(2017, 1, 1).unwrap();

        let record = TireRecord::new(Category::Car, abbreviation.clone(), pass_through, year);

        assert_eq!(record.season, "Зима");
        assert_eq!(record.price, "4500");
        assert_eq!(record.remainder, "");
        assert_eq!(record.abbreviation(), abbreviation);
        assert_eq!(record.production_year, year);
    }
}
