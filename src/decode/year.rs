//! Production year normalization
//!
//! The year cell holds anything from `17` to `2/22/17` to `ACBA-2017`. Only
//! the last two characters are read and always taken as 20xx.

use chrono::NaiveDate;

/// Date stored when the year cell can't be read
pub fn epoch_default() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// Jan 1 of `2000 + <last two digits>`, or `1970-01-01`
pub fn normalize_year(text: &str) -> NaiveDate {
    let mut tail = text.chars().rev();
    let (Some(units), Some(tens)) = (tail.next(), tail.next()) else {
        return epoch_default();
    };

    // to_digit(10) only accepts ASCII 0-9
    match (tens.to_digit(10), units.to_digit(10)) {
        (Some(tens), Some(units)) => {
            let year = 2000 + (tens * 10 + units) as i32;
            NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or_else(epoch_default)
        }
        _ => epoch_default(),
    }
}
