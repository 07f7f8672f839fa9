//! Dog age calculations.
//!
//! Converts a dog's birth date into calendar age and a human-equivalent age.
//! The human-equivalent scale counts 15 human years for the first dog year,
//! 9 for the second, and 4 for each year after that, prorated within the
//! current year.

use chrono::{Datelike, NaiveDate};

use crate::domain::models::dog::DogValidationError;
use crate::domain::models::settings::DateFormat;

/// A dog's age split into calendar components plus the human-equivalent total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DogAge {
    /// Whole calendar years since birth
    pub years: u32,
    /// Whole months past the last full year
    pub months: u32,
    /// Age in human-equivalent years, unrounded
    pub human_years: f64,
}

/// Parse a birth date string under the given date format.
pub fn parse_birth_date(
    birth_date: &str,
    format: DateFormat,
) -> Result<NaiveDate, DogValidationError> {
    NaiveDate::parse_from_str(birth_date, format.pattern())
        .map_err(|_| DogValidationError::InvalidBirthDate)
}

/// Compute a dog's age as of `today`.
///
/// `birth` must not be after `today`; callers validate that at entry time.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> DogAge {
    let (years, months) = calendar_age(birth, today);
    let fractional_years = years as f64 + months as f64 / 12.0;

    DogAge {
        years,
        months,
        human_years: human_equivalent_years(fractional_years),
    }
}

/// Whole years and leftover whole months between two dates.
fn calendar_age(birth: NaiveDate, today: NaiveDate) -> (u32, u32) {
    let mut years = today.year() - birth.year();
    let mut months = today.month() as i32 - birth.month() as i32;

    if today.day() < birth.day() {
        months -= 1;
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    (years.max(0) as u32, months as u32)
}

/// Map a dog age in years to human-equivalent years.
fn human_equivalent_years(dog_years: f64) -> f64 {
    if dog_years <= 1.0 {
        dog_years * 15.0
    } else if dog_years <= 2.0 {
        15.0 + (dog_years - 1.0) * 9.0
    } else {
        24.0 + (dog_years - 2.0) * 4.0
    }
}
