use serde::{Deserialize, Serialize};

use crate::domain::models::settings::{DateFormat, WeightUnit};

/// Domain model representing a dog in the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dog {
    pub id: String,
    pub name: String,
    /// Weight as entered by the user, always positive
    pub weight: f64,
    pub weight_unit: WeightUnit,
    /// Birth date rendered in `date_format`
    pub birth_date: String,
    pub date_format: DateFormat,
    /// Reference to the dog's profile picture resource
    pub profile_picture: String,
}

impl Dog {
    /// Generate a unique ID for a dog
    pub fn generate_id(timestamp_millis: u64) -> String {
        format!("dog::{}", timestamp_millis)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DogValidationError {
    #[error("Dog name cannot be empty")]
    EmptyName,
    #[error("Dog name cannot exceed 100 characters")]
    NameTooLong,
    #[error("Dog weight must be positive")]
    NonPositiveWeight,
    #[error("Birth date does not match the selected date format")]
    InvalidBirthDate,
    #[error("Birth date cannot be in the future")]
    BirthDateInFuture,
}
