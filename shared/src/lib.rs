use serde::{Deserialize, Serialize};

/// Unit system used to display a weight value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    Pounds,
    Kilograms,
}

/// Calendar date rendering convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFormat {
    /// MM/DD/YYYY
    American,
    /// DD/MM/YYYY
    International,
}

/// Application color theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    System,
    Dark,
    Light,
}

/// Public representation of a dog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dog {
    /// Dog ID in format: "dog::epoch_millis"
    pub id: String,
    pub name: String,
    /// Weight as entered by the user (always positive)
    pub weight: f64,
    /// Unit the weight was entered in
    pub weight_unit: WeightUnit,
    /// Birth date rendered in the dog's own date format
    pub birth_date: String,
    /// Format `birth_date` is rendered in
    pub date_format: DateFormat,
    /// Reference to the dog's profile picture resource
    pub profile_picture: String,
}

/// Public representation of the user preference record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub weight_unit: WeightUnit,
    pub date_format: DateFormat,
    pub theme: Theme,
}

/// Request payload for creating a dog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDogRequest {
    pub name: String,
    pub weight: f64,
    pub weight_unit: WeightUnit,
    pub birth_date: String,
    pub date_format: DateFormat,
    pub profile_picture: String,
}

/// Request payload for updating a dog. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateDogRequest {
    pub name: Option<String>,
    pub weight: Option<f64>,
    pub weight_unit: Option<WeightUnit>,
    pub birth_date: Option<String>,
    pub date_format: Option<DateFormat>,
    pub profile_picture: Option<String>,
}

/// Response payload listing all dogs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DogListResponse {
    pub dogs: Vec<Dog>,
}

/// Response payload for a dog's computed age.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DogAgeResponse {
    pub dog_id: String,
    /// Whole calendar years since birth
    pub years: u32,
    /// Whole months past the last full year
    pub months: u32,
    /// Age in human-equivalent years, rounded to two decimals
    pub human_years: f64,
    /// Weight rendered for display ("85", "35.2")
    pub display_weight: String,
}

/// Request payload for replacing the settings record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSettingsRequest {
    pub weight_unit: WeightUnit,
    pub date_format: DateFormat,
    pub theme: Theme,
}

/// Response payload for the onboarding flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingResponse {
    pub onboarded: bool,
}
