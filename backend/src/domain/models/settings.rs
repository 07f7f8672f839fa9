use serde::{Deserialize, Serialize};

/// Raised when a persisted preference index has no matching variant.
/// A failed lookup means the stored row is corrupt; there is no default
/// substitution.
#[derive(Debug, thiserror::Error)]
#[error("no {kind} variant for index {index}")]
pub struct UnknownIndex {
    pub kind: &'static str,
    pub index: i64,
}

/// Unit system a weight is displayed in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WeightUnit {
    Pounds,
    Kilograms,
}

impl WeightUnit {
    /// Convert to the stable index used for persistence
    pub fn to_index(self) -> i64 {
        match self {
            WeightUnit::Pounds => 0,
            WeightUnit::Kilograms => 1,
        }
    }

    /// Reconstruct from a persisted index
    pub fn from_index(index: i64) -> Result<Self, UnknownIndex> {
        match index {
            0 => Ok(WeightUnit::Pounds),
            1 => Ok(WeightUnit::Kilograms),
            _ => Err(UnknownIndex { kind: "weight unit", index }),
        }
    }
}

/// Calendar date rendering convention.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DateFormat {
    /// MM/DD/YYYY
    American,
    /// DD/MM/YYYY
    International,
}

impl DateFormat {
    /// Convert to the stable index used for persistence
    pub fn to_index(self) -> i64 {
        match self {
            DateFormat::American => 0,
            DateFormat::International => 1,
        }
    }

    /// Reconstruct from a persisted index
    pub fn from_index(index: i64) -> Result<Self, UnknownIndex> {
        match index {
            0 => Ok(DateFormat::American),
            1 => Ok(DateFormat::International),
            _ => Err(UnknownIndex { kind: "date format", index }),
        }
    }

    /// chrono pattern for parsing and rendering dates in this format
    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::American => "%m/%d/%Y",
            DateFormat::International => "%d/%m/%Y",
        }
    }
}

/// Application color theme selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Theme {
    System,
    Dark,
    Light,
}

impl Theme {
    /// Convert to the stable index used for persistence
    pub fn to_index(self) -> i64 {
        match self {
            Theme::System => 0,
            Theme::Dark => 1,
            Theme::Light => 2,
        }
    }

    /// Reconstruct from a persisted index
    pub fn from_index(index: i64) -> Result<Self, UnknownIndex> {
        match index {
            0 => Ok(Theme::System),
            1 => Ok(Theme::Dark),
            2 => Ok(Theme::Light),
            _ => Err(UnknownIndex { kind: "theme", index }),
        }
    }
}

/// Domain model for the user preference record.
///
/// Exactly one logical settings record exists per installation; the storage
/// layer keeps it under a fixed key and every write replaces the whole row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub weight_unit: WeightUnit,
    pub date_format: DateFormat,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            weight_unit: WeightUnit::Pounds,
            date_format: DateFormat::American,
            theme: Theme::System,
        }
    }
}
