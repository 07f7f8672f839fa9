//! Mappers between shared DTOs and domain models.
//!
//! The REST layer speaks the `shared` crate's types; everything below it
//! speaks domain types. These converters are the only place the two meet.

use shared::{
    CreateDogRequest, DateFormat as SharedDateFormat, Dog as SharedDog, DogAgeResponse,
    DogListResponse, Settings as SharedSettings, Theme as SharedTheme, UpdateDogRequest,
    UpdateSettingsRequest, WeightUnit as SharedWeightUnit,
};

use crate::domain::commands::dogs::{CreateDogCommand, DogAgeResult, UpdateDogCommand};
use crate::domain::commands::settings::UpdateSettingsCommand;
use crate::domain::models::dog::Dog as DomainDog;
use crate::domain::models::settings::{
    DateFormat as DomainDateFormat, Settings as DomainSettings, Theme as DomainTheme,
    WeightUnit as DomainWeightUnit,
};
use crate::domain::weight;

/// Mapper to convert between shared Dog DTOs and domain Dog models.
pub struct DogMapper;

impl DogMapper {
    pub fn to_dto(domain: DomainDog) -> SharedDog {
        SharedDog {
            id: domain.id,
            name: domain.name,
            weight: domain.weight,
            weight_unit: EnumMapper::weight_unit_to_dto(domain.weight_unit),
            birth_date: domain.birth_date,
            date_format: EnumMapper::date_format_to_dto(domain.date_format),
            profile_picture: domain.profile_picture,
        }
    }

    pub fn to_list_dto(domain_dogs: Vec<DomainDog>) -> DogListResponse {
        DogListResponse {
            dogs: domain_dogs.into_iter().map(Self::to_dto).collect(),
        }
    }

    pub fn to_create_command(request: CreateDogRequest) -> CreateDogCommand {
        CreateDogCommand {
            name: request.name,
            weight: request.weight,
            weight_unit: EnumMapper::weight_unit_to_domain(request.weight_unit),
            birth_date: request.birth_date,
            date_format: EnumMapper::date_format_to_domain(request.date_format),
            profile_picture: request.profile_picture,
        }
    }

    pub fn to_update_command(dog_id: String, request: UpdateDogRequest) -> UpdateDogCommand {
        UpdateDogCommand {
            dog_id,
            name: request.name,
            weight: request.weight,
            weight_unit: request.weight_unit.map(EnumMapper::weight_unit_to_domain),
            birth_date: request.birth_date,
            date_format: request.date_format.map(EnumMapper::date_format_to_domain),
            profile_picture: request.profile_picture,
        }
    }

    pub fn to_age_dto(result: DogAgeResult) -> DogAgeResponse {
        DogAgeResponse {
            dog_id: result.dog.id,
            years: result.age.years,
            months: result.age.months,
            human_years: weight::formatted_to_two_decimals(result.age.human_years),
            display_weight: weight::formatted_to_string(result.dog.weight),
        }
    }
}

/// Mapper to convert between shared Settings DTOs and domain Settings models.
pub struct SettingsMapper;

impl SettingsMapper {
    pub fn to_dto(domain: DomainSettings) -> SharedSettings {
        SharedSettings {
            weight_unit: EnumMapper::weight_unit_to_dto(domain.weight_unit),
            date_format: EnumMapper::date_format_to_dto(domain.date_format),
            theme: EnumMapper::theme_to_dto(domain.theme),
        }
    }

    pub fn to_update_command(request: UpdateSettingsRequest) -> UpdateSettingsCommand {
        UpdateSettingsCommand {
            settings: DomainSettings {
                weight_unit: EnumMapper::weight_unit_to_domain(request.weight_unit),
                date_format: EnumMapper::date_format_to_domain(request.date_format),
                theme: EnumMapper::theme_to_domain(request.theme),
            },
        }
    }
}

/// Variant-by-variant conversions for the preference enums.
struct EnumMapper;

impl EnumMapper {
    fn weight_unit_to_domain(unit: SharedWeightUnit) -> DomainWeightUnit {
        match unit {
            SharedWeightUnit::Pounds => DomainWeightUnit::Pounds,
            SharedWeightUnit::Kilograms => DomainWeightUnit::Kilograms,
        }
    }

    fn weight_unit_to_dto(unit: DomainWeightUnit) -> SharedWeightUnit {
        match unit {
            DomainWeightUnit::Pounds => SharedWeightUnit::Pounds,
            DomainWeightUnit::Kilograms => SharedWeightUnit::Kilograms,
        }
    }

    fn date_format_to_domain(format: SharedDateFormat) -> DomainDateFormat {
        match format {
            SharedDateFormat::American => DomainDateFormat::American,
            SharedDateFormat::International => DomainDateFormat::International,
        }
    }

    fn date_format_to_dto(format: DomainDateFormat) -> SharedDateFormat {
        match format {
            DomainDateFormat::American => SharedDateFormat::American,
            DomainDateFormat::International => SharedDateFormat::International,
        }
    }

    fn theme_to_domain(theme: SharedTheme) -> DomainTheme {
        match theme {
            SharedTheme::System => DomainTheme::System,
            SharedTheme::Dark => DomainTheme::Dark,
            SharedTheme::Light => DomainTheme::Light,
        }
    }

    fn theme_to_dto(theme: DomainTheme) -> SharedTheme {
        match theme {
            DomainTheme::System => SharedTheme::System,
            DomainTheme::Dark => SharedTheme::Dark,
            DomainTheme::Light => SharedTheme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dog_round_trips_through_dto() {
        let domain = DomainDog {
            id: "dog::1".to_string(),
            name: "Mowgli".to_string(),
            weight: 65.0,
            weight_unit: DomainWeightUnit::Pounds,
            birth_date: "07/22/2019".to_string(),
            date_format: DomainDateFormat::American,
            profile_picture: "default".to_string(),
        };

        let dto = DogMapper::to_dto(domain.clone());
        assert_eq!(dto.id, domain.id);
        assert_eq!(dto.weight_unit, SharedWeightUnit::Pounds);
        assert_eq!(dto.birth_date, domain.birth_date);
    }

    #[test]
    fn test_settings_update_command_carries_all_fields() {
        let command = SettingsMapper::to_update_command(UpdateSettingsRequest {
            weight_unit: SharedWeightUnit::Kilograms,
            date_format: SharedDateFormat::International,
            theme: SharedTheme::Light,
        });

        assert_eq!(command.settings.weight_unit, DomainWeightUnit::Kilograms);
        assert_eq!(command.settings.date_format, DomainDateFormat::International);
        assert_eq!(command.settings.theme, DomainTheme::Light);
    }

    #[test]
    fn test_age_dto_rounds_and_formats() {
        use crate::domain::dog_age::DogAge;

        let result = DogAgeResult {
            dog: DomainDog {
                id: "dog::1".to_string(),
                name: "Mowgli".to_string(),
                weight: 85.0,
                weight_unit: DomainWeightUnit::Pounds,
                birth_date: "07/22/2019".to_string(),
                date_format: DomainDateFormat::American,
                profile_picture: "default".to_string(),
            },
            age: DogAge { years: 3, months: 2, human_years: 28.666666 },
        };

        let dto = DogMapper::to_age_dto(result);
        assert_eq!(dto.human_years, 28.67);
        assert_eq!(dto.display_weight, "85");
    }
}
