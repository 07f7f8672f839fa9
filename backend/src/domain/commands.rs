//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod dogs {
    use crate::domain::dog_age::DogAge;
    use crate::domain::models::dog::Dog as DomainDog;
    use crate::domain::models::settings::{DateFormat, WeightUnit};

    /// Input for recording a new dog.
    #[derive(Debug, Clone)]
    pub struct CreateDogCommand {
        pub name: String,
        pub weight: f64,
        pub weight_unit: WeightUnit,
        pub birth_date: String,
        pub date_format: DateFormat,
        pub profile_picture: String,
    }

    /// Input for updating an existing dog; `None` fields are left unchanged.
    #[derive(Debug, Clone, Default)]
    pub struct UpdateDogCommand {
        pub dog_id: String,
        pub name: Option<String>,
        pub weight: Option<f64>,
        pub weight_unit: Option<WeightUnit>,
        pub birth_date: Option<String>,
        pub date_format: Option<DateFormat>,
        pub profile_picture: Option<String>,
    }

    /// Result of creating a dog.
    #[derive(Debug, Clone)]
    pub struct CreateDogResult {
        pub dog: DomainDog,
    }

    /// Result of fetching a single dog.
    #[derive(Debug, Clone)]
    pub struct GetDogResult {
        pub dog: DomainDog,
    }

    /// Result of updating a dog.
    #[derive(Debug, Clone)]
    pub struct UpdateDogResult {
        pub dog: DomainDog,
    }

    /// Result of deleting a dog.
    #[derive(Debug, Clone)]
    pub struct DeleteDogResult {
        pub success_message: String,
    }

    /// Result of computing a dog's age.
    #[derive(Debug, Clone)]
    pub struct DogAgeResult {
        pub dog: DomainDog,
        pub age: DogAge,
    }
}

pub mod settings {
    use crate::domain::models::settings::Settings;

    /// Input for replacing the settings record.
    #[derive(Debug, Clone, Copy)]
    pub struct UpdateSettingsCommand {
        pub settings: Settings,
    }

    /// Result of replacing the settings record.
    #[derive(Debug, Clone, Copy)]
    pub struct UpdateSettingsResult {
        pub settings: Settings,
    }
}
