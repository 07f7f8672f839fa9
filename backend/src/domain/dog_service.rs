use anyhow::Result;
use chrono::{Local, Utc};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::domain::commands::dogs::{
    CreateDogCommand, CreateDogResult, DeleteDogResult, DogAgeResult, GetDogResult,
    UpdateDogCommand, UpdateDogResult,
};
use crate::domain::dog_age;
use crate::domain::models::dog::{Dog as DomainDog, DogValidationError};
use crate::domain::models::settings::DateFormat;
use crate::storage::traits::DogStore;

/// Service for managing the recorded dogs
#[derive(Clone)]
pub struct DogService {
    dog_store: Arc<dyn DogStore>,
}

impl DogService {
    /// Create a new DogService
    pub fn new(dog_store: Arc<dyn DogStore>) -> Self {
        Self { dog_store }
    }

    /// Subscribe to the full list of dogs
    pub fn dogs(&self) -> watch::Receiver<Vec<DomainDog>> {
        self.dog_store.stream_all()
    }

    /// Record a new dog
    pub async fn create_dog(&self, command: CreateDogCommand) -> Result<CreateDogResult> {
        info!("Creating dog: name={}, birth_date={}", command.name, command.birth_date);

        validate_dog_fields(&command.name, command.weight, &command.birth_date, command.date_format)?;

        let dog = DomainDog {
            id: DomainDog::generate_id(Utc::now().timestamp_millis() as u64),
            name: command.name.trim().to_string(),
            weight: command.weight,
            weight_unit: command.weight_unit,
            birth_date: command.birth_date,
            date_format: command.date_format,
            profile_picture: command.profile_picture,
        };

        self.dog_store.insert_if_absent(&dog).await?;

        info!("Created dog: {} with ID: {}", dog.name, dog.id);

        Ok(CreateDogResult { dog })
    }

    /// Get a dog by ID; a miss propagates as a not-found failure
    pub async fn get_dog(&self, dog_id: &str) -> Result<GetDogResult> {
        let dog = self.dog_store.find_by_id(dog_id).await?;

        Ok(GetDogResult { dog })
    }

    /// Update an existing dog
    pub async fn update_dog(&self, command: UpdateDogCommand) -> Result<UpdateDogResult> {
        info!("Updating dog: {}", command.dog_id);

        let mut dog = self.dog_store.find_by_id(&command.dog_id).await?;

        if let Some(name) = command.name {
            dog.name = name.trim().to_string();
        }
        if let Some(weight) = command.weight {
            dog.weight = weight;
        }
        if let Some(weight_unit) = command.weight_unit {
            dog.weight_unit = weight_unit;
        }
        if let Some(birth_date) = command.birth_date {
            dog.birth_date = birth_date;
        }
        if let Some(date_format) = command.date_format {
            dog.date_format = date_format;
        }
        if let Some(profile_picture) = command.profile_picture {
            dog.profile_picture = profile_picture;
        }

        validate_dog_fields(&dog.name, dog.weight, &dog.birth_date, dog.date_format)?;

        self.dog_store.update(&dog).await?;

        info!("Updated dog: {} with ID: {}", dog.name, dog.id);

        Ok(UpdateDogResult { dog })
    }

    /// Delete a dog
    pub async fn delete_dog(&self, dog_id: &str) -> Result<DeleteDogResult> {
        info!("Deleting dog: {}", dog_id);

        let dog = self.dog_store.find_by_id(dog_id).await?;
        self.dog_store.delete(dog_id).await?;

        info!("Deleted dog: {} with ID: {}", dog.name, dog.id);

        Ok(DeleteDogResult {
            success_message: format!("Dog '{}' deleted successfully", dog.name),
        })
    }

    /// Compute a dog's current age from its stored birth date
    pub async fn dog_age(&self, dog_id: &str) -> Result<DogAgeResult> {
        let dog = self.dog_store.find_by_id(dog_id).await?;

        let birth = dog_age::parse_birth_date(&dog.birth_date, dog.date_format)?;
        let age = dog_age::age_on(birth, Local::now().date_naive());

        Ok(DogAgeResult { dog, age })
    }
}

/// Validate the fields every stored dog must satisfy
fn validate_dog_fields(
    name: &str,
    weight: f64,
    birth_date: &str,
    date_format: DateFormat,
) -> Result<(), DogValidationError> {
    if name.trim().is_empty() {
        return Err(DogValidationError::EmptyName);
    }
    if name.len() > 100 {
        return Err(DogValidationError::NameTooLong);
    }
    if weight <= 0.0 {
        warn!("Rejected non-positive weight: {}", weight);
        return Err(DogValidationError::NonPositiveWeight);
    }

    let birth = dog_age::parse_birth_date(birth_date, date_format)?;
    if birth > Local::now().date_naive() {
        return Err(DogValidationError::BirthDateInFuture);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::settings::WeightUnit;
    use crate::storage::sqlite::connection::DbConnection;
    use crate::storage::sqlite::dog_repository::DogRepository;
    use crate::storage::traits::StoreError;

    async fn setup_test() -> DogService {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let repo = DogRepository::new(db).await.expect("Failed to create repository");
        DogService::new(Arc::new(repo))
    }

    fn create_command(name: &str) -> CreateDogCommand {
        CreateDogCommand {
            name: name.to_string(),
            weight: 65.0,
            weight_unit: WeightUnit::Pounds,
            birth_date: "07/22/2019".to_string(),
            date_format: DateFormat::American,
            profile_picture: "default".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_dog() {
        let service = setup_test().await;

        let created = service.create_dog(create_command("Mowgli")).await.unwrap();
        let fetched = service.get_dog(&created.dog.id).await.unwrap();

        assert_eq!(fetched.dog, created.dog);
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let service = setup_test().await;

        let result = service.create_dog(create_command("   ")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_create_rejects_non_positive_weight() {
        let service = setup_test().await;

        let mut command = create_command("Mowgli");
        command.weight = 0.0;
        assert!(service.create_dog(command).await.is_err());

        let mut command = create_command("Mowgli");
        command.weight = -5.0;
        assert!(service.create_dog(command).await.is_err());
    }

    #[tokio::test]
    async fn test_create_rejects_birth_date_format_mismatch() {
        let service = setup_test().await;

        let mut command = create_command("Mowgli");
        // Day-first string under a month-first format
        command.birth_date = "22/07/2019".to_string();
        assert!(service.create_dog(command).await.is_err());
    }

    #[tokio::test]
    async fn test_get_missing_dog_propagates_not_found() {
        let service = setup_test().await;

        let err = service.get_dog("dog::missing").await.unwrap_err();
        assert!(err.downcast_ref::<StoreError>().is_some());
    }

    #[tokio::test]
    async fn test_update_changes_only_provided_fields() {
        let service = setup_test().await;
        let created = service.create_dog(create_command("Mowgli")).await.unwrap();

        let updated = service
            .update_dog(UpdateDogCommand {
                dog_id: created.dog.id.clone(),
                weight: Some(70.5),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.dog.weight, 70.5);
        assert_eq!(updated.dog.name, "Mowgli");
        assert_eq!(updated.dog.birth_date, "07/22/2019");
    }

    #[tokio::test]
    async fn test_delete_then_get_fails() {
        let service = setup_test().await;
        let created = service.create_dog(create_command("Mowgli")).await.unwrap();

        service.delete_dog(&created.dog.id).await.unwrap();

        assert!(service.get_dog(&created.dog.id).await.is_err());
    }

    #[tokio::test]
    async fn test_dogs_stream_reflects_creates() {
        let service = setup_test().await;
        let rx = service.dogs();

        service.create_dog(create_command("Mowgli")).await.unwrap();
        service.create_dog(create_command("Apollo")).await.unwrap();

        assert_eq!(rx.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_dog_age_uses_stored_format() {
        let service = setup_test().await;

        let mut command = create_command("Mowgli");
        command.birth_date = "22/07/2019".to_string();
        command.date_format = DateFormat::International;
        let created = service.create_dog(command).await.unwrap();

        let result = service.dog_age(&created.dog.id).await.unwrap();
        // Born 2019: past the second year, so the human-equivalent age is on
        // the +4-per-year segment.
        assert!(result.age.years >= 3);
        assert!(result.age.human_years > 24.0);
    }
}
