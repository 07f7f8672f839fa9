//! # PawCalc Backend
//!
//! Core of the PawCalc application: record dogs with their birth dates and
//! weights, compute ages in human-equivalent years, and manage the user's
//! display preferences. Domain services sit on top of a SQLite storage
//! layer; reads are push-based streams, writes suspend until the persistent
//! store acknowledges.

use anyhow::Result;
use std::sync::Arc;

pub mod domain;
pub mod io;
pub mod storage;

use domain::{DogService, OnboardingService, OnboardingSource, SettingsService};
use storage::sqlite::{DogRepository, SettingsRepository};
use storage::{CachedSettingsSource, DbConnection, DogStore, SettingsStore};

/// Main backend struct that wires up all services.
///
/// This is the composition root: every service and source is constructed
/// here explicitly and handed to its consumers.
pub struct Backend {
    pub dog_service: DogService,
    pub settings_service: SettingsService,
    pub onboarding_service: OnboardingService,
}

impl Backend {
    /// Create a new backend instance with all services
    pub async fn new(db: DbConnection) -> Result<Self> {
        let dog_store: Arc<dyn DogStore> = Arc::new(DogRepository::new(db.clone()).await?);
        let settings_store: Arc<dyn SettingsStore> =
            Arc::new(SettingsRepository::new(db.clone()).await?);

        let settings_source = Arc::new(CachedSettingsSource::new(settings_store));

        let dog_service = DogService::new(dog_store);
        let settings_service = SettingsService::new(settings_source);
        let onboarding_service = OnboardingService::new(Arc::new(OnboardingSource::new()));

        Ok(Backend { dog_service, settings_service, onboarding_service })
    }

    /// Application state for the REST layer
    pub fn app_state(&self) -> io::AppState {
        io::AppState::new(
            self.dog_service.clone(),
            self.settings_service.clone(),
            self.onboarding_service.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::dogs::CreateDogCommand;
    use crate::domain::commands::settings::UpdateSettingsCommand;
    use crate::domain::models::settings::{DateFormat, Settings, Theme, WeightUnit};

    async fn setup_test() -> Backend {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        Backend::new(db).await.expect("Failed to create backend")
    }

    #[tokio::test]
    async fn test_backend_wires_all_services() {
        let backend = setup_test().await;

        // Settings come up with the seeded defaults
        assert_eq!(
            *backend.settings_service.settings().borrow(),
            Some(Settings::default())
        );

        // Dogs start empty, onboarding starts false
        assert!(backend.dog_service.dogs().borrow().is_empty());
        assert!(!*backend.onboarding_service.user_onboarded().borrow());
    }

    #[tokio::test]
    async fn test_full_flow_across_services() {
        let backend = setup_test().await;

        backend.onboarding_service.set_user_onboarded();

        backend
            .settings_service
            .update_settings(UpdateSettingsCommand {
                settings: Settings {
                    weight_unit: WeightUnit::Kilograms,
                    date_format: DateFormat::International,
                    theme: Theme::Dark,
                },
            })
            .await
            .unwrap();

        let created = backend
            .dog_service
            .create_dog(CreateDogCommand {
                name: "Mowgli".to_string(),
                weight: 29.5,
                weight_unit: WeightUnit::Kilograms,
                birth_date: "22/07/2019".to_string(),
                date_format: DateFormat::International,
                profile_picture: "default".to_string(),
            })
            .await
            .unwrap();

        assert!(*backend.onboarding_service.user_onboarded().borrow());
        assert_eq!(
            backend.settings_service.settings().borrow().unwrap().theme,
            Theme::Dark
        );
        assert_eq!(backend.dog_service.dogs().borrow().len(), 1);

        let age = backend.dog_service.dog_age(&created.dog.id).await.unwrap();
        assert!(age.age.years >= 3);
    }
}
