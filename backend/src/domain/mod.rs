//! # Domain Module
//!
//! Contains all business logic for the application.
//!
//! This module encapsulates the core business rules, entities, and services
//! that define how dogs and user preferences are modeled and managed. It
//! operates independently of any specific UI framework or storage mechanism.
//!
//! ## Module Organization
//!
//! - **dog_service**: Dog CRUD operations and input validation
//! - **settings_service**: Facade over the cached settings source
//! - **onboarding_service**: In-memory onboarding flag
//! - **dog_age**: Birth-date parsing and human-equivalent age math
//! - **weight**: Display formatting for weight values

pub mod commands;
pub mod dog_age;
pub mod dog_service;
pub mod models;
pub mod onboarding_service;
pub mod settings_service;
pub mod weight;

pub use dog_service::DogService;
pub use onboarding_service::{OnboardingService, OnboardingSource};
pub use settings_service::SettingsService;
