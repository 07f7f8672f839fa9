//! # IO Module
//!
//! Interface layer between the outside world and the domain logic. Translates
//! HTTP requests into domain commands, formats domain results as the shared
//! DTOs, and converts domain errors to appropriate HTTP status codes.

pub mod mappers;
pub mod rest;

pub use rest::{router, AppState};
