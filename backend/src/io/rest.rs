use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use shared::{CreateDogRequest, OnboardingResponse, UpdateDogRequest, UpdateSettingsRequest};
use tracing::info;

use crate::domain::models::dog::DogValidationError;
use crate::domain::{DogService, OnboardingService, SettingsService};
use crate::io::mappers::{DogMapper, SettingsMapper};
use crate::storage::traits::StoreError;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub dog_service: DogService,
    pub settings_service: SettingsService,
    pub onboarding_service: OnboardingService,
}

impl AppState {
    /// Create new application state with the given services
    pub fn new(
        dog_service: DogService,
        settings_service: SettingsService,
        onboarding_service: OnboardingService,
    ) -> Self {
        Self { dog_service, settings_service, onboarding_service }
    }
}

/// Build the API router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/dogs", get(list_dogs).post(create_dog))
        .route("/dogs/:dog_id", get(get_dog).put(update_dog).delete(delete_dog))
        .route("/dogs/:dog_id/age", get(dog_age))
        .route("/settings", get(get_settings).put(update_settings))
        .route("/onboarding", get(get_onboarding).post(set_onboarding))
        .with_state(state)
}

/// Translate a domain failure into an HTTP response
fn error_response(error: anyhow::Error, context: &str) -> Response {
    if error.downcast_ref::<StoreError>().is_some() {
        (StatusCode::NOT_FOUND, error.to_string()).into_response()
    } else if error.downcast_ref::<DogValidationError>().is_some() {
        (StatusCode::BAD_REQUEST, error.to_string()).into_response()
    } else {
        tracing::error!("{}: {:?}", context, error);
        (StatusCode::INTERNAL_SERVER_ERROR, context.to_string()).into_response()
    }
}

/// Axum handler function for GET /api/dogs
async fn list_dogs(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/dogs");

    let dogs = state.dog_service.dogs().borrow().clone();
    (StatusCode::OK, Json(DogMapper::to_list_dto(dogs))).into_response()
}

/// Axum handler function for POST /api/dogs
async fn create_dog(
    State(state): State<AppState>,
    Json(request): Json<CreateDogRequest>,
) -> impl IntoResponse {
    info!("POST /api/dogs - name: {}", request.name);

    match state.dog_service.create_dog(DogMapper::to_create_command(request)).await {
        Ok(result) => (StatusCode::CREATED, Json(DogMapper::to_dto(result.dog))).into_response(),
        Err(e) => error_response(e, "Error creating dog"),
    }
}

/// Axum handler function for GET /api/dogs/:dog_id
async fn get_dog(
    State(state): State<AppState>,
    Path(dog_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/dogs/{}", dog_id);

    match state.dog_service.get_dog(&dog_id).await {
        Ok(result) => (StatusCode::OK, Json(DogMapper::to_dto(result.dog))).into_response(),
        Err(e) => error_response(e, "Error retrieving dog"),
    }
}

/// Axum handler function for PUT /api/dogs/:dog_id
async fn update_dog(
    State(state): State<AppState>,
    Path(dog_id): Path<String>,
    Json(request): Json<UpdateDogRequest>,
) -> impl IntoResponse {
    info!("PUT /api/dogs/{}", dog_id);

    match state.dog_service.update_dog(DogMapper::to_update_command(dog_id, request)).await {
        Ok(result) => (StatusCode::OK, Json(DogMapper::to_dto(result.dog))).into_response(),
        Err(e) => error_response(e, "Error updating dog"),
    }
}

/// Axum handler function for DELETE /api/dogs/:dog_id
async fn delete_dog(
    State(state): State<AppState>,
    Path(dog_id): Path<String>,
) -> impl IntoResponse {
    info!("DELETE /api/dogs/{}", dog_id);

    match state.dog_service.delete_dog(&dog_id).await {
        Ok(result) => (StatusCode::OK, result.success_message).into_response(),
        Err(e) => error_response(e, "Error deleting dog"),
    }
}

/// Axum handler function for GET /api/dogs/:dog_id/age
async fn dog_age(
    State(state): State<AppState>,
    Path(dog_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/dogs/{}/age", dog_id);

    match state.dog_service.dog_age(&dog_id).await {
        Ok(result) => (StatusCode::OK, Json(DogMapper::to_age_dto(result))).into_response(),
        Err(e) => error_response(e, "Error computing dog age"),
    }
}

/// Axum handler function for GET /api/settings
async fn get_settings(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/settings");

    let settings = *state.settings_service.settings().borrow();
    match settings {
        Some(settings) => (StatusCode::OK, Json(SettingsMapper::to_dto(settings))).into_response(),
        None => (StatusCode::NOT_FOUND, "Settings not initialized").into_response(),
    }
}

/// Axum handler function for PUT /api/settings
async fn update_settings(
    State(state): State<AppState>,
    Json(request): Json<UpdateSettingsRequest>,
) -> impl IntoResponse {
    info!("PUT /api/settings - request: {:?}", request);

    let command = SettingsMapper::to_update_command(request);
    match state.settings_service.update_settings(command).await {
        Ok(result) => (StatusCode::OK, Json(SettingsMapper::to_dto(result.settings))).into_response(),
        Err(e) => error_response(e, "Error updating settings"),
    }
}

/// Axum handler function for GET /api/onboarding
async fn get_onboarding(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/onboarding");

    let onboarded = *state.onboarding_service.user_onboarded().borrow();
    (StatusCode::OK, Json(OnboardingResponse { onboarded })).into_response()
}

/// Axum handler function for POST /api/onboarding
async fn set_onboarding(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/onboarding");

    state.onboarding_service.set_user_onboarded();
    (StatusCode::OK, Json(OnboardingResponse { onboarded: true })).into_response()
}
