// Route exports
pub mod assistant;
pub mod bookings;
pub mod destinations;
pub mod itineraries;
pub mod profiles;

use actix_web::{web, HttpResponse};
use validator::ValidationErrors;

use crate::core::Assistant;
use crate::models::ErrorResponse;
use crate::services::{Catalog, SupabaseError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub assistant: Assistant,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(destinations::configure)
            .configure(bookings::configure)
            .configure(itineraries::configure)
            .configure(profiles::configure)
            .configure(assistant::configure),
    );
}

pub(crate) fn validation_error(errors: ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(
        "Validation failed",
        errors.to_string(),
        400,
    ))
}

/// Map a store failure to a JSON error response
pub(crate) fn store_error(context: &str, err: SupabaseError) -> HttpResponse {
    match err {
        SupabaseError::NotFound(message) => {
            HttpResponse::NotFound().json(ErrorResponse::new(context, message, 404))
        }
        other => {
            tracing::error!("{}: {}", context, other);
            HttpResponse::BadGateway().json(ErrorResponse::new(context, other.to_string(), 502))
        }
    }
}
