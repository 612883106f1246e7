use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{CreateProfileRequest, NewUserProfile, UpdatePreferencesRequest};
use crate::routes::{store_error, validation_error, AppState};

/// Configure profile routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/profiles", web::post().to(create_profile))
        .route("/profiles/{id}", web::get().to(get_profile))
        .route("/profiles/{id}", web::patch().to(update_preferences));
}

/// Create the profile of a signed-up user
///
/// POST /api/v1/profiles
///
/// Request body:
/// ```json
/// {
///   "id": "uuid",
///   "email": "string",
///   "name": "string",
///   "phone": "string",
///   "preferences": { "language": "en", "interests": [], "budget_range": "" }
/// }
/// ```
async fn create_profile(
    state: web::Data<AppState>,
    req: web::Json<CreateProfileRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let req = req.into_inner();
    let profile = NewUserProfile {
        id: req.id,
        email: req.email,
        name: req.name,
        phone: req.phone,
        preferences: req.preferences,
    };

    match state.catalog.supabase().create_profile(&profile).await {
        Ok(created) => {
            tracing::info!("Profile created for user {}", created.id);
            HttpResponse::Created().json(created)
        }
        Err(e) => store_error("Failed to create profile", e),
    }
}

/// GET /api/v1/profiles/{id}
async fn get_profile(state: web::Data<AppState>, path: web::Path<uuid::Uuid>) -> impl Responder {
    match state.catalog.supabase().get_profile(path.into_inner()).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => store_error("Failed to fetch profile", e),
    }
}

/// Replace a user's travel preferences
///
/// PATCH /api/v1/profiles/{id}
///
/// Request body:
/// ```json
/// { "preferences": { "language": "hi", "interests": ["nature"], "budget_range": "budget" } }
/// ```
async fn update_preferences(
    state: web::Data<AppState>,
    path: web::Path<uuid::Uuid>,
    req: web::Json<UpdatePreferencesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let user_id = path.into_inner();

    match state
        .catalog
        .supabase()
        .update_preferences(user_id, &req.preferences)
        .await
    {
        Ok(profile) => {
            tracing::info!("Preferences updated for user {}", user_id);
            HttpResponse::Ok().json(profile)
        }
        Err(e) => store_error("Failed to update preferences", e),
    }
}
