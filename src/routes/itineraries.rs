use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::draft_itinerary;
use crate::models::{CreateItineraryRequest, UserItinerariesQuery};
use crate::routes::{store_error, validation_error, AppState};

/// Configure itinerary routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/itineraries", web::post().to(create_itinerary))
        .route("/itineraries", web::get().to(user_itineraries));
}

/// Generate and store a trip plan
///
/// POST /api/v1/itineraries
///
/// Request body:
/// ```json
/// {
///   "userId": "uuid",
///   "destinations": ["1", "6"],
///   "durationDays": 3,
///   "preferences": { "language": "en", "interests": ["culture"], "budget_range": "mid" }
/// }
/// ```
async fn create_itinerary(
    state: web::Data<AppState>,
    req: web::Json<CreateItineraryRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for itinerary request: {:?}", errors);
        return validation_error(errors);
    }

    let req = req.into_inner();
    let plan = draft_itinerary(req.user_id, req.destinations, req.duration_days, req.preferences);

    match state.catalog.supabase().create_itinerary(&plan).await {
        Ok(itinerary) => {
            tracing::info!(
                "Itinerary {} ({} days) saved for user {}",
                itinerary.id,
                itinerary.duration_days,
                itinerary.user_id
            );
            HttpResponse::Created().json(itinerary)
        }
        Err(e) => store_error("Failed to create itinerary", e),
    }
}

/// GET /api/v1/itineraries?userId={userId}
async fn user_itineraries(
    state: web::Data<AppState>,
    query: web::Query<UserItinerariesQuery>,
) -> impl Responder {
    match state.catalog.supabase().user_itineraries(query.user_id).await {
        Ok(itineraries) => HttpResponse::Ok().json(itineraries),
        Err(e) => store_error("Failed to fetch itineraries", e),
    }
}
