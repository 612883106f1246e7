use actix_web::{web, HttpResponse, Responder};
use std::str::FromStr;
use validator::Validate;

use crate::core::query_destinations;
use crate::models::{
    CreateReviewRequest, DestinationView, ErrorResponse, EventCategory, EventsQuery, GuidesQuery,
    HealthResponse, NewReview, QueryDestinationsRequest, QueryDestinationsResponse,
    QueryParameters, SearchDestinationsQuery,
};
use crate::routes::{store_error, validation_error, AppState};

/// Configure catalog routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/destinations", web::get().to(list_destinations))
        .route("/destinations/query", web::post().to(query))
        .route("/destinations/search", web::get().to(search))
        .route("/destinations/refresh", web::post().to(refresh))
        .route("/destinations/{id}/reviews", web::get().to(reviews))
        .route("/destinations/{id}/reviews", web::post().to(create_review))
        .route("/guides", web::get().to(guides))
        .route("/events/upcoming", web::get().to(upcoming_events));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Full catalog snapshot, best rated first
///
/// GET /api/v1/destinations
async fn list_destinations(state: web::Data<AppState>) -> impl Responder {
    let snapshot = state.catalog.snapshot().await;

    if !snapshot.available {
        return HttpResponse::BadGateway().json(ErrorResponse::new(
            "Catalog unavailable",
            "Destinations could not be loaded",
            502,
        ));
    }

    HttpResponse::Ok().json(snapshot.destinations)
}

/// Run a query against the current snapshot
async fn run_query(state: &AppState, params: QueryParameters) -> QueryDestinationsResponse {
    let snapshot = state.catalog.snapshot().await;

    let destinations: Vec<DestinationView> = query_destinations(&snapshot.destinations, &params)
        .into_iter()
        .map(DestinationView::from)
        .collect();

    tracing::debug!(
        "Query {:?} (category {:?}, origin {}) matched {} of {} destinations",
        params.search_text,
        params.category,
        params.origin.is_some(),
        destinations.len(),
        snapshot.destinations.len()
    );

    QueryDestinationsResponse {
        total_results: destinations.len(),
        destinations,
        origin_available: params.origin.is_some(),
        catalog_available: snapshot.available,
    }
}

/// Search and filter endpoint
///
/// POST /api/v1/destinations/query
///
/// Request body:
/// ```json
/// {
///   "searchText": "falls",
///   "category": "natural",
///   "origin": { "latitude": 23.3441, "longitude": 85.3096 },
///   "radiusKm": 50
/// }
/// ```
async fn query(
    state: web::Data<AppState>,
    req: web::Json<QueryDestinationsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for destination query: {:?}", errors);
        return validation_error(errors);
    }

    let params = QueryParameters::from(req.into_inner());
    HttpResponse::Ok().json(run_query(&state, params).await)
}

/// Query-string variant of the search endpoint
///
/// GET /api/v1/destinations/search?q=falls&category=natural&lat=23.34&lon=85.31&radiusKm=50
async fn search(
    state: web::Data<AppState>,
    query: web::Query<SearchDestinationsQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_error(errors);
    }

    let params = QueryParameters::from(query.into_inner());
    HttpResponse::Ok().json(run_query(&state, params).await)
}

/// Invalidate the cached catalog
///
/// POST /api/v1/destinations/refresh
async fn refresh(state: web::Data<AppState>) -> impl Responder {
    match state.catalog.refresh().await {
        Ok(()) => {
            tracing::info!("Destination cache invalidated");
            HttpResponse::NoContent().finish()
        }
        Err(e) => {
            tracing::error!("Failed to invalidate destination cache: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "Failed to invalidate cache",
                e.to_string(),
                500,
            ))
        }
    }
}

/// GET /api/v1/destinations/{id}/reviews
async fn reviews(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let destination_id = path.into_inner();

    match state
        .catalog
        .supabase()
        .reviews_for_destination(&destination_id)
        .await
    {
        Ok(reviews) => HttpResponse::Ok().json(reviews),
        Err(e) => store_error("Failed to fetch reviews", e),
    }
}

/// Review a destination
///
/// POST /api/v1/destinations/{id}/reviews
///
/// Request body:
/// ```json
/// {
///   "userId": "uuid",
///   "guideId": "string",
///   "rating": 4.5,
///   "comment": "string",
///   "images": ["url"]
/// }
/// ```
async fn create_review(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<CreateReviewRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for review: {:?}", errors);
        return validation_error(errors);
    }

    let req = req.into_inner();
    let review = NewReview {
        user_id: req.user_id,
        destination_id: path.into_inner(),
        guide_id: req.guide_id,
        rating: req.rating,
        comment: req.comment,
        images: req.images,
    };

    match state.catalog.supabase().create_review(&review).await {
        Ok(created) => {
            tracing::info!("Review {} added to destination {}", created.id, created.destination_id);
            HttpResponse::Created().json(created)
        }
        Err(e) => store_error("Failed to create review", e),
    }
}

/// GET /api/v1/guides?specialization=trekking
async fn guides(state: web::Data<AppState>, query: web::Query<GuidesQuery>) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_error(errors);
    }

    let specialization = query.normalized_specialization();

    match state.catalog.guides(specialization.as_deref()).await {
        Ok(guides) => HttpResponse::Ok().json(guides),
        Err(e) => store_error("Failed to fetch guides", e),
    }
}

/// GET /api/v1/events/upcoming?category=festival
async fn upcoming_events(
    state: web::Data<AppState>,
    query: web::Query<EventsQuery>,
) -> impl Responder {
    let category = match query.category.as_deref() {
        None => None,
        Some(raw) => match EventCategory::from_str(raw) {
            Ok(category) => Some(category),
            Err(message) => {
                return HttpResponse::BadRequest().json(ErrorResponse::new(
                    "Invalid event category",
                    message,
                    400,
                ));
            }
        },
    };

    match state
        .catalog
        .supabase()
        .upcoming_events(chrono::Utc::now(), category)
        .await
    {
        Ok(events) => HttpResponse::Ok().json(events),
        Err(e) => store_error("Failed to fetch events", e),
    }
}
