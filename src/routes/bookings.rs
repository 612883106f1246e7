use actix_web::{web, HttpResponse, Responder};
use std::str::FromStr;
use validator::Validate;

use crate::models::{
    BookingStatus, CreateBookingRequest, ErrorResponse, NewBooking, UpdateBookingStatusRequest,
    UserBookingsQuery,
};
use crate::routes::{store_error, validation_error, AppState};

/// Configure booking routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/bookings", web::post().to(create_booking))
        .route("/bookings", web::get().to(user_bookings))
        .route("/bookings/{id}/status", web::patch().to(update_status));
}

/// Create a booking
///
/// POST /api/v1/bookings
///
/// Request body:
/// ```json
/// {
///   "userId": "uuid",
///   "destinationId": "string",
///   "guideId": "string",
///   "visitDate": "2026-11-02",
///   "groupSize": 4,
///   "totalAmount": 2400.0,
///   "specialRequests": "string"
/// }
/// ```
async fn create_booking(
    state: web::Data<AppState>,
    req: web::Json<CreateBookingRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for booking request: {:?}", errors);
        return validation_error(errors);
    }

    let req = req.into_inner();
    let booking_date = chrono::Utc::now().date_naive();

    if req.visit_date < booking_date {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "Invalid visit date",
            "visitDate must not be in the past",
            400,
        ));
    }

    let new_booking = NewBooking {
        user_id: req.user_id,
        destination_id: req.destination_id,
        guide_id: req.guide_id,
        booking_date,
        visit_date: req.visit_date,
        group_size: req.group_size,
        total_amount: req.total_amount,
        status: BookingStatus::Pending,
        special_requests: req.special_requests,
    };

    match state.catalog.supabase().create_booking(&new_booking).await {
        Ok(booking) => {
            tracing::info!(
                "Booking {} created for destination {}",
                booking.id,
                booking.destination_id
            );
            HttpResponse::Created().json(booking)
        }
        Err(e) => store_error("Failed to create booking", e),
    }
}

/// Bookings of one user, newest first
///
/// GET /api/v1/bookings?userId={userId}
async fn user_bookings(
    state: web::Data<AppState>,
    query: web::Query<UserBookingsQuery>,
) -> impl Responder {
    match state.catalog.supabase().user_bookings(query.user_id).await {
        Ok(bookings) => HttpResponse::Ok().json(bookings),
        Err(e) => store_error("Failed to fetch bookings", e),
    }
}

/// Change a booking's status
///
/// PATCH /api/v1/bookings/{id}/status
///
/// Request body:
/// ```json
/// { "status": "pending|confirmed|completed|cancelled" }
/// ```
async fn update_status(
    state: web::Data<AppState>,
    path: web::Path<uuid::Uuid>,
    req: web::Json<UpdateBookingStatusRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let status = match BookingStatus::from_str(&req.status) {
        Ok(status) => status,
        Err(_) => {
            return HttpResponse::BadRequest().json(ErrorResponse::new(
                "Invalid booking status",
                "Status must be one of: pending, confirmed, completed, cancelled",
                400,
            ));
        }
    };

    let booking_id = path.into_inner();

    match state
        .catalog
        .supabase()
        .update_booking_status(booking_id, status)
        .await
    {
        Ok(booking) => {
            tracing::info!("Booking {} is now {}", booking_id, status.as_str());
            HttpResponse::Ok().json(booking)
        }
        Err(e) => store_error("Failed to update booking", e),
    }
}
