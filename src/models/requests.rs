use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::{
    ensure_finite, CategoryFilter, GeoPoint, QueryParameters, TravelPreferences,
};

/// Request body for the destination query endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_query_radius"))]
pub struct QueryDestinationsRequest {
    #[serde(default)]
    pub search_text: String,
    #[serde(default)]
    pub category: CategoryFilter,
    #[validate(nested)]
    #[serde(default)]
    pub origin: Option<GeoPoint>,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub radius_km: Option<f64>,
}

fn validate_query_radius(req: &QueryDestinationsRequest) -> Result<(), ValidationError> {
    ensure_finite(req.radius_km)
}

impl From<QueryDestinationsRequest> for QueryParameters {
    fn from(req: QueryDestinationsRequest) -> Self {
        QueryParameters::new(req.search_text, req.category)
            .with_origin(req.origin)
            .with_radius_km(req.radius_km)
    }
}

/// Query-string form of a destination query
///
/// `GET /destinations/search?q=falls&category=natural&lat=23.3&lon=85.3&radiusKm=50`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_search_numbers"))]
pub struct SearchDestinationsQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub category: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: Option<f64>,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: Option<f64>,
    #[validate(range(min = 0.0))]
    pub radius_km: Option<f64>,
}

fn validate_search_numbers(query: &SearchDestinationsQuery) -> Result<(), ValidationError> {
    ensure_finite(query.lat)?;
    ensure_finite(query.lon)?;
    ensure_finite(query.radius_km)
}

impl SearchDestinationsQuery {
    /// An origin exists only when both coordinates were supplied
    pub fn origin(&self) -> Option<GeoPoint> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
            _ => None,
        }
    }
}

impl From<SearchDestinationsQuery> for QueryParameters {
    fn from(query: SearchDestinationsQuery) -> Self {
        let origin = query.origin();
        let category = query
            .category
            .as_deref()
            .map(CategoryFilter::parse)
            .unwrap_or_default();

        QueryParameters::new(query.q, category)
            .with_origin(origin)
            .with_radius_km(query.radius_km)
    }
}

/// Request to create a booking
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub user_id: uuid::Uuid,
    #[validate(length(min = 1))]
    pub destination_id: String,
    #[serde(default)]
    pub guide_id: Option<String>,
    pub visit_date: NaiveDate,
    #[validate(range(min = 1, max = 50))]
    pub group_size: u32,
    #[validate(range(min = 0.0))]
    pub total_amount: f64,
    #[validate(length(max = 1000))]
    #[serde(default)]
    pub special_requests: Option<String>,
}

/// Request to change a booking's status
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateBookingStatusRequest {
    #[validate(length(min = 1))]
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBookingsQuery {
    pub user_id: uuid::Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GuidesQuery {
    #[validate(length(max = 50))]
    #[serde(default)]
    pub specialization: Option<String>,
}

impl GuidesQuery {
    /// Specializations are stored lowercase; blank means no filter
    pub fn normalized_specialization(&self) -> Option<String> {
        self.specialization
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsQuery {
    #[serde(default)]
    pub category: Option<String>,
}

/// Review of a destination; the destination id comes from the path
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub user_id: uuid::Uuid,
    #[serde(default)]
    pub guide_id: Option<String>,
    #[validate(range(min = 1.0, max = 5.0))]
    pub rating: f64,
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub comment: String,
    #[validate(length(max = 10))]
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

/// Request to generate and store a trip plan
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateItineraryRequest {
    pub user_id: uuid::Uuid,
    #[validate(length(min = 1, max = 20))]
    pub destinations: Vec<String>,
    #[validate(range(min = 1, max = 30))]
    pub duration_days: u32,
    #[validate(nested)]
    #[serde(default)]
    pub preferences: TravelPreferences,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserItinerariesQuery {
    pub user_id: uuid::Uuid,
}

/// Request to create the profile of a signed-up user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    pub id: uuid::Uuid,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 20))]
    #[serde(default)]
    pub phone: Option<String>,
    #[validate(nested)]
    #[serde(default)]
    pub preferences: TravelPreferences,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePreferencesRequest {
    #[validate(nested)]
    pub preferences: TravelPreferences,
}

/// Message sent to the assistant
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AssistantRequest {
    #[validate(length(min = 1, max = 2000))]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::Category;

    #[test]
    fn test_query_request_defaults() {
        let req: QueryDestinationsRequest = serde_json::from_str("{}").unwrap();
        let params = QueryParameters::from(req);

        assert_eq!(params.search_text, "");
        assert_eq!(params.category, CategoryFilter::All);
        assert!(params.origin.is_none());
        assert!(params.radius_km.is_none());
    }

    #[test]
    fn test_query_request_rejects_out_of_range_origin() {
        let req: QueryDestinationsRequest = serde_json::from_value(serde_json::json!({
            "origin": { "latitude": 123.0, "longitude": 85.3 }
        }))
        .unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_query_request_rejects_negative_radius() {
        let req: QueryDestinationsRequest = serde_json::from_value(serde_json::json!({
            "origin": { "latitude": 23.3, "longitude": 85.3 },
            "radiusKm": -5.0
        }))
        .unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_search_query_needs_both_coordinates() {
        let query = SearchDestinationsQuery {
            q: "falls".to_string(),
            category: Some("natural".to_string()),
            lat: Some(23.3441),
            lon: None,
            radius_km: Some(50.0),
        };

        let params = QueryParameters::from(query);
        assert!(params.origin.is_none());
        assert_eq!(params.category, CategoryFilter::Only(Category::Natural));
    }

    #[test]
    fn test_search_query_rejects_non_finite_numbers() {
        let query = SearchDestinationsQuery {
            q: String::new(),
            category: None,
            lat: Some(23.3441),
            lon: Some(85.3096),
            radius_km: Some(f64::NAN),
        };
        assert!(query.validate().is_err());

        let query = SearchDestinationsQuery {
            lat: Some(f64::NAN),
            radius_km: None,
            ..query
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_query_request_rejects_nan_radius() {
        let req = QueryDestinationsRequest {
            search_text: String::new(),
            category: CategoryFilter::All,
            origin: Some(GeoPoint::new(23.3441, 85.3096)),
            radius_km: Some(f64::NAN),
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_guides_query_normalization() {
        let query = GuidesQuery {
            specialization: Some("  Trekking ".to_string()),
        };
        assert_eq!(query.normalized_specialization().as_deref(), Some("trekking"));

        let blank = GuidesQuery {
            specialization: Some("   ".to_string()),
        };
        assert_eq!(blank.normalized_specialization(), None);

        let long = GuidesQuery {
            specialization: Some("x".repeat(51)),
        };
        assert!(long.validate().is_err());
    }

    #[test]
    fn test_review_rating_range() {
        let req: CreateReviewRequest = serde_json::from_value(serde_json::json!({
            "userId": "7b7e2a52-3d8b-4f8e-9a57-1f0c1f0b4c11",
            "rating": 6.0,
            "comment": "Too crowded at noon"
        }))
        .unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_itinerary_request_limits() {
        let req: CreateItineraryRequest = serde_json::from_value(serde_json::json!({
            "userId": "7b7e2a52-3d8b-4f8e-9a57-1f0c1f0b4c11",
            "destinations": [],
            "durationDays": 3
        }))
        .unwrap();
        assert!(req.validate().is_err());

        let req = CreateItineraryRequest {
            destinations: vec!["1".to_string()],
            duration_days: 45,
            ..req
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_profile_request_email() {
        let req: CreateProfileRequest = serde_json::from_value(serde_json::json!({
            "id": "7b7e2a52-3d8b-4f8e-9a57-1f0c1f0b4c11",
            "email": "not-an-email",
            "name": "Asha"
        }))
        .unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_booking_request_group_size() {
        let req: CreateBookingRequest = serde_json::from_value(serde_json::json!({
            "userId": "7b7e2a52-3d8b-4f8e-9a57-1f0c1f0b4c11",
            "destinationId": "1",
            "visitDate": "2026-11-02",
            "groupSize": 0,
            "totalAmount": 1200.0
        }))
        .unwrap();

        assert!(req.validate().is_err());
    }
}
