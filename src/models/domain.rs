use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};

/// Destination category as stored in the `destinations` table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Natural,
    Cultural,
    Religious,
    Adventure,
    Wildlife,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Natural,
        Category::Cultural,
        Category::Religious,
        Category::Adventure,
        Category::Wildlife,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Natural => "natural",
            Category::Cultural => "cultural",
            Category::Religious => "religious",
            Category::Adventure => "adventure",
            Category::Wildlife => "wildlife",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Exact, case-sensitive match on the stored values
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Easy,
    Moderate,
    Difficult,
}

/// A tourist destination
///
/// Only the identity, text, coordinate, category and rating fields take part in
/// querying. Everything else is carried through to clients untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub category: Category,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub difficulty_level: Option<DifficultyLevel>,
    #[serde(default)]
    pub best_time_to_visit: Option<String>,
    #[serde(default)]
    pub entry_fee: Option<f64>,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Destination {
    pub fn coordinates(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_geo_point"))]
pub struct GeoPoint {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Range checks let NaN through, so finiteness is checked separately
pub(crate) fn ensure_finite(value: Option<f64>) -> Result<(), ValidationError> {
    match value {
        Some(v) if !v.is_finite() => Err(ValidationError::new("not_finite")),
        _ => Ok(()),
    }
}

fn validate_geo_point(point: &GeoPoint) -> Result<(), ValidationError> {
    ensure_finite(Some(point.latitude))?;
    ensure_finite(Some(point.longitude))
}

/// Category selector of a destination query
///
/// Values that are neither `"all"` nor a known category are kept as
/// `Unrecognized` and select nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
    Unrecognized(String),
}

impl CategoryFilter {
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            return CategoryFilter::All;
        }
        match value.parse::<Category>() {
            Ok(category) => CategoryFilter::Only(category),
            Err(_) => CategoryFilter::Unrecognized(value.to_string()),
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        CategoryFilter::parse(&value)
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::All => "all".to_string(),
            CategoryFilter::Only(category) => category.as_str().to_string(),
            CategoryFilter::Unrecognized(raw) => raw,
        }
    }
}

/// Parameters of one search/filter invocation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryParameters {
    pub search_text: String,
    pub category: CategoryFilter,
    pub origin: Option<GeoPoint>,
    pub radius_km: Option<f64>,
}

impl QueryParameters {
    pub fn new(search_text: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            search_text: search_text.into(),
            category,
            origin: None,
            radius_km: None,
        }
    }

    pub fn with_origin(mut self, origin: Option<GeoPoint>) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_radius_km(mut self, radius_km: Option<f64>) -> Self {
        self.radius_km = radius_km;
        self
    }
}

/// A destination annotated with its distance from the query origin
#[derive(Debug, Clone, PartialEq)]
pub struct RankedDestination {
    pub destination: Destination,
    /// Unrounded great-circle distance; `None` when no origin was known
    pub distance_km: Option<f64>,
}

impl RankedDestination {
    /// Distance rounded to whole kilometers, for display
    pub fn display_distance_km(&self) -> Option<i64> {
        self.distance_km.map(crate::core::distance::round_km)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "completed" => Ok(BookingStatus::Completed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(format!("unknown booking status: {}", other)),
        }
    }
}

/// Stored booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: uuid::Uuid,
    pub user_id: uuid::Uuid,
    pub destination_id: String,
    #[serde(default)]
    pub guide_id: Option<String>,
    pub booking_date: NaiveDate,
    pub visit_date: NaiveDate,
    pub group_size: u32,
    pub total_amount: f64,
    pub status: BookingStatus,
    #[serde(default)]
    pub special_requests: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Booking row as inserted; the store assigns `id` and `created_at`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBooking {
    pub user_id: uuid::Uuid,
    pub destination_id: String,
    pub guide_id: Option<String>,
    pub booking_date: NaiveDate,
    pub visit_date: NaiveDate,
    pub group_size: u32,
    pub total_amount: f64,
    pub status: BookingStatus,
    pub special_requests: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub specializations: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub hourly_rate: f64,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub user_id: String,
    pub destination_id: String,
    #[serde(default)]
    pub guide_id: Option<String>,
    pub rating: f64,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Festival,
    CulturalShow,
    TribalArt,
    MusicDance,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Festival => "festival",
            EventCategory::CulturalShow => "cultural_show",
            EventCategory::TribalArt => "tribal_art",
            EventCategory::MusicDance => "music_dance",
        }
    }
}

impl FromStr for EventCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "festival" => Ok(EventCategory::Festival),
            "cultural_show" => Ok(EventCategory::CulturalShow),
            "tribal_art" => Ok(EventCategory::TribalArt),
            "music_dance" => Ok(EventCategory::MusicDance),
            other => Err(format!("unknown event category: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CulturalEvent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub location: String,
    pub event_date: DateTime<Utc>,
    pub category: EventCategory,
    #[serde(default)]
    pub ticket_price: Option<f64>,
    #[serde(default)]
    pub contact_info: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Review row as inserted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    pub user_id: uuid::Uuid,
    pub destination_id: String,
    pub guide_id: Option<String>,
    pub rating: f64,
    pub comment: String,
    pub images: Option<Vec<String>>,
}

/// Travel preferences stored on a user profile and copied onto itineraries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct TravelPreferences {
    #[validate(length(max = 32))]
    #[serde(default)]
    pub language: String,
    #[validate(length(max = 20))]
    #[serde(default)]
    pub interests: Vec<String>,
    #[validate(length(max = 32))]
    #[serde(default)]
    pub budget_range: String,
}

/// Row of the `user_profiles` table; `id` is the auth user id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: uuid::Uuid,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub preferences: TravelPreferences,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUserProfile {
    pub id: uuid::Uuid,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub preferences: TravelPreferences,
}

/// Stored trip plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub id: uuid::Uuid,
    pub user_id: uuid::Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub duration_days: u32,
    #[serde(default)]
    pub destinations: Vec<String>,
    #[serde(default)]
    pub preferences: TravelPreferences,
    #[serde(default)]
    pub ai_generated: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Itinerary row as inserted; the store assigns `id` and `created_at`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItinerary {
    pub user_id: uuid::Uuid,
    pub title: String,
    pub description: String,
    pub duration_days: u32,
    pub destinations: Vec<String>,
    pub preferences: TravelPreferences,
    pub ai_generated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_filter_parse() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("religious"),
            CategoryFilter::Only(Category::Religious)
        );
        // Case-sensitive: "Natural" is not a stored value
        assert_eq!(
            CategoryFilter::parse("Natural"),
            CategoryFilter::Unrecognized("Natural".to_string())
        );
    }

    #[test]
    fn test_category_filter_serde() {
        let filter: CategoryFilter = serde_json::from_str("\"wildlife\"").unwrap();
        assert_eq!(filter, CategoryFilter::Only(Category::Wildlife));

        let json = serde_json::to_string(&CategoryFilter::All).unwrap();
        assert_eq!(json, "\"all\"");
    }

    #[test]
    fn test_destination_deserializes_store_row() {
        let row = serde_json::json!({
            "id": "1",
            "name": "Hundru Falls",
            "description": "98m waterfall on the Subarnarekha",
            "location": "Ranchi",
            "latitude": 23.4241,
            "longitude": 85.5950,
            "category": "natural",
            "rating": 4.8,
            "difficulty_level": "moderate",
            "facilities": ["parking"]
        });

        let destination: Destination = serde_json::from_value(row).unwrap();
        assert_eq!(destination.category, Category::Natural);
        assert_eq!(destination.difficulty_level, Some(DifficultyLevel::Moderate));
        assert!(destination.images.is_empty());
        assert_eq!(destination.entry_fee, None);
    }

    #[test]
    fn test_booking_status_from_str() {
        assert_eq!("Confirmed".parse::<BookingStatus>(), Ok(BookingStatus::Confirmed));
        assert!("refunded".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn test_geo_point_rejects_nan() {
        assert!(GeoPoint::new(23.3441, 85.3096).validate().is_ok());
        assert!(GeoPoint::new(f64::NAN, 85.3096).validate().is_err());
        assert!(GeoPoint::new(23.3441, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_profile_without_preferences() {
        let row = serde_json::json!({
            "id": "7b7e2a52-3d8b-4f8e-9a57-1f0c1f0b4c11",
            "email": "asha@example.com",
            "name": "Asha"
        });

        let profile: UserProfile = serde_json::from_value(row).unwrap();
        assert_eq!(profile.preferences, TravelPreferences::default());
        assert!(profile.phone.is_none());
    }

    #[test]
    fn test_event_category_serde() {
        let json = serde_json::to_string(&EventCategory::CulturalShow).unwrap();
        assert_eq!(json, "\"cultural_show\"");
    }
}
