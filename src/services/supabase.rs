use crate::models::{
    Booking, BookingStatus, CulturalEvent, Destination, EventCategory, Guide, Itinerary,
    NewBooking, NewItinerary, NewReview, NewUserProfile, Review, TravelPreferences, UserProfile,
};
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with Supabase
#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: invalid API key or token")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Supabase REST (PostgREST) client
///
/// Handles all communication with the hosted database including:
/// - Fetching the destination catalog
/// - Guides, reviews and cultural events
/// - Creating and updating bookings
/// - User profiles and saved itineraries
pub struct SupabaseClient {
    base_url: String,
    api_key: String,
    client: Client,
    tables: SupabaseTables,
}

/// Table names in the Supabase project
#[derive(Debug, Clone)]
pub struct SupabaseTables {
    pub destinations: String,
    pub bookings: String,
    pub guides: String,
    pub reviews: String,
    pub cultural_events: String,
    pub user_profiles: String,
    pub itineraries: String,
}

impl Default for SupabaseTables {
    fn default() -> Self {
        Self {
            destinations: "destinations".to_string(),
            bookings: "bookings".to_string(),
            guides: "guides".to_string(),
            reviews: "reviews".to_string(),
            cultural_events: "cultural_events".to_string(),
            user_profiles: "user_profiles".to_string(),
            itineraries: "itineraries".to_string(),
        }
    }
}

impl SupabaseClient {
    /// Create a new Supabase client
    pub fn new(
        base_url: String,
        api_key: String,
        tables: SupabaseTables,
        timeout_secs: u64,
    ) -> Result<Self, SupabaseError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url,
            api_key,
            client,
            tables,
        })
    }

    /// Build a table URL with PostgREST query parameters
    fn table_url(&self, table: &str, params: &[(&str, String)]) -> String {
        let mut url = format!(
            "{}/rest/v1/{}",
            self.base_url.trim_end_matches('/'),
            table
        );

        for (i, (key, value)) in params.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }

        url
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", "application/json")
    }

    /// Run a request and parse the returned row array
    ///
    /// Rows that fail to parse are skipped with a warning.
    async fn fetch_rows<T>(&self, request: RequestBuilder, what: &str) -> Result<Vec<T>, SupabaseError>
    where
        T: DeserializeOwned,
    {
        let response = self.authorize(request).send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(SupabaseError::Unauthorized);
        }

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Failed to {}: {} - {}", what, status, body);
            return Err(SupabaseError::ApiError(format!("Failed to {}: {}", what, status)));
        }

        let json: Value = response.json().await?;

        let rows = json
            .as_array()
            .ok_or_else(|| SupabaseError::InvalidResponse("Expected an array of rows".into()))?;

        let parsed: Vec<T> = rows
            .iter()
            .filter_map(|row| match serde_json::from_value(row.clone()) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!("Skipping malformed row while trying to {}: {}", what, e);
                    None
                }
            })
            .collect();

        tracing::debug!("Fetched {} of {} rows to {}", parsed.len(), rows.len(), what);

        Ok(parsed)
    }

    async fn select<T>(
        &self,
        table: &str,
        params: &[(&str, String)],
        what: &str,
    ) -> Result<Vec<T>, SupabaseError>
    where
        T: DeserializeOwned,
    {
        let url = self.table_url(table, params);
        tracing::debug!("Selecting from: {}", url);
        self.fetch_rows(self.client.get(&url), what).await
    }

    /// Insert or update and return the single affected row
    async fn write_one<T, B>(
        &self,
        request: RequestBuilder,
        body: &B,
        what: &str,
    ) -> Result<T, SupabaseError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = request
            .header("Prefer", "return=representation")
            .json(body);

        self.fetch_rows(request, what)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| SupabaseError::NotFound(format!("No row returned to {}", what)))
    }

    /// Fetch the full destination catalog, best rated first
    pub async fn list_destinations(&self) -> Result<Vec<Destination>, SupabaseError> {
        self.select(
            &self.tables.destinations,
            &[
                ("select", "*".to_string()),
                ("order", "rating.desc".to_string()),
            ],
            "fetch destinations",
        )
        .await
    }

    /// Verified guides, best rated first, optionally limited to one specialization
    pub async fn verified_guides(
        &self,
        specialization: Option<&str>,
    ) -> Result<Vec<Guide>, SupabaseError> {
        let mut params = vec![
            ("select", "*".to_string()),
            ("verified", "eq.true".to_string()),
        ];
        if let Some(specialization) = specialization {
            params.push(("specializations", format!("cs.{{{}}}", array_element(specialization))));
        }
        params.push(("order", "rating.desc".to_string()));

        self.select(&self.tables.guides, &params, "fetch guides").await
    }

    /// Reviews of a destination, newest first
    pub async fn reviews_for_destination(
        &self,
        destination_id: &str,
    ) -> Result<Vec<Review>, SupabaseError> {
        self.select(
            &self.tables.reviews,
            &[
                ("select", "*".to_string()),
                ("destination_id", format!("eq.{}", destination_id)),
                ("order", "created_at.desc".to_string()),
            ],
            "fetch reviews",
        )
        .await
    }

    /// Insert a review and return the stored row
    pub async fn create_review(&self, review: &NewReview) -> Result<Review, SupabaseError> {
        let url = self.table_url(&self.tables.reviews, &[]);
        self.write_one(self.client.post(&url), review, "create review")
            .await
    }

    /// Cultural events on or after `now`, soonest first
    pub async fn upcoming_events(
        &self,
        now: DateTime<Utc>,
        category: Option<EventCategory>,
    ) -> Result<Vec<CulturalEvent>, SupabaseError> {
        let mut params = vec![
            ("select", "*".to_string()),
            (
                "event_date",
                format!("gte.{}", now.to_rfc3339_opts(SecondsFormat::Secs, true)),
            ),
        ];
        if let Some(category) = category {
            params.push(("category", format!("eq.{}", category.as_str())));
        }
        params.push(("order", "event_date.asc".to_string()));

        self.select(&self.tables.cultural_events, &params, "fetch events")
            .await
    }

    /// Insert a booking and return the stored row
    pub async fn create_booking(&self, booking: &NewBooking) -> Result<Booking, SupabaseError> {
        let url = self.table_url(&self.tables.bookings, &[]);
        let created: Booking = self
            .write_one(self.client.post(&url), booking, "create booking")
            .await?;

        tracing::debug!("Created booking {} for user {}", created.id, created.user_id);

        Ok(created)
    }

    /// Bookings of a user, newest first
    pub async fn user_bookings(&self, user_id: uuid::Uuid) -> Result<Vec<Booking>, SupabaseError> {
        self.select(
            &self.tables.bookings,
            &[
                ("select", "*".to_string()),
                ("user_id", format!("eq.{}", user_id)),
                ("order", "created_at.desc".to_string()),
            ],
            "fetch bookings",
        )
        .await
    }

    /// Change a booking's status and return the updated row
    pub async fn update_booking_status(
        &self,
        booking_id: uuid::Uuid,
        status: BookingStatus,
    ) -> Result<Booking, SupabaseError> {
        let url = self.table_url(
            &self.tables.bookings,
            &[("id", format!("eq.{}", booking_id))],
        );

        self.write_one(
            self.client.patch(&url),
            &serde_json::json!({ "status": status }),
            "update booking status",
        )
        .await
        .map_err(|e| match e {
            SupabaseError::NotFound(_) => {
                SupabaseError::NotFound(format!("Booking {} not found", booking_id))
            }
            other => other,
        })
    }

    /// Profile of one user
    pub async fn get_profile(&self, user_id: uuid::Uuid) -> Result<UserProfile, SupabaseError> {
        self.select::<UserProfile>(
            &self.tables.user_profiles,
            &[
                ("select", "*".to_string()),
                ("id", format!("eq.{}", user_id)),
            ],
            "fetch profile",
        )
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| SupabaseError::NotFound(format!("Profile {} not found", user_id)))
    }

    /// Insert a profile and return the stored row
    pub async fn create_profile(
        &self,
        profile: &NewUserProfile,
    ) -> Result<UserProfile, SupabaseError> {
        let url = self.table_url(&self.tables.user_profiles, &[]);
        self.write_one(self.client.post(&url), profile, "create profile")
            .await
    }

    /// Replace a user's travel preferences and return the updated profile
    pub async fn update_preferences(
        &self,
        user_id: uuid::Uuid,
        preferences: &TravelPreferences,
    ) -> Result<UserProfile, SupabaseError> {
        let url = self.table_url(
            &self.tables.user_profiles,
            &[("id", format!("eq.{}", user_id))],
        );

        self.write_one(
            self.client.patch(&url),
            &serde_json::json!({ "preferences": preferences }),
            "update preferences",
        )
        .await
        .map_err(|e| match e {
            SupabaseError::NotFound(_) => {
                SupabaseError::NotFound(format!("Profile {} not found", user_id))
            }
            other => other,
        })
    }

    /// Insert an itinerary and return the stored row
    pub async fn create_itinerary(
        &self,
        itinerary: &NewItinerary,
    ) -> Result<Itinerary, SupabaseError> {
        let url = self.table_url(&self.tables.itineraries, &[]);
        let created: Itinerary = self
            .write_one(self.client.post(&url), itinerary, "create itinerary")
            .await?;

        tracing::debug!("Created itinerary {} for user {}", created.id, created.user_id);

        Ok(created)
    }

    /// Itineraries of a user, newest first
    pub async fn user_itineraries(
        &self,
        user_id: uuid::Uuid,
    ) -> Result<Vec<Itinerary>, SupabaseError> {
        self.select(
            &self.tables.itineraries,
            &[
                ("select", "*".to_string()),
                ("user_id", format!("eq.{}", user_id)),
                ("order", "created_at.desc".to_string()),
            ],
            "fetch itineraries",
        )
        .await
    }
}

/// Quote one element of a PostgREST array literal such as `cs.{"a"}`
///
/// Backslashes and double quotes are escaped so the value stays a single
/// element whatever it contains.
fn array_element(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if c == '\\' || c == '"' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}
