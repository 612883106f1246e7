use crate::models::{NewItinerary, TravelPreferences};

const GENERATED_DESCRIPTION: &str =
    "AI-generated personalized itinerary based on your preferences";

/// Build the generated trip plan for a user
///
/// Pure: the plan is titled after its length and carries the chosen
/// destinations and the user's preferences unchanged.
pub fn draft_itinerary(
    user_id: uuid::Uuid,
    destinations: Vec<String>,
    duration_days: u32,
    preferences: TravelPreferences,
) -> NewItinerary {
    NewItinerary {
        user_id,
        title: format!("{}-Day Jharkhand Adventure", duration_days),
        description: GENERATED_DESCRIPTION.to_string(),
        duration_days,
        destinations,
        preferences,
        ai_generated: true,
    }
}
