// Core algorithm exports
pub mod assistant;
pub mod distance;
pub mod filters;
pub mod itinerary;
pub mod query;

pub use assistant::{Assistant, Rule};
pub use distance::{haversine_distance, round_km};
pub use filters::{matches_category, matches_text, normalize_search_text, within_radius};
pub use itinerary::draft_itinerary;
pub use query::{annotate_distances, query_destinations};
