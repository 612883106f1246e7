use std::cmp::Ordering;

use crate::core::{
    distance::haversine_distance,
    filters::{matches_category, matches_text, normalize_search_text, within_radius},
};
use crate::models::{Destination, GeoPoint, QueryParameters, RankedDestination};

/// Attach a distance from `origin` to every destination
///
/// Input order is preserved. Without an origin every distance is `None` and
/// nothing is computed.
pub fn annotate_distances(
    destinations: &[Destination],
    origin: Option<GeoPoint>,
) -> Vec<RankedDestination> {
    destinations
        .iter()
        .map(|destination| annotate(destination, origin))
        .collect()
}

#[inline]
fn annotate(destination: &Destination, origin: Option<GeoPoint>) -> RankedDestination {
    RankedDestination {
        distance_km: origin.map(|origin| haversine_distance(origin, destination.coordinates())),
        destination: destination.clone(),
    }
}

/// Reduce a destination collection to the matches of `params`, in display order
///
/// # Pipeline Stages
/// 1. Category filter
/// 2. Text filter (trimmed, case-insensitive substring over name, description, location)
/// 3. Distance annotation
/// 4. Radius filter (only with both an origin and a radius)
/// 5. Ordering: nearest first when an origin is known, otherwise best rated first
pub fn query_destinations(
    all: &[Destination],
    params: &QueryParameters,
) -> Vec<RankedDestination> {
    let needle = normalize_search_text(&params.search_text);

    let mut results: Vec<RankedDestination> = all
        .iter()
        // Stage 1 & 2: category AND text
        .filter(|destination| matches_category(destination, &params.category))
        .filter(|destination| matches_text(destination, needle.as_deref()))
        // Stage 3: distances for the survivors only
        .map(|destination| annotate(destination, params.origin))
        // Stage 4: radius
        .filter(|ranked| within_radius(ranked, params.radius_km))
        .collect();

    // Stage 5: stable sort so equal keys keep input order
    if params.origin.is_some() {
        results.sort_by(compare_by_proximity);
    } else {
        results.sort_by(compare_by_rating);
    }

    results
}

/// Nearest first, then higher rating, then id
fn compare_by_proximity(a: &RankedDestination, b: &RankedDestination) -> Ordering {
    let a_km = a.distance_km.unwrap_or(f64::INFINITY);
    let b_km = b.distance_km.unwrap_or(f64::INFINITY);

    a_km.total_cmp(&b_km)
        .then_with(|| b.destination.rating.total_cmp(&a.destination.rating))
        .then_with(|| a.destination.id.cmp(&b.destination.id))
}

/// Higher rating first, then id
fn compare_by_rating(a: &RankedDestination, b: &RankedDestination) -> Ordering {
    b.destination
        .rating
        .total_cmp(&a.destination.rating)
        .then_with(|| a.destination.id.cmp(&b.destination.id))
}
