use crate::models::{CategoryFilter, Destination, RankedDestination};

/// Check whether a destination belongs to the selected category
///
/// An unrecognized filter value selects nothing.
#[inline]
pub fn matches_category(destination: &Destination, filter: &CategoryFilter) -> bool {
    match filter {
        CategoryFilter::All => true,
        CategoryFilter::Only(category) => destination.category == *category,
        CategoryFilter::Unrecognized(_) => false,
    }
}

/// Normalize free-text search input: trimmed and lowercased
///
/// Returns `None` when nothing is left, meaning "match everything".
pub fn normalize_search_text(search_text: &str) -> Option<String> {
    let trimmed = search_text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Case-insensitive substring match over name, description and location
///
/// `needle` must already be normalized with [`normalize_search_text`].
#[inline]
pub fn matches_text(destination: &Destination, needle: Option<&str>) -> bool {
    let Some(needle) = needle else {
        return true;
    };

    [
        &destination.name,
        &destination.description,
        &destination.location,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Check a ranked destination against an optional search radius
///
/// Without a computed distance (no origin) every destination passes.
#[inline]
pub fn within_radius(ranked: &RankedDestination, radius_km: Option<f64>) -> bool {
    match (ranked.distance_km, radius_km) {
        (Some(distance_km), Some(radius_km)) => distance_km <= radius_km,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn create_test_destination(name: &str, description: &str, location: &str) -> Destination {
        Destination {
            id: "test".to_string(),
            name: name.to_string(),
            description: description.to_string(),
            location: location.to_string(),
            latitude: 23.4241,
            longitude: 85.5950,
            category: Category::Natural,
            rating: 4.8,
            images: vec![],
            difficulty_level: None,
            best_time_to_visit: None,
            entry_fee: None,
            facilities: vec![],
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_category_all() {
        let destination = create_test_destination("Hundru Falls", "", "Ranchi");
        assert!(matches_category(&destination, &CategoryFilter::All));
    }

    #[test]
    fn test_category_exact() {
        let destination = create_test_destination("Hundru Falls", "", "Ranchi");
        assert!(matches_category(&destination, &CategoryFilter::Only(Category::Natural)));
        assert!(!matches_category(&destination, &CategoryFilter::Only(Category::Religious)));
    }

    #[test]
    fn test_category_unrecognized_matches_nothing() {
        let destination = create_test_destination("Hundru Falls", "", "Ranchi");
        let filter = CategoryFilter::Unrecognized("beaches".to_string());
        assert!(!matches_category(&destination, &filter));
    }

    #[test]
    fn test_normalize_search_text() {
        assert_eq!(normalize_search_text("  Falls "), Some("falls".to_string()));
        assert_eq!(normalize_search_text("   "), None);
        assert_eq!(normalize_search_text(""), None);
    }

    #[test]
    fn test_text_substring_in_each_field() {
        let destination = create_test_destination(
            "Hundru Falls",
            "A waterfall on the Subarnarekha river",
            "Ranchi District",
        );

        assert!(matches_text(&destination, Some("fall")));
        assert!(matches_text(&destination, Some("subarnarekha")));
        assert!(matches_text(&destination, Some("ranchi dis")));
        assert!(!matches_text(&destination, Some("temple")));
    }

    #[test]
    fn test_text_empty_matches_everything() {
        let destination = create_test_destination("Hundru Falls", "", "Ranchi");
        assert!(matches_text(&destination, None));
    }

    #[test]
    fn test_within_radius() {
        let ranked = RankedDestination {
            destination: create_test_destination("Hundru Falls", "", "Ranchi"),
            distance_km: Some(30.46),
        };

        assert!(within_radius(&ranked, Some(50.0)));
        assert!(!within_radius(&ranked, Some(30.0)));
        assert!(within_radius(&ranked, None));
    }

    #[test]
    fn test_within_radius_without_origin() {
        let ranked = RankedDestination {
            destination: create_test_destination("Hundru Falls", "", "Ranchi"),
            distance_km: None,
        };

        assert!(within_radius(&ranked, Some(1.0)));
    }
}
