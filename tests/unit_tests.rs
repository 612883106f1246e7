// Unit tests for the destination query engine

use yatra::core::{
    distance::{haversine_distance, round_km},
    query::{annotate_distances, query_destinations},
};
use yatra::models::{Category, CategoryFilter, Destination, GeoPoint, QueryParameters};

const RANCHI: GeoPoint = GeoPoint::new(23.3441, 85.3096);

fn create_destination(
    id: &str,
    name: &str,
    lat: f64,
    lon: f64,
    category: Category,
    rating: f64,
) -> Destination {
    Destination {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
        location: String::new(),
        latitude: lat,
        longitude: lon,
        category,
        rating,
        images: vec![],
        difficulty_level: None,
        best_time_to_visit: None,
        entry_fee: None,
        facilities: vec![],
        created_at: None,
        updated_at: None,
    }
}

fn sample_destinations() -> Vec<Destination> {
    vec![
        create_destination("1", "Hundru Falls", 23.4241, 85.5950, Category::Natural, 4.8),
        create_destination("2", "Baidyanath Dham", 24.4833, 86.7, Category::Religious, 4.5),
    ]
}

fn catalog() -> Vec<Destination> {
    let mut destinations = sample_destinations();
    destinations[0].description = "98 meter waterfall on the Subarnarekha".to_string();
    destinations[0].location = "Ranchi".to_string();
    destinations[1].description = "One of the twelve Jyotirlingas".to_string();
    destinations[1].location = "Deoghar".to_string();

    let mut more = vec![
        create_destination("3", "Jonha Falls", 23.3417, 85.6086, Category::Natural, 4.4),
        create_destination("4", "Betla National Park", 23.8870, 84.1900, Category::Wildlife, 4.6),
        create_destination("5", "Patratu Valley", 23.6300, 85.2800, Category::Adventure, 4.6),
        create_destination("6", "Tribal Research Institute", 23.3700, 85.3300, Category::Cultural, 4.1),
        create_destination("7", "Dassam Falls", 23.1458, 85.4633, Category::Natural, 4.4),
        create_destination("8", "Parasnath Hill", 23.9626, 86.1285, Category::Religious, 4.7),
    ];
    more[1].description = "Tigers, elephants and the Palamu fort".to_string();
    more[1].location = "Latehar".to_string();
    more[3].description = "Museum of Jharkhand's tribal heritage".to_string();
    more[3].location = "Ranchi".to_string();

    destinations.extend(more);
    destinations
}

fn all_params() -> Vec<QueryParameters> {
    let texts = ["", "falls", "  RANCHI ", "temple", "a"];
    let categories = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Natural),
        CategoryFilter::Only(Category::Religious),
        CategoryFilter::Unrecognized("beach".to_string()),
    ];
    let origins = [None, Some(RANCHI), Some(GeoPoint::new(24.0, 86.0))];
    let radii = [None, Some(40.0), Some(150.0)];

    let mut params = Vec::new();
    for text in texts {
        for category in &categories {
            for origin in origins {
                for radius in radii {
                    params.push(
                        QueryParameters::new(text, category.clone())
                            .with_origin(origin)
                            .with_radius_km(radius),
                    );
                }
            }
        }
    }
    params
}

#[test]
fn test_haversine_distance_zero() {
    assert!(haversine_distance(RANCHI, RANCHI).abs() < 1e-9);
}

#[test]
fn test_haversine_symmetry() {
    let destinations = catalog();
    for a in &destinations {
        for b in &destinations {
            let there = haversine_distance(a.coordinates(), b.coordinates());
            let back = haversine_distance(b.coordinates(), a.coordinates());
            assert!((there - back).abs() < 1e-9);
            assert!(there >= 0.0);
        }
    }
}

#[test]
fn test_annotated_distances_round_for_display() {
    let ranked = annotate_distances(&sample_destinations(), Some(RANCHI));

    assert_eq!(ranked[0].display_distance_km(), Some(30));
    assert_eq!(ranked[1].display_distance_km(), Some(190));
    assert_eq!(round_km(ranked[1].distance_km.unwrap()), 190);
}

#[test]
fn test_idempotence() {
    let destinations = catalog();
    for params in all_params() {
        let first = query_destinations(&destinations, &params);
        let second = query_destinations(&destinations, &params);
        assert_eq!(first, second);
    }
}

#[test]
fn test_result_is_subset_without_duplicates() {
    let destinations = catalog();
    for params in all_params() {
        let result = query_destinations(&destinations, &params);

        let mut ids: Vec<&str> = result.iter().map(|r| r.destination.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), result.len(), "duplicate results for {:?}", params);

        for ranked in &result {
            assert!(destinations.contains(&ranked.destination));
        }
    }
}

#[test]
fn test_category_exactness() {
    let destinations = catalog();
    for params in all_params() {
        let result = query_destinations(&destinations, &params);
        match &params.category {
            CategoryFilter::All => {}
            CategoryFilter::Only(category) => {
                assert!(result.iter().all(|r| r.destination.category == *category));
            }
            CategoryFilter::Unrecognized(_) => assert!(result.is_empty()),
        }
    }
}

#[test]
fn test_text_substring_property() {
    let destinations = catalog();
    for params in all_params() {
        let needle = params.search_text.trim().to_lowercase();
        if needle.is_empty() {
            continue;
        }

        for ranked in query_destinations(&destinations, &params) {
            let d = &ranked.destination;
            assert!(
                d.name.to_lowercase().contains(&needle)
                    || d.description.to_lowercase().contains(&needle)
                    || d.location.to_lowercase().contains(&needle),
                "{} does not contain {:?}",
                d.name,
                needle
            );
        }
    }
}

#[test]
fn test_radius_property() {
    let destinations = catalog();
    for params in all_params() {
        let (Some(_), Some(radius_km)) = (params.origin, params.radius_km) else {
            continue;
        };

        for ranked in query_destinations(&destinations, &params) {
            assert!(ranked.distance_km.unwrap() <= radius_km);
        }
    }
}

#[test]
fn test_proximity_ordering() {
    let destinations = catalog();
    for params in all_params() {
        if params.origin.is_none() {
            continue;
        }

        let result = query_destinations(&destinations, &params);
        for pair in result.windows(2) {
            let a = pair[0].distance_km.unwrap();
            let b = pair[1].distance_km.unwrap();
            assert!(a <= b, "results not sorted by distance");
        }
    }
}

#[test]
fn test_rating_ordering_without_origin() {
    let destinations = catalog();
    let result = query_destinations(&destinations, &QueryParameters::default());

    assert_eq!(result.len(), destinations.len());
    for pair in result.windows(2) {
        let (a, b) = (&pair[0].destination, &pair[1].destination);
        assert!(a.rating > b.rating || (a.rating == b.rating && a.id < b.id));
    }
    assert!(result.iter().all(|r| r.distance_km.is_none()));
}

#[test]
fn test_scenario_nearest_first() {
    let params = QueryParameters::default().with_origin(Some(RANCHI));

    let result = query_destinations(&sample_destinations(), &params);

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].destination.name, "Hundru Falls");
    assert_eq!(result[1].destination.name, "Baidyanath Dham");
    assert!((result[0].distance_km.unwrap() - 30.4565).abs() < 0.01);
    assert!((result[1].distance_km.unwrap() - 189.7896).abs() < 0.01);
}

#[test]
fn test_scenario_category_religious() {
    let params = QueryParameters::new("", CategoryFilter::parse("religious"))
        .with_origin(Some(RANCHI));

    let result = query_destinations(&sample_destinations(), &params);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].destination.name, "Baidyanath Dham");
}

#[test]
fn test_scenario_search_falls() {
    let params = QueryParameters::new("falls", CategoryFilter::All).with_origin(Some(RANCHI));

    let result = query_destinations(&sample_destinations(), &params);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].destination.name, "Hundru Falls");
}

#[test]
fn test_scenario_no_origin_orders_by_rating() {
    let mut destinations = sample_destinations();
    destinations.reverse();

    let result = query_destinations(&destinations, &QueryParameters::default());

    let names: Vec<&str> = result.iter().map(|r| r.destination.name.as_str()).collect();
    assert_eq!(names, vec!["Hundru Falls", "Baidyanath Dham"]);
    assert!(result.iter().all(|r| r.distance_km.is_none()));
}

#[test]
fn test_scenario_radius_50() {
    let params = QueryParameters::default()
        .with_origin(Some(RANCHI))
        .with_radius_km(Some(50.0));

    let result = query_destinations(&sample_destinations(), &params);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].destination.name, "Hundru Falls");
}

#[test]
fn test_scenario_category_without_matches() {
    let params = QueryParameters::new("", CategoryFilter::parse("adventure"))
        .with_origin(Some(RANCHI));

    assert!(query_destinations(&sample_destinations(), &params).is_empty());
}

#[test]
fn test_substring_not_word_match() {
    let params = QueryParameters::new("fall", CategoryFilter::All);

    let result = query_destinations(&sample_destinations(), &params);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].destination.name, "Hundru Falls");
}

#[test]
fn test_input_not_mutated() {
    let destinations = catalog();
    let before = destinations.clone();
    let params = QueryParameters::new("falls", CategoryFilter::All)
        .with_origin(Some(RANCHI))
        .with_radius_km(Some(40.0));

    let _ = query_destinations(&destinations, &params);
    let _ = annotate_distances(&destinations, Some(RANCHI));

    assert_eq!(destinations, before);
}
