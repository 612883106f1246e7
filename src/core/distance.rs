use crate::models::GeoPoint;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// Coordinates are expected in degrees within the usual bounds
/// (`-90..=90` latitude, `-180..=180` longitude). Inputs are not validated;
/// points outside those bounds yield a number with no geographic meaning.
///
/// # Returns
/// Unrounded, non-negative distance in kilometers
#[inline]
pub fn haversine_distance(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1_rad = from.latitude.to_radians();
    let lat2_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Round a distance to whole kilometers for display
#[inline]
pub fn round_km(distance_km: f64) -> i64 {
    distance_km.round() as i64
}

impl GeoPoint {
    /// Great-circle distance to another point in kilometers
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        haversine_distance(*self, *other)
    }
}
