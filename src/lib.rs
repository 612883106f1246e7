//! Yatra - destination catalog and proximity search service
//!
//! This library provides the destination query engine used by the Jharkhand
//! tourism app, together with the Supabase client, caching and HTTP routes that
//! serve it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{annotate_distances, haversine_distance, query_destinations, Assistant};
pub use models::{
    Category, CategoryFilter, Destination, GeoPoint, QueryParameters, RankedDestination,
};
