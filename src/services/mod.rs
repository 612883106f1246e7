// Service exports
pub mod cache;
pub mod catalog;
pub mod supabase;

pub use cache::{CacheManager, CacheKey, CacheError};
pub use catalog::{Catalog, CatalogSnapshot};
pub use supabase::{SupabaseClient, SupabaseTables, SupabaseError};
