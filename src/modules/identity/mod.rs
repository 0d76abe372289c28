mod cache_key;
mod movie_identity;

pub use cache_key::{compute_key, CacheKey};
pub use movie_identity::MovieIdentity;
