// Core logic exports
pub mod explorer;
pub mod filters;
pub mod pagination;

pub use explorer::{ExploreError, ExploreHandler};
pub use filters::{filter_new_likers, is_reciprocal_like};
pub use pagination::{decode_token, encode_token, next_token};
