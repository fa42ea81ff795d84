//! Explore service - likes, passes and mutual matches for the Lume dating app
//!
//! Users record like/pass decisions about each other. The service answers who
//! liked a user, who liked them that they have not yet decided about, how many
//! such new likers there are, and whether a new like completed a mutual match.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{ExploreError, ExploreHandler};
pub use crate::models::{Decision, DecisionKind, Liker, LikerPage, Page};
pub use crate::services::{DecisionStore, InMemoryStore, PostgresStore, StoreError};
