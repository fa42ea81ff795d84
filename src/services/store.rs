use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Decision, Liker, Page};

/// Errors that can occur when reading or writing decisions
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid decision value: {0}")]
    InvalidDecision(String),
}

/// Persistence of like/pass decisions
///
/// The explore handler only ever talks to storage through this trait, so the
/// Postgres implementation can be swapped for [`super::InMemoryStore`] in tests.
#[async_trait]
pub trait DecisionStore: Send + Sync {
    /// Insert the decision for `(actor_id, target_id)` or overwrite the existing
    /// one, setting its timestamp to now.
    async fn upsert_decision(
        &self,
        actor_id: &str,
        target_id: &str,
        liked: bool,
    ) -> Result<(), StoreError>;

    /// Users who liked `user_id`, oldest like first, restricted to `page`.
    async fn get_received_likes(&self, user_id: &str, page: Page) -> Result<Vec<Liker>, StoreError>;

    /// Every decision (likes and passes) made by `user_id`.
    async fn get_given_decisions(&self, user_id: &str) -> Result<Vec<Decision>, StoreError>;

    /// The decision `actor_id` made about `target_id`, if any.
    async fn get_decision(
        &self,
        actor_id: &str,
        target_id: &str,
    ) -> Result<Option<Decision>, StoreError>;

    /// Remove the decision for a pair. Returns whether a row was removed.
    async fn delete_decision(&self, actor_id: &str, target_id: &str) -> Result<bool, StoreError>;

    async fn health_check(&self) -> Result<bool, StoreError>;
}
