use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::models::{Decision, Liker, Page};
use crate::services::store::{DecisionStore, StoreError};

/// In-memory decision store
///
/// Mirrors the ordering and paging of [`super::PostgresStore`] so handler
/// logic can be exercised without a live database.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    decisions: RwLock<HashMap<(String, String), Decision>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with decisions carrying explicit timestamps
    pub fn with_decisions(decisions: impl IntoIterator<Item = Decision>) -> Self {
        let map = decisions
            .into_iter()
            .map(|d| ((d.actor_id.clone(), d.target_id.clone()), d))
            .collect();

        Self {
            decisions: RwLock::new(map),
        }
    }

    pub async fn len(&self) -> usize {
        self.decisions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.decisions.read().await.is_empty()
    }
}

#[async_trait]
impl DecisionStore for InMemoryStore {
    async fn upsert_decision(
        &self,
        actor_id: &str,
        target_id: &str,
        liked: bool,
    ) -> Result<(), StoreError> {
        let decision = Decision {
            actor_id: actor_id.to_string(),
            target_id: target_id.to_string(),
            liked,
            timestamp: chrono::Utc::now(),
        };

        self.decisions
            .write()
            .await
            .insert((actor_id.to_string(), target_id.to_string()), decision);

        Ok(())
    }

    async fn get_received_likes(&self, user_id: &str, page: Page) -> Result<Vec<Liker>, StoreError> {
        let decisions = self.decisions.read().await;

        let mut likers: Vec<Liker> = decisions
            .values()
            .filter(|d| d.target_id == user_id && d.liked)
            .map(|d| Liker {
                actor_id: d.actor_id.clone(),
                timestamp: d.timestamp,
            })
            .collect();

        likers.sort_by(|a, b| {
            a.timestamp
                .cmp(&b.timestamp)
                .then_with(|| a.actor_id.cmp(&b.actor_id))
        });

        Ok(likers
            .into_iter()
            .skip(page.offset)
            .take(page.limit)
            .collect())
    }

    async fn get_given_decisions(&self, user_id: &str) -> Result<Vec<Decision>, StoreError> {
        Ok(self
            .decisions
            .read()
            .await
            .values()
            .filter(|d| d.actor_id == user_id)
            .cloned()
            .collect())
    }

    async fn get_decision(
        &self,
        actor_id: &str,
        target_id: &str,
    ) -> Result<Option<Decision>, StoreError> {
        Ok(self
            .decisions
            .read()
            .await
            .get(&(actor_id.to_string(), target_id.to_string()))
            .cloned())
    }

    async fn delete_decision(&self, actor_id: &str, target_id: &str) -> Result<bool, StoreError> {
        Ok(self
            .decisions
            .write()
            .await
            .remove(&(actor_id.to_string(), target_id.to_string()))
            .is_some())
    }

    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}
