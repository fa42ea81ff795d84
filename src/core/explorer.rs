use std::sync::Arc;
use thiserror::Error;

use crate::core::filters::{filter_new_likers, is_reciprocal_like};
use crate::core::pagination::{decode_token, next_token};
use crate::models::{Liker, LikerPage, Page, MAX_PAGE_SIZE};
use crate::services::{DecisionStore, StoreError};

/// Errors returned by explore operations
///
/// Store failures carry the step that failed; nothing is retried.
#[derive(Debug, Error)]
pub enum ExploreError {
    #[error("error fetching received likes: {0}")]
    ReceivedLikes(#[source] StoreError),

    #[error("error fetching given decisions: {0}")]
    GivenDecisions(#[source] StoreError),

    #[error("error inserting/updating decision: {0}")]
    UpsertDecision(#[source] StoreError),

    #[error("error fetching reciprocal decision: {0}")]
    ReciprocalDecision(#[source] StoreError),

    #[error("invalid pagination token: {0}")]
    InvalidPaginationToken(String),
}

impl ExploreError {
    /// Whether the caller sent something unusable, as opposed to a storage failure
    pub fn is_client_error(&self) -> bool {
        matches!(self, ExploreError::InvalidPaginationToken(_))
    }
}

/// Implements the explore operations on top of a [`DecisionStore`]
///
/// Holds no state of its own beyond the injected store, so one instance is
/// shared by every worker.
#[derive(Clone)]
pub struct ExploreHandler {
    store: Arc<dyn DecisionStore>,
    page_size: usize,
}

impl ExploreHandler {
    pub fn new(store: Arc<dyn DecisionStore>, page_size: usize) -> Self {
        Self {
            store,
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    fn page_for(&self, pagination_token: Option<&str>, page_size: Option<u32>) -> Result<Page, ExploreError> {
        let offset = decode_token(pagination_token).map_err(ExploreError::InvalidPaginationToken)?;
        let limit = page_size.map(|s| s as usize).unwrap_or(self.page_size);

        Ok(Page::new(limit, offset))
    }

    /// Everyone who liked `recipient_id`, one page at a time
    pub async fn list_liked_you(
        &self,
        recipient_id: &str,
        pagination_token: Option<&str>,
        page_size: Option<u32>,
    ) -> Result<LikerPage, ExploreError> {
        let page = self.page_for(pagination_token, page_size)?;

        let likers = self
            .store
            .get_received_likes(recipient_id, page)
            .await
            .map_err(ExploreError::ReceivedLikes)?;

        tracing::info!(
            "Returning {} likers for user {} (offset {})",
            likers.len(),
            recipient_id,
            page.offset
        );

        Ok(LikerPage {
            next_pagination_token: next_token(page, likers.len()),
            likers,
        })
    }

    /// Likers of `recipient_id` the recipient has not decided about yet
    ///
    /// The continuation token follows the unfiltered received likes, so a page
    /// may hold fewer than `page_size` likers while more pages remain.
    pub async fn list_new_liked_you(
        &self,
        recipient_id: &str,
        pagination_token: Option<&str>,
        page_size: Option<u32>,
    ) -> Result<LikerPage, ExploreError> {
        let page = self.page_for(pagination_token, page_size)?;
        let (likers, returned) = self.new_likers(recipient_id, page).await?;

        tracing::info!(
            "Returning {} new likers for user {} ({} received at offset {})",
            likers.len(),
            recipient_id,
            returned,
            page.offset
        );

        Ok(LikerPage {
            likers,
            next_pagination_token: next_token(page, returned),
        })
    }

    /// Number of new likers on the first page, i.e. the length of
    /// `list_new_liked_you` without a token
    pub async fn count_liked_you(&self, recipient_id: &str) -> Result<u64, ExploreError> {
        let page = Page::new(self.page_size, 0);
        let (likers, _) = self.new_likers(recipient_id, page).await?;

        tracing::debug!("User {} has {} new likers", recipient_id, likers.len());

        Ok(likers.len() as u64)
    }

    /// Record a like or pass and report whether it completed a mutual like
    ///
    /// The write and the reciprocal read are separate statements, so the
    /// answer can be stale if the recipient decides concurrently.
    pub async fn put_decision(
        &self,
        actor_id: &str,
        recipient_id: &str,
        liked: bool,
    ) -> Result<bool, ExploreError> {
        self.store
            .upsert_decision(actor_id, recipient_id, liked)
            .await
            .map_err(ExploreError::UpsertDecision)?;

        if !liked {
            tracing::debug!("{} passed on {}", actor_id, recipient_id);
            return Ok(false);
        }

        let reply = self
            .store
            .get_decision(recipient_id, actor_id)
            .await
            .map_err(ExploreError::ReciprocalDecision)?;

        let mutual = is_reciprocal_like(reply.as_ref(), actor_id);

        if mutual {
            tracing::info!("Mutual like between {} and {}", actor_id, recipient_id);
        }

        Ok(mutual)
    }

    pub async fn health_check(&self) -> bool {
        match self.store.health_check().await {
            Ok(healthy) => healthy,
            Err(e) => {
                tracing::warn!("Decision store health check failed: {}", e);
                false
            }
        }
    }

    /// Received likes for `page` minus everyone the recipient already decided
    /// about. Also returns how many likes the page held before filtering.
    async fn new_likers(
        &self,
        recipient_id: &str,
        page: Page,
    ) -> Result<(Vec<Liker>, usize), ExploreError> {
        let received = self
            .store
            .get_received_likes(recipient_id, page)
            .await
            .map_err(ExploreError::ReceivedLikes)?;

        let given = self
            .store
            .get_given_decisions(recipient_id)
            .await
            .map_err(ExploreError::GivenDecisions)?;

        let returned = received.len();

        Ok((filter_new_likers(received, &given), returned))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::InMemoryStore;

    fn handler() -> (Arc<InMemoryStore>, ExploreHandler) {
        let store = Arc::new(InMemoryStore::new());
        let handler = ExploreHandler::new(store.clone(), 50);
        (store, handler)
    }

    #[tokio::test]
    async fn test_put_decision_without_reply_is_not_mutual() {
        let (store, handler) = handler();

        let mutual = handler.put_decision("user1", "user2", true).await.unwrap();

        assert!(!mutual);
        let stored = store.get_decision("user1", "user2").await.unwrap().unwrap();
        assert!(stored.liked);
    }

    #[tokio::test]
    async fn test_put_decision_completes_mutual_like() {
        let (_, handler) = handler();

        assert!(!handler.put_decision("user2", "user1", true).await.unwrap());
        assert!(handler.put_decision("user1", "user2", true).await.unwrap());
    }

    #[tokio::test]
    async fn test_pass_is_never_mutual() {
        let (_, handler) = handler();

        handler.put_decision("user2", "user1", true).await.unwrap();
        assert!(!handler.put_decision("user1", "user2", false).await.unwrap());
    }

    #[tokio::test]
    async fn test_invalid_token_rejected() {
        let (_, handler) = handler();

        let err = handler
            .list_liked_you("user2", Some("not-a-number"), None)
            .await
            .unwrap_err();

        assert!(err.is_client_error());
    }

    #[test]
    fn test_page_size_clamped() {
        let handler = ExploreHandler::new(Arc::new(InMemoryStore::new()), 500);
        assert_eq!(handler.page_size(), MAX_PAGE_SIZE);
    }
}
