use serde::{Deserialize, Serialize};
use crate::models::domain::{Liker, LikerPage};

/// A single liker as returned over the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikerResponse {
    #[serde(rename = "actorId")]
    pub actor_id: String,
    #[serde(rename = "unixTimestamp")]
    pub unix_timestamp: u64,
}

impl From<&Liker> for LikerResponse {
    fn from(liker: &Liker) -> Self {
        Self {
            actor_id: liker.actor_id.clone(),
            unix_timestamp: liker.unix_timestamp(),
        }
    }
}

/// Response for `ListLikedYou` and `ListNewLikedYou`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListLikedYouResponse {
    pub likers: Vec<LikerResponse>,
    #[serde(rename = "nextPaginationToken", skip_serializing_if = "Option::is_none", default)]
    pub next_pagination_token: Option<String>,
}

impl From<LikerPage> for ListLikedYouResponse {
    fn from(page: LikerPage) -> Self {
        Self {
            likers: page.likers.iter().map(LikerResponse::from).collect(),
            next_pagination_token: page.next_pagination_token,
        }
    }
}

/// Response for `CountLikedYou`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountLikedYouResponse {
    pub count: u64,
}

/// Response for `PutDecision`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PutDecisionResponse {
    #[serde(rename = "mutualLikes")]
    pub mutual_likes: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
