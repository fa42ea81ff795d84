use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for `ListLikedYou` and `ListNewLikedYou`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ListLikedYouRequest {
    #[serde(alias = "recipient_user_id", rename = "recipientUserId")]
    pub recipient_user_id: String,
    #[serde(default)]
    #[serde(alias = "pagination_token", rename = "paginationToken")]
    pub pagination_token: Option<String>,
    #[validate(range(min = 1, max = 50))]
    #[serde(default)]
    #[serde(alias = "page_size", rename = "pageSize")]
    pub page_size: Option<u32>,
}

/// Request for `CountLikedYou`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountLikedYouRequest {
    #[serde(alias = "recipient_user_id", rename = "recipientUserId")]
    pub recipient_user_id: String,
}

/// Request for `PutDecision`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PutDecisionRequest {
    #[serde(alias = "actor_user_id", rename = "actorUserId")]
    pub actor_user_id: String,
    #[serde(alias = "recipient_user_id", rename = "recipientUserId")]
    pub recipient_user_id: String,
    #[serde(alias = "liked_recipient", rename = "likedRecipient")]
    pub liked_recipient: bool,
}
