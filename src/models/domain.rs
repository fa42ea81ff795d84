use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default number of received likes returned per page
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Upper bound for a client-requested page size
pub const MAX_PAGE_SIZE: usize = 50;

/// A user's like/pass decision about another user's profile
///
/// There is at most one decision per (actor, target) pair. Recording a new
/// decision for the same pair overwrites the old one and refreshes `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    #[serde(rename = "actorId")]
    pub actor_id: String,
    #[serde(rename = "targetId")]
    pub target_id: String,
    pub liked: bool,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Decision {
    pub fn kind(&self) -> DecisionKind {
        DecisionKind::from(self.liked)
    }
}

/// Persisted form of a decision, stored as `LIKE` / `PASS` text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DecisionKind {
    Like,
    Pass,
}

impl DecisionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionKind::Like => "LIKE",
            DecisionKind::Pass => "PASS",
        }
    }

    pub fn is_like(&self) -> bool {
        matches!(self, DecisionKind::Like)
    }
}

impl From<bool> for DecisionKind {
    fn from(liked: bool) -> Self {
        if liked {
            DecisionKind::Like
        } else {
            DecisionKind::Pass
        }
    }
}

impl FromStr for DecisionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LIKE" => Ok(DecisionKind::Like),
            "PASS" => Ok(DecisionKind::Pass),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for DecisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A like received by a user, with the time the like was last written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Liker {
    #[serde(rename = "actorId")]
    pub actor_id: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Liker {
    /// Seconds since the Unix epoch, clamped at zero
    pub fn unix_timestamp(&self) -> u64 {
        self.timestamp.timestamp().max(0) as u64
    }
}

/// Offset window over the received likes of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: usize,
    pub offset: usize,
}

impl Page {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self {
            limit: limit.clamp(1, MAX_PAGE_SIZE),
            offset,
        }
    }

    pub fn first() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, 0)
    }

    pub fn next_offset(&self) -> usize {
        self.offset.saturating_add(self.limit)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::first()
    }
}

/// One page of likers plus the token for the page after it, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikerPage {
    pub likers: Vec<Liker>,
    pub next_pagination_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_kind_text() {
        assert_eq!(DecisionKind::from(true).as_str(), "LIKE");
        assert_eq!(DecisionKind::from(false).as_str(), "PASS");
        assert_eq!("LIKE".parse::<DecisionKind>(), Ok(DecisionKind::Like));
        assert_eq!("PASS".parse::<DecisionKind>(), Ok(DecisionKind::Pass));
        assert!("like".parse::<DecisionKind>().is_err());
    }

    #[test]
    fn test_page_clamps_limit() {
        assert_eq!(Page::new(0, 0).limit, 1);
        assert_eq!(Page::new(500, 10).limit, MAX_PAGE_SIZE);
        assert_eq!(Page::new(20, 40).next_offset(), 60);
    }

    #[test]
    fn test_unix_timestamp_clamped() {
        let liker = Liker {
            actor_id: "user1".to_string(),
            timestamp: chrono::DateTime::from_timestamp(-10, 0).unwrap(),
        };
        assert_eq!(liker.unix_timestamp(), 0);
    }
}
