use std::collections::HashSet;

use crate::models::{Decision, Liker};

/// Likers the recipient has not yet made any decision about
///
/// Every target of `given` is excluded, likes and passes alike: someone the
/// recipient already passed on is no longer "new". Order of `received` is kept.
pub fn filter_new_likers(received: Vec<Liker>, given: &[Decision]) -> Vec<Liker> {
    let decided: HashSet<&str> = given.iter().map(|d| d.target_id.as_str()).collect();

    received
        .into_iter()
        .filter(|liker| !decided.contains(liker.actor_id.as_str()))
        .collect()
}

/// Whether `reply` is a like from the recipient back to `actor_id`
#[inline]
pub fn is_reciprocal_like(reply: Option<&Decision>, actor_id: &str) -> bool {
    reply.is_some_and(|d| d.liked && d.target_id == actor_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn liker(id: &str) -> Liker {
        Liker {
            actor_id: id.to_string(),
            timestamp: Utc::now(),
        }
    }

    fn decision(actor: &str, target: &str, liked: bool) -> Decision {
        Decision {
            actor_id: actor.to_string(),
            target_id: target.to_string(),
            liked,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_liked_back_is_not_new() {
        let received = vec![liker("user1"), liker("user3")];
        let given = vec![decision("user2", "user3", true)];

        let new: Vec<_> = filter_new_likers(received, &given)
            .into_iter()
            .map(|l| l.actor_id)
            .collect();

        assert_eq!(new, vec!["user1"]);
    }

    #[test]
    fn test_passed_is_not_new() {
        let received = vec![liker("user1"), liker("user3")];
        let given = vec![decision("user2", "user1", false)];

        let new = filter_new_likers(received, &given);

        assert_eq!(new.len(), 1);
        assert_eq!(new[0].actor_id, "user3");
    }

    #[test]
    fn test_order_preserved() {
        let received = vec![liker("c"), liker("a"), liker("b"), liker("d")];
        let given = vec![decision("me", "a", true), decision("me", "x", true)];

        let new: Vec<_> = filter_new_likers(received, &given)
            .into_iter()
            .map(|l| l.actor_id)
            .collect();

        assert_eq!(new, vec!["c", "b", "d"]);
    }

    #[test]
    fn test_reciprocal_like() {
        let back = decision("user2", "user1", true);
        let pass = decision("user2", "user1", false);
        let other = decision("user2", "user9", true);

        assert!(is_reciprocal_like(Some(&back), "user1"));
        assert!(!is_reciprocal_like(Some(&pass), "user1"));
        assert!(!is_reciprocal_like(Some(&other), "user1"));
        assert!(!is_reciprocal_like(None, "user1"));
    }
}
