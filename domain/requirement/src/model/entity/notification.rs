use architecture::AggregateRoot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A message delivered to one or more users, each keeping its own read state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Unique recipient ids in first-seen order.
    pub recipient_ids: Vec<Uuid>,
}

impl AggregateRoot for Notification {
    type Id = Uuid;
}

impl Notification {
    pub fn new(message: impl Into<String>, recipients: impl IntoIterator<Item = Uuid>) -> Self {
        let mut seen = std::collections::HashSet::new();
        let recipient_ids = recipients.into_iter().filter(|id| seen.insert(*id)).collect();
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            timestamp: Utc::now(),
            recipient_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipients_deduplicated() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let notification = Notification::new("hello", [a, b, a, b, a]);
        assert_eq!(notification.recipient_ids, vec![a, b]);
    }
}
