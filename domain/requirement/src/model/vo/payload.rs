use uuid::Uuid;

/// What a requirement event asks the notification channels to deliver.
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationPayload {
    /// Mail to a single address.
    Email {
        requirement_id: Uuid,
        to: String,
        subject: String,
        content: String,
    },
    /// Persisted in-app notification for a batch of users.
    Internal {
        requirement_id: Uuid,
        user_ids: Vec<Uuid>,
        content: String,
    },
}

impl NotificationPayload {
    pub fn requirement_id(&self) -> Uuid {
        match self {
            NotificationPayload::Email { requirement_id, .. }
            | NotificationPayload::Internal { requirement_id, .. } => *requirement_id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            NotificationPayload::Email { .. } => "email",
            NotificationPayload::Internal { .. } => "internal",
        }
    }
}
