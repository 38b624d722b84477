use async_trait::async_trait;

use crate::model::vo::NotificationPayload;

/// A notification channel.
#[async_trait]
pub trait RequirementObserver: Send + Sync {
    fn name(&self) -> &'static str;

    /// Deliver the event. Payload kinds the channel does not handle are ignored.
    async fn update(&self, message: &str, payload: &NotificationPayload) -> anyhow::Result<()>;
}

/// Fan-out of requirement events to every channel.
#[async_trait]
pub trait RequirementNotifier: Send + Sync {
    /// Deliver to every observer in order. Never fails: a failing observer is logged and
    /// skipped.
    async fn notify_all(&self, message: &str, payload: &NotificationPayload);
}
