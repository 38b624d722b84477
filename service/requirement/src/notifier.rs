use std::sync::Arc;

use async_trait::async_trait;
use domain_requirement::{
    model::vo::NotificationPayload,
    service::{RequirementNotifier, RequirementObserver},
};
use typed_builder::TypedBuilder;

/// Delivers every event to a fixed list of observers, in the order given at construction.
#[derive(TypedBuilder)]
pub struct RequirementNotifierImpl {
    observers: Vec<Arc<dyn RequirementObserver>>,
}

#[async_trait]
impl RequirementNotifier for RequirementNotifierImpl {
    async fn notify_all(&self, message: &str, payload: &NotificationPayload) {
        for observer in self.observers.iter() {
            match observer.update(message, payload).await {
                Ok(()) => tracing::debug!(
                    "Notification of requirement {} sent to observer: {}",
                    payload.requirement_id(),
                    observer.name()
                ),
                Err(e) => tracing::error!("Error notifying observer {}: {e:?}", observer.name()),
            }
        }
    }
}
