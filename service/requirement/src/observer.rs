use std::sync::Arc;

use architecture::MutableRepository;
use async_trait::async_trait;
use domain_requirement::{
    model::{entity::Notification, vo::NotificationPayload},
    repository::NotificationRepo,
    service::RequirementObserver,
};
use domain_user::{model::vo::EmailTemplate, service::EmailService};
use serde_json::json;
use typed_builder::TypedBuilder;

/// Mails `Email` payloads with the notification template.
#[derive(TypedBuilder)]
pub struct EmailNotificationObserver {
    email_service: Arc<dyn EmailService>,
}

#[async_trait]
impl RequirementObserver for EmailNotificationObserver {
    fn name(&self) -> &'static str {
        "EmailNotificationObserver"
    }

    async fn update(&self, message: &str, payload: &NotificationPayload) -> anyhow::Result<()> {
        let NotificationPayload::Email {
            to,
            subject,
            content,
            ..
        } = payload
        else {
            return Ok(());
        };
        self.email_service
            .send_template(
                to,
                subject,
                EmailTemplate::Notification,
                json!({ "title": message, "content": content }),
            )
            .await
    }
}

/// Stores `Internal` payloads as one in-app notification for the whole batch.
#[derive(TypedBuilder)]
pub struct InternalNotificationObserver {
    notification_repo: Arc<dyn NotificationRepo>,
}

#[async_trait]
impl RequirementObserver for InternalNotificationObserver {
    fn name(&self) -> &'static str {
        "InternalNotificationObserver"
    }

    async fn update(&self, message: &str, payload: &NotificationPayload) -> anyhow::Result<()> {
        let NotificationPayload::Internal {
            user_ids, content, ..
        } = payload
        else {
            return Ok(());
        };
        let notification = Notification::new(format!("{message}: {content}"), user_ids.clone());
        if notification.recipient_ids.is_empty() {
            return Ok(());
        }
        self.notification_repo.insert(&notification).await?;
        self.notification_repo.save_changed().await?;
        Ok(())
    }
}

/// Audit trail of every requirement event in the log output.
pub struct ActionLogObserver;

#[async_trait]
impl RequirementObserver for ActionLogObserver {
    fn name(&self) -> &'static str {
        "ActionLogObserver"
    }

    async fn update(&self, message: &str, payload: &NotificationPayload) -> anyhow::Result<()> {
        tracing::info!(
            target: "requirement_audit",
            requirement_id = %payload.requirement_id(),
            kind = payload.kind(),
            "{message}"
        );
        Ok(())
    }
}
