use async_trait::async_trait;

use crate::model::vo::EmailTemplate;

/// Outgoing mail.
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Render `template` with `data` and send it to `to`.
    async fn send_template(
        &self,
        to: &str,
        subject: &str,
        template: EmailTemplate,
        data: serde_json::Value,
    ) -> anyhow::Result<()>;
}
