use anyhow::Context;
use async_trait::async_trait;
use domain_user::{model::vo::EmailTemplate, service::EmailService};
use handlebars::Handlebars;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::infrastructure::config::EmailConfig;

fn template_source(template: EmailTemplate) -> &'static str {
    match template {
        EmailTemplate::Notification => include_str!("../../../templates/notification.hbs"),
        EmailTemplate::ConfirmEmail => include_str!("../../../templates/confirm_email.hbs"),
        EmailTemplate::ResetPassword => include_str!("../../../templates/reset_password.hbs"),
        EmailTemplate::AccountActivated => {
            include_str!("../../../templates/account_activated.hbs")
        }
    }
}

/// Build the registry holding every mail template.
pub fn build_templates() -> anyhow::Result<Handlebars<'static>> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    for template in EmailTemplate::ALL {
        registry
            .register_template_string(template.name(), template_source(template))
            .with_context(|| format!("Cannot register mail template {}", template.name()))?;
    }
    Ok(registry)
}

/// Sends rendered templates through SMTP. When mail is disabled the message is only logged.
pub struct SmtpEmailService {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from: Mailbox,
    templates: Handlebars<'static>,
}

impl SmtpEmailService {
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let from = Mailbox::new(
            Some(config.from_name().to_owned()),
            config.from_address().parse().context("Invalid sender address")?,
        );
        let transport = if *config.enable() {
            let mut builder =
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(config.smtp_host())?
                    .port(*config.smtp_port());
            if !config.user_name().is_empty() {
                builder = builder.credentials(Credentials::new(
                    config.user_name().to_owned(),
                    config.password().to_owned(),
                ));
            }
            Some(builder.build())
        } else {
            None
        };
        Ok(Self {
            transport,
            from,
            templates: build_templates()?,
        })
    }
}

#[async_trait]
impl EmailService for SmtpEmailService {
    async fn send_template(
        &self,
        to: &str,
        subject: &str,
        template: EmailTemplate,
        data: serde_json::Value,
    ) -> anyhow::Result<()> {
        let body = self.templates.render(template.name(), &data)?;
        let Some(transport) = &self.transport else {
            tracing::info!("Mail delivery disabled, dropping \"{subject}\" to {to}");
            return Ok(());
        };
        let message = Message::builder()
            .from(self.from.clone())
            .to(to.parse().with_context(|| format!("Invalid recipient address {to}"))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(body)?;
        transport.send(message).await?;
        tracing::info!("Sent \"{subject}\" to {to}");
        Ok(())
    }
}
