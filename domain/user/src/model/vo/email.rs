/// Email templates known by the mail sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailTemplate {
    /// `{ title, content }`
    Notification,
    /// `{ name, link }`
    ConfirmEmail,
    /// `{ name, link }`
    ResetPassword,
    /// `{ name }`
    AccountActivated,
}

impl EmailTemplate {
    pub const ALL: [EmailTemplate; 4] = [
        EmailTemplate::Notification,
        EmailTemplate::ConfirmEmail,
        EmailTemplate::ResetPassword,
        EmailTemplate::AccountActivated,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EmailTemplate::Notification => "notification",
            EmailTemplate::ConfirmEmail => "confirm_email",
            EmailTemplate::ResetPassword => "reset_password",
            EmailTemplate::AccountActivated => "account_activated",
        }
    }
}
