pub type UserResult<T> = Result<T, UserException>;

#[derive(Debug, thiserror::Error)]
pub enum UserException {
    #[error("User not found.")]
    UserNotFound,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("User creation failed: {reason}")]
    UserCreation { reason: String },

    #[error("Role {role} does not exist.")]
    RoleNotFound { role: String },

    #[error("Invalid credentials.")]
    InvalidLogin,

    #[error("Email is not confirmed.")]
    EmailNotConfirmed,

    #[error("User account is disabled.")]
    UserNotEnabled,

    #[error("User information is incomplete.")]
    IncompleteUserInfo,

    #[error("Invalid or expired token.")]
    InvalidToken,

    #[error("Password reset failed: {reason}")]
    PasswordReset { reason: String },

    #[error("File is empty.")]
    EmptyFile,

    #[error("An error occurred while sending the email: {source}")]
    EmailSend {
        #[source]
        source: anyhow::Error,
    },

    #[error("An error occurred while uploading the image: {source}")]
    ImageUpload {
        #[source]
        source: anyhow::Error,
    },

    #[error("User internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl UserException {
    /// Stable machine readable code.
    pub fn code(&self) -> &'static str {
        use UserException::*;
        match self {
            UserNotFound => "USER_NOT_FOUND",
            PasswordMismatch => "PASSWORD_MISMATCH",
            UserCreation { .. } => "USER_CREATION_FAILED",
            RoleNotFound { .. } => "ROLE_NOT_FOUND",
            InvalidLogin => "INVALID_LOGIN",
            EmailNotConfirmed => "EMAIL_NOT_CONFIRMED",
            UserNotEnabled => "USER_NOT_ENABLED",
            IncompleteUserInfo => "INCOMPLETE_USER_INFO",
            InvalidToken => "INVALID_TOKEN",
            PasswordReset { .. } => "PASSWORD_RESET_FAILED",
            EmptyFile => "EMPTY_FILE",
            EmailSend { .. } => "EMAIL_SEND_FAILED",
            ImageUpload { .. } => "IMAGE_UPLOAD_FAILED",
            InternalError { .. } => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl From<anyhow::Error> for UserException {
    fn from(source: anyhow::Error) -> Self {
        Self::InternalError { source }
    }
}
