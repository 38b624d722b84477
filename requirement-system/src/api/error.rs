use actix_web::{
    body::BoxBody, http::StatusCode, HttpRequest, HttpResponse, Responder, ResponseError,
};
use architecture::{ErrorResponse, ResponseBase};
use domain_requirement::exception::RequirementException;
use domain_user::exception::UserException;
use serde::Serialize;

const INTERNAL_SERVER_ERROR: &str = "INTERNAL_SERVER_ERROR";
const INTERNAL_SERVER_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Every failure a handler can answer with.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    User(#[from] UserException),
    #[error(transparent)]
    Requirement(#[from] RequirementException),
    #[error("Authentication is required.")]
    Unauthorized,
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    InvalidRequest(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::User(e) => e.code(),
            ApiError::Requirement(e) => e.code(),
            ApiError::Unauthorized => "UNAUTHORIZED",
            ApiError::Forbidden(_) => "FORBIDDEN",
            ApiError::InvalidRequest(_) => "INVALID_REQUEST",
            ApiError::Internal(_) => INTERNAL_SERVER_ERROR,
        }
    }

    /// Text sent to the client. Sources of server side failures stay in the log.
    fn public_message(&self) -> String {
        match self {
            ApiError::User(UserException::EmailSend { .. }) => {
                "An error occurred while sending the email.".to_string()
            }
            ApiError::User(UserException::ImageUpload { .. }) => {
                "An error occurred while uploading the image.".to_string()
            }
            ApiError::User(UserException::InternalError { .. })
            | ApiError::Requirement(RequirementException::InternalError { .. })
            | ApiError::Internal(_) => INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
            _ => self.to_string(),
        }
    }
}

fn user_status(e: &UserException) -> StatusCode {
    use UserException::*;
    match e {
        UserNotFound => StatusCode::NOT_FOUND,
        PasswordMismatch
        | UserCreation { .. }
        | RoleNotFound { .. }
        | IncompleteUserInfo
        | InvalidToken
        | PasswordReset { .. }
        | EmptyFile => StatusCode::BAD_REQUEST,
        InvalidLogin | EmailNotConfirmed | UserNotEnabled => StatusCode::UNAUTHORIZED,
        EmailSend { .. } | ImageUpload { .. } | InternalError { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn requirement_status(e: &RequirementException) -> StatusCode {
    use RequirementException::*;
    match e {
        RequirementNotFound { .. }
        | NotDeleted { .. }
        | CategoryNotFound { .. }
        | RequirementTypeNotFound { .. }
        | PriorityNotFound { .. }
        | CommentNotFound { .. }
        | AttachmentNotFound { .. }
        | NotificationNotFound { .. } => StatusCode::NOT_FOUND,
        CategoryTypeMismatch { .. }
        | InvalidRequirementType { .. }
        | InvalidPriority { .. }
        | LookupInUse { .. }
        | UserNotFound { .. }
        | AttachmentLimit { .. }
        | EmptyFile
        | InvalidPagination
        | Validation { .. } => StatusCode::BAD_REQUEST,
        Forbidden { .. } => StatusCode::FORBIDDEN,
        InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::User(e) => user_status(e),
            ApiError::Requirement(e) => requirement_status(e),
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{self:?}");
        } else {
            tracing::debug!("Request failed with {status}: {self}");
        }
        HttpResponse::build(status).json(ErrorResponse::new(self.code(), &self.public_message()))
    }
}

/// Successful answer wrapped as `{ "message", "data" }`.
pub struct ApiResponder<T> {
    message: &'static str,
    data: Option<T>,
}

impl<T> ApiResponder<T> {
    pub fn ok(data: T) -> Self {
        Self {
            message: "Ok",
            data: Some(data),
        }
    }

    pub fn with_message(message: &'static str, data: T) -> Self {
        Self {
            message,
            data: Some(data),
        }
    }
}

impl ApiResponder<()> {
    pub fn message(message: &'static str) -> Self {
        Self {
            message,
            data: None,
        }
    }
}

impl<T: Serialize> Responder for ApiResponder<T> {
    type Body = BoxBody;

    fn respond_to(self, _: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::Ok().json(ResponseBase::new(self.message, self.data))
    }
}

pub type ApiResponderResult<T> = ApiResult<ApiResponder<T>>;
