use serde::{Deserialize, Serialize};

/// Successful response wrapper.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseBase<T> {
    pub message: String,
    pub data: Option<T>,
}

impl<T> ResponseBase<T> {
    pub fn new(message: &str, data: Option<T>) -> Self {
        Self {
            message: message.to_string(),
            data,
        }
    }

    pub fn ok(data: T) -> Self {
        Self::new("Ok", Some(data))
    }
}

impl ResponseBase<()> {
    pub fn message(message: &str) -> Self {
        Self::new(message, None)
    }
}

/// Failed response wrapper.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            error: ErrorBody {
                code: code.to_string(),
                message: message.to_string(),
            },
        }
    }
}
