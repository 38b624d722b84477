use std::str::FromStr;

use actix_easy_multipart::tempfile::Tempfile;
use anyhow::Context;
use uuid::Uuid;

pub mod admin;
pub mod attachments;
pub mod categories;
pub mod comments;
pub mod dtos;
pub mod notifications;
pub mod priorities;
pub mod requirement_types;
pub mod requirements;
pub mod users;
pub mod ws;

mod error;
pub use error::{ApiError, ApiResponder, ApiResponderResult, ApiResult};

fn extract_uuid(s: &str) -> ApiResult<Uuid> {
    Uuid::from_str(s).map_err(|e| {
        ApiError::InvalidRequest(format!(r#"error when parse uuid from "{s}": {e}"#))
    })
}

/// Name and content of an uploaded multipart file.
async fn read_upload(file: &Tempfile) -> ApiResult<(String, Vec<u8>)> {
    let file_name = file
        .file_name
        .as_deref()
        .map(|el| el.rsplit(['/', '\\']).next().unwrap_or(el).to_string())
        .filter(|el| !el.is_empty())
        .unwrap_or_else(|| "upload".to_string());
    let content = tokio::fs::read(file.file.path())
        .await
        .context("Cannot read uploaded file")?;
    Ok((file_name, content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(extract_uuid(&id.to_string()).unwrap(), id);
        assert!(matches!(extract_uuid("42"), Err(ApiError::InvalidRequest(_))));
    }
}
