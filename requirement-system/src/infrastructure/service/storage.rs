use async_trait::async_trait;
use domain_requirement::service::AttachmentStorage;
use domain_user::service::ImageService;
use opendal::{
    services::{Fs, S3},
    Operator,
};
use uuid::Uuid;

use crate::infrastructure::config::{StorageConfig, StorageScheme};

const IMAGE_PREFIX: &str = "trackit";

/// Object store holding profile images and requirement attachments.
pub struct ObjectStorage {
    operator: Operator,
    public_url: String,
}

impl ObjectStorage {
    pub fn new(config: &StorageConfig) -> anyhow::Result<Self> {
        Ok(Self {
            operator: create_operator(config)?,
            public_url: config.public_url().trim_end_matches('/').to_string(),
        })
    }

    fn url_of(&self, path: &str) -> String {
        format!("{}/{path}", self.public_url)
    }
}

fn create_operator(config: &StorageConfig) -> anyhow::Result<Operator> {
    Ok(match config.scheme() {
        StorageScheme::Fs => {
            let mut builder = Fs::default();
            builder.root(config.root());
            Operator::new(builder)?.finish()
        }
        StorageScheme::S3 => {
            let mut builder = S3::default();
            builder
                .root(config.root())
                .bucket(config.bucket())
                .region(config.region())
                .access_key_id(config.access_key_id())
                .secret_access_key(config.secret_access_key());
            if !config.endpoint().is_empty() {
                builder.endpoint(config.endpoint());
            }
            Operator::new(builder)?.finish()
        }
    })
}

#[async_trait]
impl ImageService for ObjectStorage {
    async fn upload_image(&self, file_name: &str, content: Vec<u8>) -> anyhow::Result<String> {
        let path = format!("{IMAGE_PREFIX}/{}_{file_name}", Uuid::new_v4());
        self.operator.write(&path, content).await?;
        Ok(self.url_of(&path))
    }
}

#[async_trait]
impl AttachmentStorage for ObjectStorage {
    async fn store(&self, path: &str, content: Vec<u8>) -> anyhow::Result<()> {
        self.operator.write(path, content).await?;
        Ok(())
    }

    async fn remove(&self, path: &str) -> anyhow::Result<()> {
        self.operator.delete(path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage(root: &std::path::Path) -> ObjectStorage {
        let config: StorageConfig = serde_json::from_value(serde_json::json!({
            "root": root.to_string_lossy(),
            "public_url": "https://files.example.com/",
        }))
        .unwrap();
        ObjectStorage::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_image_stored_under_prefix() {
        let root = std::env::temp_dir().join(format!("trackit-{}", Uuid::new_v4()));
        let storage = storage(&root);
        let url = storage.upload_image("avatar.png", vec![1, 2, 3]).await.unwrap();
        assert!(url.starts_with("https://files.example.com/trackit/"));
        assert!(url.ends_with("_avatar.png"));
        let path = url.trim_start_matches("https://files.example.com/");
        assert_eq!(std::fs::read(root.join(path)).unwrap(), vec![1, 2, 3]);
        let _ = std::fs::remove_dir_all(root);
    }

    #[tokio::test]
    async fn test_attachment_store_and_remove() {
        let root = std::env::temp_dir().join(format!("trackit-{}", Uuid::new_v4()));
        let storage = storage(&root);
        storage.store("attachments/1_report.pdf", b"pdf".to_vec()).await.unwrap();
        assert!(root.join("attachments/1_report.pdf").exists());
        storage.remove("attachments/1_report.pdf").await.unwrap();
        assert!(!root.join("attachments/1_report.pdf").exists());
        let _ = std::fs::remove_dir_all(root);
    }
}
