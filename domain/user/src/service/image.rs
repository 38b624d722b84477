use async_trait::async_trait;

/// Hosted profile images.
#[async_trait]
pub trait ImageService: Send + Sync {
    /// Store the image and return its public url.
    async fn upload_image(&self, file_name: &str, content: Vec<u8>) -> anyhow::Result<String>;
}
