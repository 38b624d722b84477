use crate::{
    model::{
        entity::User,
        vo::{EmailTemplate, ProfileKind, Role, TokenPurpose},
    },
    repository::UserRepo,
    service::{EmailService, IdentityProvider, ImageService},
};
use architecture::{DBRepository, MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

mock! {
    pub UserRepo {}
    #[async_trait]
    impl UserRepo for UserRepo {
        async fn get_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;
        async fn get_by_ids(&self, ids: &[Uuid]) -> anyhow::Result<Vec<User>>;
        async fn get_by_profile_kind(&self, kind: ProfileKind) -> anyhow::Result<Vec<User>>;
        async fn role_exists(&self, role: Role) -> anyhow::Result<bool>;
        async fn assign_image_to_all(&self, image: &str) -> anyhow::Result<u64>;
    }
    #[async_trait]
    impl ReadOnlyRepository<User> for UserRepo {
        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;
        async fn get_all(&self) -> anyhow::Result<Vec<User>>;
    }
    #[async_trait]
    impl MutableRepository<User> for UserRepo {
        async fn insert(&self, entity: &User) -> anyhow::Result<Uuid>;
        async fn update(&self, entity: &User) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<User> for UserRepo {}
}

mock! {
    pub EmailService {}
    #[async_trait]
    impl EmailService for EmailService {
        async fn send_template(
            &self,
            to: &str,
            subject: &str,
            template: EmailTemplate,
            data: serde_json::Value,
        ) -> anyhow::Result<()>;
    }
}

mock! {
    pub ImageService {}
    #[async_trait]
    impl ImageService for ImageService {
        async fn upload_image(&self, file_name: &str, content: Vec<u8>) -> anyhow::Result<String>;
    }
}

mock! {
    pub IdentityProvider {}
    impl IdentityProvider for IdentityProvider {
        fn hash_password(&self, password: &str) -> anyhow::Result<String>;
        fn verify_password(&self, password: &str, password_hash: &str) -> anyhow::Result<bool>;
        fn issue_access_token(&self, user: &User) -> anyhow::Result<String>;
        fn issue_purpose_token(&self, user: &User, purpose: TokenPurpose) -> anyhow::Result<String>;
        fn validate_purpose_token(
            &self,
            user: &User,
            purpose: TokenPurpose,
            token: &str,
        ) -> anyhow::Result<bool>;
    }
}
