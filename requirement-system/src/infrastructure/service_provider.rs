use std::{
    future::{ready, Ready},
    sync::Arc,
};

use actix_web::{dev::Payload, error::ErrorInternalServerError, web, FromRequest, HttpRequest};
use database_migration::Migrator;
use domain_requirement::service::*;
use domain_user::service::*;
use service_requirement::*;
use service_user::*;

use super::{
    config::SystemConfig,
    database::{Database, OrmRepo},
    service::prelude::*,
    WsManager,
};

pub trait IServiceProvider<T> {
    fn provide(&self) -> T;
}

/// Application singletons.
pub struct ServiceProvider {
    config: SystemConfig,
    database: Arc<Database>,
    identity: Arc<JwtIdentityProvider>,
    email_service: Arc<SmtpEmailService>,
    object_storage: Arc<ObjectStorage>,
    ws_manager: Arc<WsManager>,
}

impl ServiceProvider {
    pub async fn build(config: SystemConfig) -> anyhow::Result<Self> {
        let db_config = config.common.db();
        if *db_config.auto_migrate() {
            Migrator::migration_up(db_config.url()).await?;
            tracing::info!("Database migrations applied");
        }
        let database = Arc::new(Database::new(db_config.url()).await?);
        let identity = Arc::new(JwtIdentityProvider::new(config.common.jwt().clone()));
        let email_service = Arc::new(SmtpEmailService::new(&config.email)?);
        let object_storage = Arc::new(ObjectStorage::new(&config.storage)?);
        let ws_manager = Arc::new(WsManager::new(config.web_socket.keep_alive));
        Ok(Self {
            config,
            database,
            identity,
            email_service,
            object_storage,
            ws_manager,
        })
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }
}

impl IServiceProvider<Arc<JwtIdentityProvider>> for ServiceProvider {
    fn provide(&self) -> Arc<JwtIdentityProvider> {
        self.identity.clone()
    }
}

impl IServiceProvider<Arc<WsManager>> for ServiceProvider {
    fn provide(&self) -> Arc<WsManager> {
        self.ws_manager.clone()
    }
}

/// Per request services sharing one [`OrmRepo`], so one `save_changed` commits the request.
pub struct ServiceProviderScoped {
    sp: Arc<ServiceProvider>,
    orm_repo: Arc<OrmRepo>,
}

impl ServiceProviderScoped {
    pub fn new(sp: Arc<ServiceProvider>) -> Self {
        let orm_repo = Arc::new(OrmRepo::builder().db(sp.database.clone()).build());
        Self { sp, orm_repo }
    }

    fn notifier(&self) -> Arc<dyn RequirementNotifier> {
        let observers: Vec<Arc<dyn RequirementObserver>> = vec![
            Arc::new(
                EmailNotificationObserver::builder()
                    .email_service(self.sp.email_service.clone())
                    .build(),
            ),
            Arc::new(
                InternalNotificationObserver::builder()
                    .notification_repo(self.orm_repo.clone())
                    .build(),
            ),
            Arc::new(ActionLogObserver),
        ];
        Arc::new(RequirementNotifierImpl::builder().observers(observers).build())
    }
}

impl FromRequest for ServiceProviderScoped {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(match req.app_data::<web::Data<ServiceProvider>>() {
            Some(sp) => Ok(Self::new(sp.clone().into_inner())),
            None => Err(ErrorInternalServerError("Service provider is not registered.")),
        })
    }
}

impl IServiceProvider<Arc<dyn AuthService>> for ServiceProviderScoped {
    fn provide(&self) -> Arc<dyn AuthService> {
        Arc::new(
            AuthServiceImpl::builder()
                .user_repo(self.orm_repo.clone())
                .identity(self.sp.identity.clone())
                .build(),
        )
    }
}

impl IServiceProvider<Arc<dyn UserService>> for ServiceProviderScoped {
    fn provide(&self) -> Arc<dyn UserService> {
        Arc::new(
            UserServiceImpl::builder()
                .user_repo(self.orm_repo.clone())
                .identity(self.sp.identity.clone())
                .email_service(self.sp.email_service.clone())
                .image_service(self.sp.object_storage.clone())
                .app_url(self.sp.config.app_url.as_str())
                .default_image(self.sp.config.default_image_url.as_str())
                .build(),
        )
    }
}

impl IServiceProvider<Arc<dyn RequirementService>> for ServiceProviderScoped {
    fn provide(&self) -> Arc<dyn RequirementService> {
        Arc::new(
            RequirementServiceImpl::builder()
                .requirement_repo(self.orm_repo.clone())
                .category_repo(self.orm_repo.clone())
                .requirement_type_repo(self.orm_repo.clone())
                .priority_repo(self.orm_repo.clone())
                .user_repo(self.orm_repo.clone())
                .action_log_repo(self.orm_repo.clone())
                .notification_repo(self.orm_repo.clone())
                .notifier(self.notifier())
                .default_image(self.sp.config.default_image_url.as_str())
                .build(),
        )
    }
}

impl IServiceProvider<Arc<dyn CategoryService>> for ServiceProviderScoped {
    fn provide(&self) -> Arc<dyn CategoryService> {
        Arc::new(
            CategoryServiceImpl::builder()
                .category_repo(self.orm_repo.clone())
                .requirement_type_repo(self.orm_repo.clone())
                .requirement_repo(self.orm_repo.clone())
                .build(),
        )
    }
}

impl IServiceProvider<Arc<dyn RequirementTypeService>> for ServiceProviderScoped {
    fn provide(&self) -> Arc<dyn RequirementTypeService> {
        Arc::new(
            RequirementTypeServiceImpl::builder()
                .requirement_type_repo(self.orm_repo.clone())
                .category_repo(self.orm_repo.clone())
                .requirement_repo(self.orm_repo.clone())
                .build(),
        )
    }
}

impl IServiceProvider<Arc<dyn PriorityService>> for ServiceProviderScoped {
    fn provide(&self) -> Arc<dyn PriorityService> {
        Arc::new(
            PriorityServiceImpl::builder()
                .priority_repo(self.orm_repo.clone())
                .requirement_repo(self.orm_repo.clone())
                .build(),
        )
    }
}

impl IServiceProvider<Arc<dyn CommentService>> for ServiceProviderScoped {
    fn provide(&self) -> Arc<dyn CommentService> {
        let broadcaster = WsCommentBroadcaster::builder()
            .ws_sender(self.sp.ws_manager.command_sender.clone())
            .build();
        Arc::new(
            CommentServiceImpl::builder()
                .comment_repo(self.orm_repo.clone())
                .requirement_repo(self.orm_repo.clone())
                .broadcaster(Arc::new(broadcaster))
                .build(),
        )
    }
}

impl IServiceProvider<Arc<dyn AttachmentService>> for ServiceProviderScoped {
    fn provide(&self) -> Arc<dyn AttachmentService> {
        Arc::new(
            AttachmentServiceImpl::builder()
                .attachment_repo(self.orm_repo.clone())
                .requirement_repo(self.orm_repo.clone())
                .storage(self.sp.object_storage.clone())
                .build(),
        )
    }
}

impl IServiceProvider<Arc<dyn NotificationService>> for ServiceProviderScoped {
    fn provide(&self) -> Arc<dyn NotificationService> {
        Arc::new(
            NotificationServiceImpl::builder()
                .notification_repo(self.orm_repo.clone())
                .build(),
        )
    }
}
