use std::sync::Arc;

use actix_easy_multipart::MultipartFormConfig;
use actix_web::web;
use colored::Colorize;
use domain_user::service::UserService;
use tracing::{error, info, warn};

use crate::{
    api::{self, ws::comments_ws_handler, ApiError},
    infrastructure::{
        config::{build_config, SystemConfig},
        middleware::JwtValidation,
        telemetry::initialize_telemetry,
        IServiceProvider, ServiceProvider, ServiceProviderScoped,
    },
};

pub fn run() {
    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(x) => x,
        Err(e) => return eprintln!("{}: {}", "Cannot build tokio runtime".red(), e),
    };
    runtime.block_on(async_run());
}

pub async fn async_run() {
    let config = match build_config().and_then(|x| Ok(x.try_deserialize::<SystemConfig>()?)) {
        Ok(x) => x,
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build config".red(), e);
        }
    };

    if let Err(e) = initialize_telemetry(config.common.telemetry()) {
        return eprintln!("{}: {}", "Cannot build logger".red(), e);
    };

    let service_provider = match ServiceProvider::build(config).await {
        Ok(x) => Arc::new(x),
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build Service Provider".red(), e);
        }
    };

    ensure_admin(service_provider.clone()).await;

    tokio::select! {
        _ = initialize_web_host(service_provider) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Stopping Services (ctrl-c handling).");
        }
    }
}

/// Create the configured administrator account when it does not exist yet.
async fn ensure_admin(sp: Arc<ServiceProvider>) {
    let admin = sp.config().admin.clone();
    if admin.email().is_empty() || admin.password().is_empty() {
        warn!("No administrator configured, skipping admin account creation.");
        return;
    }
    let service: Arc<dyn UserService> = ServiceProviderScoped::new(sp).provide();
    match service.ensure_admin(admin.email(), admin.password()).await {
        Ok(()) => info!("Administrator account {} is ready.", admin.email()),
        Err(e) => error!("Cannot create administrator account {}: {e}", admin.email()),
    }
}

pub async fn initialize_web_host(sp: Arc<ServiceProvider>) {
    let host = sp.config().common.host();
    let bind = (host.bind_address().to_owned(), *host.bind_port());
    let upload_limit = *host.upload_limit();
    match actix_web::HttpServer::new(move || {
        let cors = actix_cors::Cors::default()
            .allow_any_origin()
            .allow_any_header()
            .allow_any_method()
            .max_age(86400);

        actix_web::App::new()
            .wrap(tracing_actix_web::TracingLogger::default())
            .wrap(cors)
            .app_data(MultipartFormConfig::default().total_limit(upload_limit))
            .app_data(web::JsonConfig::default().error_handler(|e, _| {
                ApiError::InvalidRequest(e.to_string()).into()
            }))
            .app_data(web::PathConfig::default().error_handler(|e, _| {
                ApiError::InvalidRequest(e.to_string()).into()
            }))
            .app_data(web::QueryConfig::default().error_handler(|e, _| {
                ApiError::InvalidRequest(e.to_string()).into()
            }))
            .app_data(web::Data::from(sp.clone()))
            .service(
                web::scope("")
                    .wrap(JwtValidation::new(sp.provide()))
                    .route("/ws/comments/{requirement_id}", web::get().to(comments_ws_handler))
                    .service(api::users::register)
                    .service(api::users::login)
                    .service(api::users::confirm_email)
                    .service(api::users::forgot_password)
                    .service(api::users::reset_password)
                    .service(api::users::get_profile)
                    .service(api::users::upload_image)
                    .service(api::admin::get_all_users)
                    .service(api::admin::get_internal_users)
                    .service(api::admin::get_external_users)
                    .service(api::admin::update_user_status)
                    .service(api::admin::assign_default_image)
                    .service(api::requirements::create_requirement)
                    .service(api::requirements::get_all_requirements)
                    .service(api::requirements::get_deleted_requirements)
                    .service(api::requirements::get_assigned_requirements)
                    .service(api::requirements::get_created_requirements)
                    .service(api::requirements::get_requirement)
                    .service(api::requirements::update_requirement)
                    .service(api::requirements::delete_requirement)
                    .service(api::requirements::restore_requirement)
                    .service(api::requirements::get_assigned_users)
                    .service(api::requirements::get_requirement_logs)
                    .service(api::categories::get_all_categories)
                    .service(api::categories::get_categories_by_requirement_type)
                    .service(api::categories::get_category)
                    .service(api::categories::create_category)
                    .service(api::categories::update_category)
                    .service(api::categories::delete_category)
                    .service(api::requirement_types::get_all_requirement_types)
                    .service(api::requirement_types::get_requirement_type)
                    .service(api::requirement_types::create_requirement_type)
                    .service(api::requirement_types::update_requirement_type)
                    .service(api::requirement_types::delete_requirement_type)
                    .service(api::priorities::get_all_priorities)
                    .service(api::priorities::get_priority)
                    .service(api::priorities::create_priority)
                    .service(api::priorities::update_priority)
                    .service(api::priorities::delete_priority)
                    .service(api::notifications::get_user_notifications)
                    .service(api::notifications::mark_as_read)
                    .service(api::comments::create_comment)
                    .service(api::comments::get_comments)
                    .service(api::comments::update_comment)
                    .service(api::comments::delete_comment)
                    .service(api::attachments::upload_attachment)
                    .service(api::attachments::get_attachments)
                    .service(api::attachments::delete_attachment),
            )
    })
    .bind(bind)
    {
        Ok(server) => match server.disable_signals().run().await {
            Ok(_) => info!("Web server stopped successfully."),
            Err(e) => error!("Web server into error: {}", e),
        },
        Err(e) => error!("Cannot bind web server: {}", e),
    }
}
