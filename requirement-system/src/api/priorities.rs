use std::sync::Arc;

use actix_web::{delete, get, post, put, web};
use domain_requirement::{model::entity::Priority, service::PriorityService};
use domain_user::model::vo::Role;

use super::{dtos::NameDto, ApiResponder, ApiResponderResult};
use crate::infrastructure::{middleware::UserInfo, IServiceProvider, ServiceProviderScoped};

#[get("api/Priorities")]
pub async fn get_all_priorities(
    sp: ServiceProviderScoped,
    _user_info: UserInfo,
) -> ApiResponderResult<Vec<Priority>> {
    let service: Arc<dyn PriorityService> = sp.provide();
    Ok(ApiResponder::ok(service.get_all_priorities().await?))
}

#[get("api/Priorities/{id}")]
pub async fn get_priority(
    sp: ServiceProviderScoped,
    _user_info: UserInfo,
    id: web::Path<i32>,
) -> ApiResponderResult<Priority> {
    let service: Arc<dyn PriorityService> = sp.provide();
    Ok(ApiResponder::ok(service.get_priority(id.into_inner()).await?))
}

#[post("api/Priorities")]
pub async fn create_priority(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
    dto: web::Json<NameDto>,
) -> ApiResponderResult<Priority> {
    user_info.require_any_role(&[Role::Admin])?;
    let service: Arc<dyn PriorityService> = sp.provide();
    let priority = service.create_priority(&dto.name).await?;
    Ok(ApiResponder::with_message("Priority created successfully.", priority))
}

#[put("api/Priorities/{id}")]
pub async fn update_priority(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
    id: web::Path<i32>,
    dto: web::Json<NameDto>,
) -> ApiResponderResult<Priority> {
    user_info.require_any_role(&[Role::Admin])?;
    let service: Arc<dyn PriorityService> = sp.provide();
    let priority = service.update_priority(id.into_inner(), &dto.name).await?;
    Ok(ApiResponder::with_message("Priority updated successfully.", priority))
}

#[delete("api/Priorities/{id}")]
pub async fn delete_priority(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
    id: web::Path<i32>,
) -> ApiResponderResult<()> {
    user_info.require_any_role(&[Role::Admin])?;
    let service: Arc<dyn PriorityService> = sp.provide();
    service.delete_priority(id.into_inner()).await?;
    Ok(ApiResponder::message("Priority deleted successfully."))
}
