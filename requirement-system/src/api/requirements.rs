use std::sync::Arc;

use actix_web::{delete, get, post, put, web};
use domain_requirement::{
    model::{
        entity::{Requirement, RequirementActionLog},
        vo::{AssignedUser, RequirementView},
    },
    service::RequirementService,
};
use domain_user::model::vo::Role;

use super::{
    dtos::{CreateRequirementDto, UpdateRequirementDto},
    extract_uuid, ApiResponder, ApiResponderResult,
};
use crate::infrastructure::{middleware::UserInfo, IServiceProvider, ServiceProviderScoped};

#[post("api/Requirements")]
pub async fn create_requirement(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
    dto: web::Json<CreateRequirementDto>,
) -> ApiResponderResult<Requirement> {
    let service: Arc<dyn RequirementService> = sp.provide();
    let requirement = service.create_requirement(dto.into_inner().into(), user_info.id).await?;
    Ok(ApiResponder::with_message("Requirement created successfully.", requirement))
}

#[get("api/Requirements")]
pub async fn get_all_requirements(
    sp: ServiceProviderScoped,
    _user_info: UserInfo,
) -> ApiResponderResult<Vec<RequirementView>> {
    let service: Arc<dyn RequirementService> = sp.provide();
    Ok(ApiResponder::ok(service.get_all_requirements_with_users().await?))
}

#[get("api/Requirements/deleted")]
pub async fn get_deleted_requirements(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
) -> ApiResponderResult<Vec<RequirementView>> {
    user_info.require_any_role(&[Role::Admin])?;
    let service: Arc<dyn RequirementService> = sp.provide();
    Ok(ApiResponder::ok(service.get_deleted_requirements().await?))
}

#[get("api/Requirements/assigned")]
pub async fn get_assigned_requirements(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
) -> ApiResponderResult<Vec<RequirementView>> {
    let service: Arc<dyn RequirementService> = sp.provide();
    Ok(ApiResponder::ok(service.get_assigned_requirements_by_user_id(user_info.id).await?))
}

#[get("api/Requirements/created")]
pub async fn get_created_requirements(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
) -> ApiResponderResult<Vec<RequirementView>> {
    let service: Arc<dyn RequirementService> = sp.provide();
    Ok(ApiResponder::ok(service.get_requirements_created_by_user_id(user_info.id).await?))
}

#[get("api/Requirements/{id}")]
pub async fn get_requirement(
    sp: ServiceProviderScoped,
    _user_info: UserInfo,
    id: web::Path<String>,
) -> ApiResponderResult<RequirementView> {
    let service: Arc<dyn RequirementService> = sp.provide();
    let id = extract_uuid(&id)?;
    Ok(ApiResponder::ok(service.get_requirement(id).await?))
}

#[put("api/Requirements/{id}")]
pub async fn update_requirement(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
    id: web::Path<String>,
    dto: web::Json<UpdateRequirementDto>,
) -> ApiResponderResult<Requirement> {
    let service: Arc<dyn RequirementService> = sp.provide();
    let id = extract_uuid(&id)?;
    let requirement =
        service.update_requirement(id, dto.into_inner().into(), user_info.id).await?;
    Ok(ApiResponder::with_message("Requirement updated successfully.", requirement))
}

#[delete("api/Requirements/{id}")]
pub async fn delete_requirement(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
    id: web::Path<String>,
) -> ApiResponderResult<()> {
    user_info.require_any_role(&[Role::Admin, Role::Internal])?;
    let service: Arc<dyn RequirementService> = sp.provide();
    service.delete_requirement(extract_uuid(&id)?, user_info.id).await?;
    Ok(ApiResponder::message("Requirement deleted successfully."))
}

#[post("api/Requirements/{id}/restore")]
pub async fn restore_requirement(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
    id: web::Path<String>,
) -> ApiResponderResult<()> {
    user_info.require_any_role(&[Role::Admin])?;
    let service: Arc<dyn RequirementService> = sp.provide();
    service.restore_requirement(extract_uuid(&id)?, user_info.id).await?;
    Ok(ApiResponder::message("Requirement restored successfully."))
}

#[get("api/Requirements/{id}/users")]
pub async fn get_assigned_users(
    sp: ServiceProviderScoped,
    _user_info: UserInfo,
    id: web::Path<String>,
) -> ApiResponderResult<Vec<AssignedUser>> {
    let service: Arc<dyn RequirementService> = sp.provide();
    Ok(ApiResponder::ok(service.get_users_assigned_to_requirement(extract_uuid(&id)?).await?))
}

#[get("api/Requirements/{id}/logs")]
pub async fn get_requirement_logs(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
    id: web::Path<String>,
) -> ApiResponderResult<Vec<RequirementActionLog>> {
    user_info.require_any_role(&[Role::Admin, Role::Internal])?;
    let service: Arc<dyn RequirementService> = sp.provide();
    Ok(ApiResponder::ok(service.get_requirement_logs(extract_uuid(&id)?).await?))
}
