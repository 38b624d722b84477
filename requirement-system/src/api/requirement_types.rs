use std::sync::Arc;

use actix_web::{delete, get, post, put, web};
use domain_requirement::{model::entity::RequirementType, service::RequirementTypeService};
use domain_user::model::vo::Role;

use super::{dtos::NameDto, ApiResponder, ApiResponderResult};
use crate::infrastructure::{middleware::UserInfo, IServiceProvider, ServiceProviderScoped};

#[get("api/RequirementTypes")]
pub async fn get_all_requirement_types(
    sp: ServiceProviderScoped,
    _user_info: UserInfo,
) -> ApiResponderResult<Vec<RequirementType>> {
    let service: Arc<dyn RequirementTypeService> = sp.provide();
    Ok(ApiResponder::ok(service.get_all_requirement_types().await?))
}

#[get("api/RequirementTypes/{id}")]
pub async fn get_requirement_type(
    sp: ServiceProviderScoped,
    _user_info: UserInfo,
    id: web::Path<i32>,
) -> ApiResponderResult<RequirementType> {
    let service: Arc<dyn RequirementTypeService> = sp.provide();
    Ok(ApiResponder::ok(service.get_requirement_type(id.into_inner()).await?))
}

#[post("api/RequirementTypes")]
pub async fn create_requirement_type(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
    dto: web::Json<NameDto>,
) -> ApiResponderResult<RequirementType> {
    user_info.require_any_role(&[Role::Admin])?;
    let service: Arc<dyn RequirementTypeService> = sp.provide();
    let requirement_type = service.create_requirement_type(&dto.name).await?;
    Ok(ApiResponder::with_message("Requirement type created successfully.", requirement_type))
}

#[put("api/RequirementTypes/{id}")]
pub async fn update_requirement_type(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
    id: web::Path<i32>,
    dto: web::Json<NameDto>,
) -> ApiResponderResult<RequirementType> {
    user_info.require_any_role(&[Role::Admin])?;
    let service: Arc<dyn RequirementTypeService> = sp.provide();
    let requirement_type = service.update_requirement_type(id.into_inner(), &dto.name).await?;
    Ok(ApiResponder::with_message("Requirement type updated successfully.", requirement_type))
}

#[delete("api/RequirementTypes/{id}")]
pub async fn delete_requirement_type(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
    id: web::Path<i32>,
) -> ApiResponderResult<()> {
    user_info.require_any_role(&[Role::Admin])?;
    let service: Arc<dyn RequirementTypeService> = sp.provide();
    service.delete_requirement_type(id.into_inner()).await?;
    Ok(ApiResponder::message("Requirement type deleted successfully."))
}
