use std::sync::Arc;

use actix_web::{get, post, put, web};
use domain_user::{model::vo::Role, service::UserService};

use super::{
    dtos::{AssignDefaultImageResponse, UpdateUserStatusDto, UserDto},
    ApiResponder, ApiResponderResult,
};
use crate::infrastructure::{middleware::UserInfo, IServiceProvider, ServiceProviderScoped};

fn to_dtos(users: Vec<domain_user::model::entity::User>) -> Vec<UserDto> {
    users.into_iter().map(UserDto::from).collect()
}

#[get("api/Admin/users")]
pub async fn get_all_users(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
) -> ApiResponderResult<Vec<UserDto>> {
    user_info.require_any_role(&[Role::Admin])?;
    let service: Arc<dyn UserService> = sp.provide();
    Ok(ApiResponder::ok(to_dtos(service.get_all_users().await?)))
}

#[get("api/Admin/users/internal")]
pub async fn get_internal_users(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
) -> ApiResponderResult<Vec<UserDto>> {
    user_info.require_any_role(&[Role::Admin, Role::Internal])?;
    let service: Arc<dyn UserService> = sp.provide();
    Ok(ApiResponder::ok(to_dtos(service.get_internal_users().await?)))
}

#[get("api/Admin/users/external")]
pub async fn get_external_users(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
) -> ApiResponderResult<Vec<UserDto>> {
    user_info.require_any_role(&[Role::Admin])?;
    let service: Arc<dyn UserService> = sp.provide();
    Ok(ApiResponder::ok(to_dtos(service.get_external_users().await?)))
}

#[put("api/Admin/users/status")]
pub async fn update_user_status(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
    dto: web::Json<UpdateUserStatusDto>,
) -> ApiResponderResult<()> {
    user_info.require_any_role(&[Role::Admin])?;
    let service: Arc<dyn UserService> = sp.provide();
    service.update_user_status(&dto.email, dto.is_enabled).await?;
    Ok(ApiResponder::message("User status updated successfully."))
}

#[post("api/Admin/users/assign-default-image")]
pub async fn assign_default_image(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
) -> ApiResponderResult<AssignDefaultImageResponse> {
    user_info.require_any_role(&[Role::Admin])?;
    let service: Arc<dyn UserService> = sp.provide();
    let updated_users = service.assign_default_image().await?;
    Ok(ApiResponder::with_message(
        "Default image assigned to users without one.",
        AssignDefaultImageResponse { updated_users },
    ))
}
