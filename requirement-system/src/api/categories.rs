use std::sync::Arc;

use actix_web::{delete, get, post, put, web};
use domain_requirement::{model::entity::Category, service::CategoryService};
use domain_user::model::vo::Role;

use super::{dtos::CategoryDto, ApiResponder, ApiResponderResult};
use crate::infrastructure::{middleware::UserInfo, IServiceProvider, ServiceProviderScoped};

#[get("api/Categories")]
pub async fn get_all_categories(
    sp: ServiceProviderScoped,
    _user_info: UserInfo,
) -> ApiResponderResult<Vec<Category>> {
    let service: Arc<dyn CategoryService> = sp.provide();
    Ok(ApiResponder::ok(service.get_all_categories().await?))
}

#[get("api/Categories/by-requirement-type/{id}")]
pub async fn get_categories_by_requirement_type(
    sp: ServiceProviderScoped,
    _user_info: UserInfo,
    id: web::Path<i32>,
) -> ApiResponderResult<Vec<Category>> {
    let service: Arc<dyn CategoryService> = sp.provide();
    Ok(ApiResponder::ok(service.get_categories_by_requirement_type(id.into_inner()).await?))
}

#[get("api/Categories/{id}")]
pub async fn get_category(
    sp: ServiceProviderScoped,
    _user_info: UserInfo,
    id: web::Path<i32>,
) -> ApiResponderResult<Category> {
    let service: Arc<dyn CategoryService> = sp.provide();
    Ok(ApiResponder::ok(service.get_category(id.into_inner()).await?))
}

#[post("api/Categories")]
pub async fn create_category(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
    dto: web::Json<CategoryDto>,
) -> ApiResponderResult<Category> {
    user_info.require_any_role(&[Role::Admin])?;
    let service: Arc<dyn CategoryService> = sp.provide();
    let category = service.create_category(dto.into_inner().into()).await?;
    Ok(ApiResponder::with_message("Category created successfully.", category))
}

#[put("api/Categories/{id}")]
pub async fn update_category(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
    id: web::Path<i32>,
    dto: web::Json<CategoryDto>,
) -> ApiResponderResult<Category> {
    user_info.require_any_role(&[Role::Admin])?;
    let service: Arc<dyn CategoryService> = sp.provide();
    let category = service.update_category(id.into_inner(), dto.into_inner().into()).await?;
    Ok(ApiResponder::with_message("Category updated successfully.", category))
}

#[delete("api/Categories/{id}")]
pub async fn delete_category(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
    id: web::Path<i32>,
) -> ApiResponderResult<()> {
    user_info.require_any_role(&[Role::Admin])?;
    let service: Arc<dyn CategoryService> = sp.provide();
    service.delete_category(id.into_inner()).await?;
    Ok(ApiResponder::message("Category deleted successfully."))
}
