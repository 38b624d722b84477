use std::sync::Arc;

use actix_web::{delete, get, post, put, web};
use domain_requirement::{
    command::{CommentActor, CreateCommentCommand},
    model::entity::Comment,
    service::CommentService,
};

use super::{
    dtos::{CreateCommentDto, UpdateCommentDto},
    extract_uuid, ApiResponder, ApiResponderResult,
};
use crate::infrastructure::{middleware::UserInfo, IServiceProvider, ServiceProviderScoped};

fn actor(user_info: &UserInfo) -> CommentActor {
    CommentActor {
        user_id: user_info.id,
        user_name: user_info.user_name.to_owned(),
        is_admin: user_info.is_admin(),
    }
}

#[post("api/Comments")]
pub async fn create_comment(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
    dto: web::Json<CreateCommentDto>,
) -> ApiResponderResult<Comment> {
    let service: Arc<dyn CommentService> = sp.provide();
    let dto = dto.into_inner();
    let command = CreateCommentCommand {
        requirement_id: dto.requirement_id,
        description: dto.description,
    };
    let comment = service.create_comment(command, &actor(&user_info)).await?;
    Ok(ApiResponder::with_message("Comment created successfully.", comment))
}

#[get("api/Comments/{requirement_id}")]
pub async fn get_comments(
    sp: ServiceProviderScoped,
    _user_info: UserInfo,
    requirement_id: web::Path<String>,
) -> ApiResponderResult<Vec<Comment>> {
    let service: Arc<dyn CommentService> = sp.provide();
    Ok(ApiResponder::ok(service.get_comments(extract_uuid(&requirement_id)?).await?))
}

#[put("api/Comments/{id}")]
pub async fn update_comment(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
    id: web::Path<String>,
    dto: web::Json<UpdateCommentDto>,
) -> ApiResponderResult<Comment> {
    let service: Arc<dyn CommentService> = sp.provide();
    let comment = service
        .update_comment(extract_uuid(&id)?, &dto.description, &actor(&user_info))
        .await?;
    Ok(ApiResponder::with_message("Comment updated successfully.", comment))
}

#[delete("api/Comments/{id}")]
pub async fn delete_comment(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
    id: web::Path<String>,
) -> ApiResponderResult<()> {
    let service: Arc<dyn CommentService> = sp.provide();
    service.delete_comment(extract_uuid(&id)?, &actor(&user_info)).await?;
    Ok(ApiResponder::message("Comment deleted successfully."))
}
