use std::sync::Arc;

use actix_easy_multipart::MultipartForm;
use actix_web::{delete, get, post, web};
use domain_requirement::{
    command::UploadAttachmentCommand, model::entity::Attachment, service::AttachmentService,
};

use super::{
    dtos::UploadAttachmentRequest, extract_uuid, read_upload, ApiResponder, ApiResponderResult,
};
use crate::infrastructure::{middleware::UserInfo, IServiceProvider, ServiceProviderScoped};

#[post("api/Attachments/{requirement_id}")]
pub async fn upload_attachment(
    sp: ServiceProviderScoped,
    _user_info: UserInfo,
    requirement_id: web::Path<String>,
    form: MultipartForm<UploadAttachmentRequest>,
) -> ApiResponderResult<Attachment> {
    let service: Arc<dyn AttachmentService> = sp.provide();
    let requirement_id = extract_uuid(&requirement_id)?;
    let (file_name, content) = read_upload(&form.file).await?;
    let attachment = service
        .upload_attachment(UploadAttachmentCommand {
            requirement_id,
            comment_id: form.comment_id.as_ref().map(|el| el.0),
            file_name,
            content,
        })
        .await?;
    Ok(ApiResponder::with_message("File uploaded successfully.", attachment))
}

#[get("api/Attachments/{requirement_id}")]
pub async fn get_attachments(
    sp: ServiceProviderScoped,
    _user_info: UserInfo,
    requirement_id: web::Path<String>,
) -> ApiResponderResult<Vec<Attachment>> {
    let service: Arc<dyn AttachmentService> = sp.provide();
    Ok(ApiResponder::ok(service.get_attachments(extract_uuid(&requirement_id)?).await?))
}

#[delete("api/Attachments/{id}")]
pub async fn delete_attachment(
    sp: ServiceProviderScoped,
    _user_info: UserInfo,
    id: web::Path<String>,
) -> ApiResponderResult<()> {
    let service: Arc<dyn AttachmentService> = sp.provide();
    service.delete_attachment(extract_uuid(&id)?).await?;
    Ok(ApiResponder::message("File deleted successfully."))
}
