use std::sync::Arc;

use actix_easy_multipart::MultipartForm;
use actix_web::{get, post, web};
use domain_user::{
    command::UploadImageCommand,
    service::{AuthService, UserService},
};
use uuid::Uuid;

use super::{
    dtos::{
        ConfirmEmailQuery, ForgotPasswordDto, LoginDto, LoginResponse, RegisterUserDto,
        ResetPasswordDto, UploadImageRequest, UploadImageResponse, UserDto,
    },
    extract_uuid, read_upload, ApiResponder, ApiResponderResult,
};
use crate::infrastructure::{middleware::UserInfo, IServiceProvider, ServiceProviderScoped};

#[post("api/Users/register")]
pub async fn register(
    sp: ServiceProviderScoped,
    dto: web::Json<RegisterUserDto>,
) -> ApiResponderResult<Uuid> {
    let service: Arc<dyn UserService> = sp.provide();
    let id = service.register(dto.into_inner().into()).await?;
    Ok(ApiResponder::with_message(
        "User registered successfully. Please check your email to confirm your account.",
        id,
    ))
}

#[post("api/Users/login")]
pub async fn login(
    sp: ServiceProviderScoped,
    dto: web::Json<LoginDto>,
) -> ApiResponderResult<LoginResponse> {
    let service: Arc<dyn AuthService> = sp.provide();
    let token = service.login(&dto.email, &dto.password).await?;
    Ok(ApiResponder::with_message("Login successful.", LoginResponse { token }))
}

#[get("api/Users/confirm-email")]
pub async fn confirm_email(
    sp: ServiceProviderScoped,
    query: web::Query<ConfirmEmailQuery>,
) -> ApiResponderResult<()> {
    let service: Arc<dyn UserService> = sp.provide();
    let user_id = extract_uuid(&query.user_id)?;
    service.confirm_email(user_id, &query.token).await?;
    Ok(ApiResponder::message("Email confirmed successfully."))
}

#[post("api/Users/forgot-password")]
pub async fn forgot_password(
    sp: ServiceProviderScoped,
    dto: web::Json<ForgotPasswordDto>,
) -> ApiResponderResult<()> {
    let service: Arc<dyn UserService> = sp.provide();
    service.send_password_reset_link(&dto.email).await?;
    Ok(ApiResponder::message("Password reset link has been sent to your email."))
}

#[post("api/Users/reset-password")]
pub async fn reset_password(
    sp: ServiceProviderScoped,
    dto: web::Json<ResetPasswordDto>,
) -> ApiResponderResult<()> {
    let service: Arc<dyn UserService> = sp.provide();
    service.reset_password(dto.into_inner().into()).await?;
    Ok(ApiResponder::message("Password has been reset successfully."))
}

#[get("api/Users/profile")]
pub async fn get_profile(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
) -> ApiResponderResult<UserDto> {
    let service: Arc<dyn UserService> = sp.provide();
    let user = service.get_profile(user_info.id).await?;
    Ok(ApiResponder::ok(user.into()))
}

#[post("api/Users/upload-image")]
pub async fn upload_image(
    sp: ServiceProviderScoped,
    user_info: UserInfo,
    form: MultipartForm<UploadImageRequest>,
) -> ApiResponderResult<UploadImageResponse> {
    let service: Arc<dyn UserService> = sp.provide();
    let (file_name, content) = read_upload(&form.file).await?;
    let url = service
        .upload_image(UploadImageCommand {
            user_id: user_info.id,
            file_name,
            content,
        })
        .await?;
    Ok(ApiResponder::with_message("Image uploaded successfully.", UploadImageResponse { url }))
}
