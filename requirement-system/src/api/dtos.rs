use actix_easy_multipart::{tempfile::Tempfile, text::Text, MultipartForm};
use chrono::{DateTime, Utc};
use domain_requirement::command::{
    CategoryCommand, CreateRequirementCommand, UpdateRequirementCommand,
};
use domain_user::{
    command::{RegisterProfile, RegisterUserCommand, ResetPasswordCommand},
    model::{
        entity::User,
        vo::{Role, UserProfile},
    },
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(flatten)]
    pub profile: RegisterProfileDto,
}

/// Selected by `userType`.
#[derive(Deserialize)]
#[serde(tag = "userType", rename_all = "camelCase")]
pub enum RegisterProfileDto {
    Internal {
        position: String,
        department: String,
    },
    External {
        cuil: String,
        company: String,
        description: String,
    },
}

impl From<RegisterUserDto> for RegisterUserCommand {
    fn from(dto: RegisterUserDto) -> Self {
        let profile = match dto.profile {
            RegisterProfileDto::Internal {
                position,
                department,
            } => RegisterProfile::Internal {
                position,
                department,
            },
            RegisterProfileDto::External {
                cuil,
                company,
                description,
            } => RegisterProfile::External {
                cuil,
                company,
                description,
            },
        };
        RegisterUserCommand {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            password: dto.password,
            confirm_password: dto.confirm_password,
            profile,
        }
    }
}

#[derive(Deserialize)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmEmailQuery {
    pub user_id: String,
    pub token: String,
}

#[derive(Deserialize)]
pub struct ForgotPasswordDto {
    pub email: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordDto {
    pub email: String,
    pub token: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl From<ResetPasswordDto> for ResetPasswordCommand {
    fn from(dto: ResetPasswordDto) -> Self {
        ResetPasswordCommand {
            email: dto.email,
            token: dto.token,
            new_password: dto.new_password,
            confirm_password: dto.confirm_password,
        }
    }
}

/// User as shown to clients, without credentials.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub user_name: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_enabled: bool,
    pub email_confirmed: bool,
    pub image: Option<String>,
    pub role: Option<Role>,
    pub profile: UserProfile,
    pub created_time: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            role: user.role(),
            id: user.id,
            user_name: user.user_name,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            is_enabled: user.is_enabled,
            email_confirmed: user.email_confirmed,
            image: user.image,
            profile: user.profile,
            created_time: user.created_time,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserStatusDto {
    pub email: String,
    pub is_enabled: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignDefaultImageResponse {
    pub updated_users: u64,
}

#[derive(MultipartForm)]
pub struct UploadImageRequest {
    pub file: Tempfile,
}

#[derive(Serialize)]
pub struct UploadImageResponse {
    pub url: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequirementDto {
    pub subject: String,
    pub description: String,
    pub requirement_type_id: i32,
    pub category_id: i32,
    pub priority_id: Option<i32>,
    #[serde(default)]
    pub assigned_user_ids: Vec<Uuid>,
    #[serde(default)]
    pub related_requirement_ids: Vec<Uuid>,
}

impl From<CreateRequirementDto> for CreateRequirementCommand {
    fn from(dto: CreateRequirementDto) -> Self {
        CreateRequirementCommand {
            subject: dto.subject,
            description: dto.description,
            requirement_type_id: dto.requirement_type_id,
            category_id: dto.category_id,
            priority_id: dto.priority_id,
            assigned_user_ids: dto.assigned_user_ids,
            related_requirement_ids: dto.related_requirement_ids,
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequirementDto {
    pub subject: Option<String>,
    pub description: Option<String>,
    pub priority_id: Option<i32>,
    pub status: Option<String>,
}

impl From<UpdateRequirementDto> for UpdateRequirementCommand {
    fn from(dto: UpdateRequirementDto) -> Self {
        UpdateRequirementCommand {
            subject: dto.subject,
            description: dto.description,
            priority_id: dto.priority_id,
            status: dto.status,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub name: String,
    pub requirement_type_id: i32,
}

impl From<CategoryDto> for CategoryCommand {
    fn from(dto: CategoryDto) -> Self {
        CategoryCommand {
            name: dto.name,
            requirement_type_id: dto.requirement_type_id,
        }
    }
}

/// Body of the requirement type and priority endpoints.
#[derive(Deserialize)]
pub struct NameDto {
    pub name: String,
}

#[derive(Deserialize)]
pub struct PagingQuery {
    #[serde(default = "PagingQuery::default_page")]
    pub page: u64,
    #[serde(default = "PagingQuery::default_size")]
    pub size: u64,
}

impl PagingQuery {
    fn default_page() -> u64 {
        1
    }
    fn default_size() -> u64 {
        10
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentDto {
    pub requirement_id: Uuid,
    pub description: String,
}

#[derive(Deserialize)]
pub struct UpdateCommentDto {
    pub description: String,
}

#[derive(MultipartForm)]
pub struct UploadAttachmentRequest {
    pub file: Tempfile,
    #[multipart(rename = "commentId")]
    pub comment_id: Option<Text<Uuid>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_dto_picks_profile_by_user_type() {
        let dto: RegisterUserDto = serde_json::from_value(serde_json::json!({
            "firstName": "Ana",
            "lastName": "Gomez",
            "email": "ana@example.com",
            "password": "P@ss1",
            "confirmPassword": "P@ss1",
            "userType": "external",
            "cuil": "20-12345678-9",
            "company": "ACME",
            "description": "Supplier",
        }))
        .unwrap();
        let command = RegisterUserCommand::from(dto);
        assert_eq!(command.profile.role(), Role::External);
        assert!(matches!(
            command.profile,
            RegisterProfile::External { ref company, .. } if company == "ACME"
        ));
    }

    #[test]
    fn test_register_dto_requires_profile_fields() {
        let result = serde_json::from_value::<RegisterUserDto>(serde_json::json!({
            "firstName": "Ana",
            "lastName": "Gomez",
            "email": "ana@example.com",
            "password": "P@ss1",
            "confirmPassword": "P@ss1",
            "userType": "internal",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_create_requirement_dto_defaults_lists() {
        let dto: CreateRequirementDto = serde_json::from_value(serde_json::json!({
            "subject": "Printer",
            "description": "Jammed",
            "requirementTypeId": 1,
            "categoryId": 1,
        }))
        .unwrap();
        assert!(dto.priority_id.is_none());
        assert!(dto.assigned_user_ids.is_empty());
        assert!(dto.related_requirement_ids.is_empty());
    }
}
