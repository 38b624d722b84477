use uuid::Uuid;

pub struct CreateRequirementCommand {
    pub subject: String,
    pub description: String,
    pub requirement_type_id: i32,
    pub category_id: i32,
    pub priority_id: Option<i32>,
    pub assigned_user_ids: Vec<Uuid>,
    pub related_requirement_ids: Vec<Uuid>,
}

/// Fields left `None` keep their current value.
#[derive(Default)]
pub struct UpdateRequirementCommand {
    pub subject: Option<String>,
    pub description: Option<String>,
    pub priority_id: Option<i32>,
    pub status: Option<String>,
}

pub struct CategoryCommand {
    pub name: String,
    pub requirement_type_id: i32,
}

pub struct CreateCommentCommand {
    pub requirement_id: Uuid,
    pub description: String,
}

/// Who is acting on a comment.
#[derive(Debug, Clone)]
pub struct CommentActor {
    pub user_id: Uuid,
    pub user_name: String,
    pub is_admin: bool,
}

pub struct UploadAttachmentCommand {
    pub requirement_id: Uuid,
    pub comment_id: Option<Uuid>,
    pub file_name: String,
    pub content: Vec<u8>,
}
