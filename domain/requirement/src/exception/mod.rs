use uuid::Uuid;

pub type RequirementResult<T> = Result<T, RequirementException>;

#[derive(Debug, thiserror::Error)]
pub enum RequirementException {
    #[error("Requirement {id} not found.")]
    RequirementNotFound { id: Uuid },

    #[error("Requirement not found or is not deleted.")]
    NotDeleted { id: Uuid },

    #[error("The selected category does not belong to the specified type.")]
    CategoryTypeMismatch {
        category_id: i32,
        requirement_type_id: i32,
    },

    #[error("Category {id} not found.")]
    CategoryNotFound { id: i32 },

    #[error("Requirement type {id} not found.")]
    RequirementTypeNotFound { id: i32 },

    #[error("Requirement type {id} does not exist.")]
    InvalidRequirementType { id: i32 },

    #[error("Priority {id} not found.")]
    PriorityNotFound { id: i32 },

    #[error("Priority {id} does not exist.")]
    InvalidPriority { id: i32 },

    #[error("{lookup} {id} is still in use.")]
    LookupInUse { lookup: &'static str, id: i32 },

    #[error("User {id} does not exist.")]
    UserNotFound { id: Uuid },

    #[error("Comment {id} not found.")]
    CommentNotFound { id: Uuid },

    #[error("Attachment {id} not found.")]
    AttachmentNotFound { id: Uuid },

    #[error("Notification {id} not found.")]
    NotificationNotFound { id: Uuid },

    #[error("Requirement {requirement_id} already has {limit} attachments.")]
    AttachmentLimit { requirement_id: Uuid, limit: u64 },

    #[error("File is empty, no need to upload.")]
    EmptyFile,

    #[error("Page must be at least 1 and size between 1 and 100.")]
    InvalidPagination,

    #[error("{message}")]
    Validation { message: String },

    #[error("{reason}")]
    Forbidden { reason: String },

    #[error("Requirement internal error: {source}")]
    InternalError {
        #[source]
        source: anyhow::Error,
    },
}

impl RequirementException {
    /// Stable machine readable code.
    pub fn code(&self) -> &'static str {
        use RequirementException::*;
        match self {
            RequirementNotFound { .. } | NotDeleted { .. } => "REQUIREMENT_NOT_FOUND",
            CategoryTypeMismatch { .. } => "CATEGORY_TYPE_MISMATCH",
            CategoryNotFound { .. } => "CATEGORY_NOT_FOUND",
            RequirementTypeNotFound { .. } => "REQUIREMENT_TYPE_NOT_FOUND",
            InvalidRequirementType { .. } => "INVALID_REQUIREMENT_TYPE",
            PriorityNotFound { .. } => "PRIORITY_NOT_FOUND",
            InvalidPriority { .. } => "INVALID_PRIORITY",
            LookupInUse { .. } => "LOOKUP_IN_USE",
            UserNotFound { .. } => "USER_NOT_FOUND",
            CommentNotFound { .. } => "COMMENT_NOT_FOUND",
            AttachmentNotFound { .. } => "ATTACHMENT_NOT_FOUND",
            NotificationNotFound { .. } => "NOTIFICATION_NOT_FOUND",
            AttachmentLimit { .. } => "ATTACHMENT_LIMIT",
            EmptyFile => "EMPTY_FILE",
            InvalidPagination => "INVALID_PAGINATION",
            Validation { .. } => "VALIDATION_ERROR",
            Forbidden { .. } => "FORBIDDEN",
            InternalError { .. } => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl From<anyhow::Error> for RequirementException {
    fn from(source: anyhow::Error) -> Self {
        Self::InternalError { source }
    }
}
