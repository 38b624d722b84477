mod action_log;
mod attachment;
mod category;
mod comment;
mod notification;
mod requirement;

#[rustfmt::skip]
pub use {
    action_log::RequirementActionLogRepo,
    attachment::AttachmentRepo,
    category::CategoryRepo,
    comment::CommentRepo,
    notification::NotificationRepo,
    requirement::RequirementRepo,
};
