pub mod action_log;
pub mod attachment;
pub mod category;
pub mod comment;
pub mod notification;
pub mod priority;
pub mod requirement;
pub mod requirement_type;

#[rustfmt::skip]
pub use {
    action_log::RequirementActionLog,
    attachment::Attachment,
    category::Category,
    comment::Comment,
    notification::Notification,
    priority::Priority,
    requirement::Requirement,
    requirement_type::RequirementType,
};
