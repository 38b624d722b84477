mod attachment;
mod comment;
mod lookup;
mod notification;
mod observer;
mod requirement;

#[rustfmt::skip]
pub use {
    attachment::{AttachmentService, AttachmentStorage},
    comment::{CommentBroadcaster, CommentService},
    lookup::{CategoryService, PriorityService, RequirementTypeService},
    notification::NotificationService,
    observer::{RequirementNotifier, RequirementObserver},
    requirement::RequirementService,
};
