mod attachment;
mod comment;
mod lookup;
mod notification;
mod notifier;
mod observer;
mod requirement;

#[rustfmt::skip]
pub use {
    attachment::AttachmentServiceImpl,
    comment::CommentServiceImpl,
    lookup::{CategoryServiceImpl, PriorityServiceImpl, RequirementTypeServiceImpl},
    notification::NotificationServiceImpl,
    notifier::RequirementNotifierImpl,
    observer::{ActionLogObserver, EmailNotificationObserver, InternalNotificationObserver},
    requirement::RequirementServiceImpl,
};
