pub mod action;
pub mod change;
pub mod lookup;
pub mod payload;
pub mod status;
pub mod view;

#[rustfmt::skip]
pub use {
    action::RequirementAction,
    change::FieldChange,
    lookup::LookupRef,
    payload::NotificationPayload,
    status::RequirementStatus,
    view::{AssignedUser, RequirementView, UserNotificationView},
};
