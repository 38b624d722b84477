pub mod email;
pub mod profile;
pub mod role;
pub mod token;

#[rustfmt::skip]
pub use {
    email::EmailTemplate,
    profile::{ProfileKind, UserProfile},
    role::Role,
    token::TokenPurpose,
};
