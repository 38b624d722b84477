pub mod user;

#[rustfmt::skip]
pub use {
    user::User,
};
