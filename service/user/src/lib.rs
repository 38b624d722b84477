mod auth;
mod user;

#[rustfmt::skip]
pub use {
    auth::AuthServiceImpl,
    user::UserServiceImpl,
};
