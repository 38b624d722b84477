mod auth;
mod email;
mod identity;
mod image;
mod user;

#[rustfmt::skip]
pub use {
    auth::AuthService,
    email::EmailService,
    identity::IdentityProvider,
    image::ImageService,
    user::UserService,
};
