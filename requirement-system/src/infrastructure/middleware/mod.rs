mod authorization;

#[rustfmt::skip]
pub use authorization::{
    JwtValidation,
    UserInfo,
};
