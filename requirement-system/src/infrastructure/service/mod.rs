mod comment_broadcaster;
mod email;
mod identity;
mod storage;

pub mod prelude {
    #[rustfmt::skip]
    pub use super::{
        comment_broadcaster::WsCommentBroadcaster,
        email::SmtpEmailService,
        identity::JwtIdentityProvider,
        storage::ObjectStorage,
    };
}
