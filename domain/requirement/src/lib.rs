pub mod command;
pub mod exception;
#[cfg(feature = "mock")]
pub mod mock;
pub mod model;
pub mod repository;
pub mod service;

/// Most attachments a requirement may hold.
pub const MAX_ATTACHMENTS_PER_REQUIREMENT: u64 = 5;
