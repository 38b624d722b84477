mod manager;
mod session;

pub use manager::WsManager;
