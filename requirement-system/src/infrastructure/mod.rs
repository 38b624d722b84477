mod service_provider;
pub use service_provider::{IServiceProvider, ServiceProvider, ServiceProviderScoped};

mod websocket;
pub use websocket::WsManager;

pub mod config;
pub mod middleware;
pub mod telemetry;

mod database;
mod repository;
mod service;
