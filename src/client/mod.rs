// File: ./src/client/mod.rs
pub mod auth;
pub mod cache;
pub mod core;
pub mod gateway;
pub mod middleware;

pub use crate::client::auth::Credentials;
pub use crate::client::cache::SublistCache;
pub use crate::client::core::{DEFAULT_API_URL, TrelloClient};
pub use crate::client::gateway::BoardGateway;
