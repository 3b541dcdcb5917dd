pub mod api;
pub mod client_trait;
pub mod config;
pub mod error;

pub use api::client::GroqClient;
pub use client_trait::ChatCompletionClient;
pub use config::Config;
pub use error::GroqError;
