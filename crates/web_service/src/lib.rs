pub mod controllers;
pub mod dto;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
pub mod validator;

pub use server::AppState;
