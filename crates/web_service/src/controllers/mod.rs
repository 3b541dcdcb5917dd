pub mod convert_controller;
pub mod health_controller;
