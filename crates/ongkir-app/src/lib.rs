//! Application service layer - input validation, config, estimate use cases

pub mod app;
pub mod config;
pub mod validation;
