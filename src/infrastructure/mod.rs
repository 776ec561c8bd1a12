// src/infrastructure/mod.rs
pub mod config;
pub mod notehub;

pub use config::Config;
pub use notehub::{ClientConfig, NotehubClient};
