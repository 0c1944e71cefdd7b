//! Job search backend: proxies the RapidAPI jsearch service, normalizes and
//! filters its listings, and caches aggregate result counts.

pub mod config;
pub mod core;
pub mod types;
pub mod web;

pub use config::ConfigManager;
pub use web::{build_rocket, start_web_server};
