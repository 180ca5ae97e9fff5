pub mod api;
pub mod config;
pub mod domain;
pub mod state;
pub mod templates;
