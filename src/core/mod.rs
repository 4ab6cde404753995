//! Core access point logic

pub mod credentials;
pub mod error;
pub mod manager;
pub mod templates;
pub mod types;
