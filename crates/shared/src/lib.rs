//! Shared configuration and error types for Filedrop.
//!
//! This crate provides common types used across all other crates:
//! - Application configuration (server + storage sections)
//! - Backend mode selection from credential presence
//! - Application-wide error types

pub mod config;
pub mod error;

pub use config::{AppConfig, BackendMode, S3Config, ServerConfig, StorageConfig};
pub use error::{AppError, AppResult};
