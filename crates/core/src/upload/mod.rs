//! Upload service for incoming file batches.
//!
//! This module provides the business logic for multipart uploads:
//! - Batch validation (empty batches are rejected)
//! - Per-file size ceiling enforcement
//! - Concurrent persistence with caller-order results
//! - Preview URL and image classification per stored file

mod error;
mod service;
mod types;

pub use error::UploadError;
pub use service::UploadService;
pub use types::{IncomingFile, UploadOutcome, UploadResult};
