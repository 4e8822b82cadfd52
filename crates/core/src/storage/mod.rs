//! Storage backends for uploaded files using Apache OpenDAL.
//!
//! This module provides the storage abstraction the upload and listing
//! services are built on:
//! - [`StorageBackend`] - the capability interface (persist, list, delete,
//!   URL generation)
//! - [`LocalDiskBackend`] - local directory, static-serving URLs
//! - [`RemoteObjectBackend`] - S3-compatible bucket, presigned URLs
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     StorageBackend (trait)                       │
//! ├────────────────────────────────┬────────────────────────────────┤
//! │        LocalDiskBackend        │       RemoteObjectBackend      │
//! │  opendal Fs over upload dir    │  opendal S3 over bucket        │
//! │  /uploads/<key> static URLs    │  presigned GET URLs            │
//! └────────────────────────────────┴────────────────────────────────┘
//! ```

mod backend;
mod error;
pub mod key;
mod local;
mod remote;

pub use backend::{FileDescriptor, StorageBackend, UrlIntent};
pub use error::StorageError;
pub use local::LocalDiskBackend;
pub use remote::RemoteObjectBackend;
