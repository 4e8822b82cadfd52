//! Listing service for the file overview page.
//!
//! Turns backend descriptors into display-ready entries: display name,
//! category icon, and preview/download URLs.

mod service;
mod types;

pub use service::ListingService;
pub use types::ListingEntry;
