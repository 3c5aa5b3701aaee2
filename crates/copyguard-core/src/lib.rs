//! CopyGuard Core
//!
//! Core types and utilities shared across CopyGuard components.
//!
//! This crate provides:
//! - The slide and warning records exchanged with callers
//! - Legal categories and severity tiers
//! - Error types and result handling
//! - Lenient decoding of slide batches from JSON

pub mod error;
pub mod input;
pub mod types;

pub use error::{Error, Result};
pub use input::{slides_from_json, slides_from_str};
pub use types::{Category, Severity, Slide, SlideId, Warning};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{Category, Severity, Slide, SlideId, Warning};
}
