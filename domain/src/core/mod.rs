//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: the user-facing error taxonomy
//! - [`string`]: UTF-8 safe clipping helpers

pub mod error;
pub mod string;
