//! Progress indicators for model calls

pub mod reporter;
