//! JSONPlaceholder outbound adapters.
//!
//! This module provides a thin HTTP implementation of the
//! `DirectorySource` port.

mod dto;
mod http_source;

pub use http_source::{BuildError, JsonPlaceholderHttpSource};
