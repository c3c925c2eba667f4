//! Request middleware.
//!
//! Purpose: Define middleware components for request lifecycle concerns,
//! currently request tracing.

pub mod trace;

pub use trace::Trace;
