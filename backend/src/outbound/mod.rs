//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! The single adapter here is a thin reqwest translator for the
//! `DirectorySource` port. Adapters convert between domain types and
//! transport representations; they contain no business logic.

pub mod jsonplaceholder;
