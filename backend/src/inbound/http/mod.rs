//! HTTP inbound adapter exposing REST endpoints.

pub mod comments;
pub mod health;
pub mod respond;
pub mod schemas;
pub mod state;
pub mod users;
