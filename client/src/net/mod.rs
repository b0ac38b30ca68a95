//! Networking modules for the content API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls, `types` defines the wire schema and envelope,
//! and `error` classifies failures into transport vs. rejection.

pub mod api;
pub mod error;
pub mod types;
