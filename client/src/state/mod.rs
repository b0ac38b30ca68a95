//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `articles`, `register`, `publish`) so
//! individual pages depend on small focused models that carry no rendering
//! concerns and can be tested without a browser.

pub mod articles;
pub mod auth;
pub mod publish;
pub mod register;
