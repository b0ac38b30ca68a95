//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped fetches and form state and delegates
//! decisions to `state` and `util`, rendering pieces to `components`.

pub mod admin;
pub mod article;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
