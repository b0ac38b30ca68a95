//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the navigation shell and listing chrome. Anything that
//! needs the session receives the store as a prop from the app shell.

pub mod article_card;
pub mod footer;
pub mod navbar;
pub mod spinner;
