//! Shared host state.
//!
//! DESIGN
//! ======
//! `ProxyState` is injected into the forwarding handlers via the `State`
//! extractor. It holds one pooled HTTP client and the upstream origin; it is
//! cheap to clone.

use std::sync::Arc;

#[derive(Clone)]
pub struct ProxyState {
    pub client: reqwest::Client,
    /// Content API origin without a trailing slash.
    pub upstream: Arc<str>,
}

impl ProxyState {
    /// Build the forwarding client. Redirects are passed back to the browser
    /// rather than followed.
    ///
    /// # Errors
    ///
    /// Returns the builder error if the TLS backend cannot be initialised.
    pub fn new(upstream: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().redirect(reqwest::redirect::Policy::none()).build()?;
        Ok(Self { client, upstream: Arc::from(upstream) })
    }
}
