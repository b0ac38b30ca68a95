//! API failure classes and their user-facing text.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Localized text for any transport failure.
pub const NETWORK_ERROR: &str = "网络错误";

/// Why an API call did not produce a result.
///
/// Authorization, validation, and server faults are not distinguished; they
/// all arrive as `success:false` and render the same way.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed or the body was not a valid envelope.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The server answered `success:false`.
    #[error("rejected: {}", .message.as_deref().unwrap_or("<no message>"))]
    Rejected { message: Option<String> },
}

impl ApiError {
    /// Text to show the user: the server's own message when it sent one,
    /// `fallback` when it did not, and [`NETWORK_ERROR`] for transport failures.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Transport(_) => NETWORK_ERROR.to_owned(),
            Self::Rejected { message: Some(message) } => message.clone(),
            Self::Rejected { message: None } => fallback.to_owned(),
        }
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
