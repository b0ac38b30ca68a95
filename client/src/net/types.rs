//! Wire DTOs for the content API.
//!
//! DESIGN
//! ======
//! Every response is wrapped in [`ApiEnvelope`]; the `success` flag, not the
//! HTTP status, decides whether a call succeeded. Field names follow the
//! server's JSON verbatim so serde needs no renames beyond `role`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// The `{success, message?, data?}` wrapper around every API response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Split the envelope into its payload or an application-level rejection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] carrying the server message when
    /// `success` is false.
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        if self.success {
            Ok(self.data)
        } else {
            Err(ApiError::Rejected { message: self.message })
        }
    }

    /// Like [`into_result`](Self::into_result) but a successful envelope must
    /// also carry data.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `success` is false or `data` is
    /// absent.
    pub fn into_data(self) -> Result<T, ApiError> {
        let message = self.message.clone();
        self.into_result()?.ok_or(ApiError::Rejected { message })
    }
}

/// Parse a raw response body into an envelope.
///
/// # Errors
///
/// Unparsable bodies are transport failures, same as a dropped connection.
pub fn parse_envelope<T: serde::de::DeserializeOwned>(body: &str) -> Result<ApiEnvelope<T>, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Transport(format!("invalid response body: {e}")))
}

/// Treat an explicit JSON `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Account role. Anything the client does not recognize is a plain user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    #[serde(other)]
    User,
}

/// The signed-in account as returned by `/me` and `/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// A published article.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub content: String,
    /// Category tag; empty when the server stored none.
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    pub author_id: u64,
    /// Joined author username, when the server provides it.
    #[serde(default)]
    pub author_name: Option<String>,
    /// Stored attachment filename under the upload base.
    #[serde(default)]
    pub attachment: Option<String>,
    /// ISO-8601 creation time as emitted by the server.
    pub created_at: String,
}

/// Body of `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /register`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

/// Body of `POST /verify`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VerifyRequest {
    pub email: String,
    pub code: String,
}
