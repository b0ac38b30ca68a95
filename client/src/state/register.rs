//! Two-step registration flow.
//!
//! DESIGN
//! ======
//! The flow is a small state machine independent of rendering:
//!
//! ```text
//! AwaitingDetails --details accepted--> AwaitingCode --code accepted--> (navigate to /login)
//!        ^   |                               ^   |
//!        +---+ mismatch / rejected           +---+ bad code / rejected
//! ```
//!
//! `begin_*` methods validate locally and return the request to send, or
//! `None` after recording a notice. `*_outcome` methods apply the server's
//! answer. There is no way back from `AwaitingCode` and no code resend.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use crate::config::VERIFY_CODE_LEN;
use crate::net::error::ApiError;
use crate::net::types::{RegisterRequest, VerifyRequest};

pub const PASSWORD_MISMATCH: &str = "两次密码不一致";
pub const CODE_SENT: &str = "验证码已发送，请查收邮件";
pub const REGISTER_FAILED: &str = "注册失败";
pub const VERIFY_FAILED: &str = "验证失败";
pub const CODE_FORMAT: &str = "请输入6位验证码";

/// Where the visitor is in the registration flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterStep {
    /// Collecting username, email, password and confirmation.
    AwaitingDetails,
    /// Details accepted; a code was emailed to `email`.
    AwaitingCode { email: String },
}

/// What the page should do after a verification answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerifyOutcome {
    GoToLogin,
    Stay,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFlow {
    step: RegisterStep,
    notice: Option<String>,
}

impl Default for RegisterFlow {
    fn default() -> Self {
        Self { step: RegisterStep::AwaitingDetails, notice: None }
    }
}

impl RegisterFlow {
    pub fn step(&self) -> &RegisterStep {
        &self.step
    }

    /// Informational or error text shown above the active form.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Email the code was sent to, once in the code step.
    pub fn pending_email(&self) -> Option<&str> {
        match &self.step {
            RegisterStep::AwaitingCode { email } => Some(email),
            RegisterStep::AwaitingDetails => None,
        }
    }

    /// Validate the details form. Mismatched passwords never reach the server.
    pub fn begin_details(&mut self, details: &RegisterRequest) -> Option<RegisterRequest> {
        if self.step != RegisterStep::AwaitingDetails {
            return None;
        }
        if details.password != details.confirm {
            self.notice = Some(PASSWORD_MISMATCH.to_owned());
            return None;
        }
        Some(details.clone())
    }

    /// Apply the server's answer to a details submission for `email`.
    pub fn details_outcome(&mut self, email: &str, result: Result<(), ApiError>) {
        if self.step != RegisterStep::AwaitingDetails {
            return;
        }
        match result {
            Ok(()) => {
                self.step = RegisterStep::AwaitingCode { email: email.to_owned() };
                self.notice = Some(CODE_SENT.to_owned());
            }
            Err(e) => self.notice = Some(e.user_message(REGISTER_FAILED)),
        }
    }

    /// Validate the code form: exactly six ASCII digits after trimming.
    pub fn begin_verify(&mut self, code: &str) -> Option<VerifyRequest> {
        let email = self.pending_email()?.to_owned();
        let code = code.trim();
        if code.len() != VERIFY_CODE_LEN || !code.bytes().all(|b| b.is_ascii_digit()) {
            self.notice = Some(CODE_FORMAT.to_owned());
            return None;
        }
        Some(VerifyRequest { email, code: code.to_owned() })
    }

    /// Apply the server's answer to a code submission.
    pub fn verify_outcome(&mut self, result: Result<(), ApiError>) -> VerifyOutcome {
        if self.pending_email().is_none() {
            return VerifyOutcome::Stay;
        }
        match result {
            Ok(()) => VerifyOutcome::GoToLogin,
            Err(e) => {
                self.notice = Some(e.user_message(VERIFY_FAILED));
                VerifyOutcome::Stay
            }
        }
    }
}
