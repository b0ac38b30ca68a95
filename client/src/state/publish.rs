//! Draft model for the admin publish form.

#[cfg(test)]
#[path = "publish_test.rs"]
mod publish_test;

use crate::config::{ATTACHMENT_EXTENSIONS, DEFAULT_PUBLISH_CATEGORY};
use crate::net::error::{ApiError, NETWORK_ERROR};

pub const PUBLISHED: &str = "发布成功！";
pub const MISSING_FIELDS: &str = "标题和内容不能为空";
pub const UNSUPPORTED_ATTACHMENT: &str = "附件格式不受支持，服务器将忽略该文件";

/// Text fields of an article being written. The attachment itself is a
/// browser object held by the page; only its name lives here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublishDraft {
    pub title: String,
    pub content: String,
    pub category: String,
    pub attachment_name: Option<String>,
}

impl Default for PublishDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            category: DEFAULT_PUBLISH_CATEGORY.to_owned(),
            attachment_name: None,
        }
    }
}

impl PublishDraft {
    /// Title and body are required.
    ///
    /// # Errors
    ///
    /// Returns the message to show when either is blank.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() || self.content.trim().is_empty() {
            return Err(MISSING_FIELDS);
        }
        Ok(())
    }

    /// Multipart text fields in submission order; the file part is added
    /// separately as `attachment`.
    pub fn form_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("title", self.title.as_str()),
            ("content", self.content.as_str()),
            ("category", self.category.as_str()),
        ]
    }

    /// Warning for an attachment the server will drop, if any.
    pub fn attachment_warning(&self) -> Option<&'static str> {
        let name = self.attachment_name.as_deref()?;
        (!attachment_allowed(name)).then_some(UNSUPPORTED_ATTACHMENT)
    }
}

/// Whether the server keeps a file with this name.
pub fn attachment_allowed(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| ATTACHMENT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Banner shown after a publish attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublishNotice {
    Success(String),
    Failure(String),
}

impl PublishNotice {
    pub fn from_result(result: &Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => Self::Success(PUBLISHED.to_owned()),
            Err(ApiError::Transport(_)) => Self::Failure(NETWORK_ERROR.to_owned()),
            Err(e) => Self::Failure(format!("发布失败: {}", e.user_message("未知错误"))),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Failure(text) => text,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
