//! One-line user notices (errors and confirmations).

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use studio::{ClientError, Operation};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    /// The notice for a failed `operation`.
    pub fn from_error(err: &ClientError, operation: Operation, api_base: &str) -> Self {
        Self::error(err.notice(operation, api_base))
    }

    /// CSS modifier class.
    pub fn class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Error => "notice notice--error",
            NoticeKind::Success => "notice notice--success",
        }
    }
}
