//! Notification surface.
//!
//! The core emits human-readable notices; rendering them (toasts, banners)
//! is the view layer's job. There are no structured error codes here —
//! callers that need to branch on outcomes use the `Result`s.

use serde::{Deserialize, Serialize};

/// Notice severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A human-readable notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    /// Severity.
    pub kind: NoticeKind,
    /// Short heading (e.g., "Login successful").
    pub title: String,
    /// Longer body (e.g., "Welcome back!").
    pub body: String,
}

impl Notice {
    /// Create a success notice.
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Create an error notice.
    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            body: body.into(),
        }
    }
}
