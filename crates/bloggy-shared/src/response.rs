//! Response envelopes: screen state, admin actions and problem details.

use serde::{Deserialize, Serialize};

use crate::dto::NotificationDto;

/// Result of an admin action: the affected record and a one-line summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse<T> {
    pub data: T,
    pub message: String,
}

impl<T> ActionResponse<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
        }
    }
}

/// Phase of a screen's load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenState {
    Loading,
    Loaded,
    Failed,
}

/// A screen's view state plus the notifications it raised.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenResponse<T> {
    pub state: ScreenState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub notifications: Vec<NotificationDto>,
}

impl<T> ScreenResponse<T> {
    pub fn loading() -> Self {
        Self {
            state: ScreenState::Loading,
            data: None,
            error: None,
            notifications: Vec::new(),
        }
    }

    pub fn loaded(data: T) -> Self {
        Self {
            state: ScreenState::Loaded,
            data: Some(data),
            error: None,
            notifications: Vec::new(),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            state: ScreenState::Failed,
            data: None,
            error: Some(error.into()),
            notifications: Vec::new(),
        }
    }

    pub fn with_notifications(mut self, notifications: Vec<NotificationDto>) -> Self {
        self.notifications = notifications;
        self
    }
}

/// Problem details body (RFC 7807) for every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub error_type: String,
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>) -> Self {
        Self {
            error_type: "about:blank".to_string(),
            title: title.into(),
            status,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(404, "Not Found").with_detail(detail)
    }

    pub fn wrong_password() -> Self {
        Self::new(401, "Unauthorized").with_detail("Invalid password")
    }

    /// 422 listing every failed field check.
    pub fn validation(errors: &[String]) -> Self {
        Self::new(422, "Validation Failed").with_detail(errors.join(", "))
    }

    pub fn bad_gateway() -> Self {
        Self::new(502, "Bad Gateway").with_detail("The post store could not be reached.")
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error")
    }
}
