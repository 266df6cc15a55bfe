use serde::Serialize;

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// A non-blocking, user-visible message raised by a controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub variant: NotificationVariant,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: NotificationVariant::Default,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: NotificationVariant::Destructive,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

const TRY_AGAIN: &str = "Please try again later.";

pub(crate) fn list_failed() -> Notification {
    Notification::failure("Failed to load blogs", TRY_AGAIN)
}

pub(crate) fn post_failed() -> Notification {
    Notification::failure(
        "Failed to load blog post",
        "The post may not exist or has been removed.",
    )
}

pub(crate) fn created() -> Notification {
    Notification::success(
        "Blog created",
        "Your blog post has been published successfully!",
    )
}

pub(crate) fn create_failed() -> Notification {
    Notification::failure("Failed to create blog", TRY_AGAIN)
}

pub(crate) fn updated() -> Notification {
    Notification::success(
        "Blog updated",
        "Your blog post has been updated successfully!",
    )
}

pub(crate) fn update_failed() -> Notification {
    Notification::failure("Failed to update blog", TRY_AGAIN)
}

pub(crate) fn deleted() -> Notification {
    Notification::success("Blog deleted", "The blog post has been removed.")
}

pub(crate) fn delete_failed() -> Notification {
    Notification::failure("Failed to delete blog", TRY_AGAIN)
}
