/// Cleans stored HTML before it is handed to a reader.
pub trait ContentSanitizer: Send + Sync {
    fn sanitize(&self, html: &str) -> String;
}

/// Returns content verbatim. Only safe while every author is trusted.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughSanitizer;

impl ContentSanitizer for PassthroughSanitizer {
    fn sanitize(&self, html: &str) -> String {
        html.to_string()
    }
}
