//! Toast backend that renders notifications as tracing events
//!
//! Used by headless deployments where there is no UI to draw on; the
//! notification ends up in the service log instead.

use crate::toast::{dispatcher::ToastBackend, types::ToastOptions};

#[derive(Debug, Clone, Copy, Default)]
pub struct LogToastBackend;

impl ToastBackend for LogToastBackend {
    fn show(&self, title: &str, options: ToastOptions) {
        tracing::info!(
            kind = "default",
            title,
            description = options.description.as_deref().unwrap_or(""),
            "🔔 Toast"
        );
    }

    fn error(&self, title: &str, options: ToastOptions) {
        tracing::warn!(
            kind = "error",
            title,
            description = options.description.as_deref().unwrap_or(""),
            style = ?options.style,
            "🔔 Toast"
        );
    }

    fn success(&self, title: &str, options: ToastOptions) {
        tracing::info!(
            kind = "success",
            title,
            description = options.description.as_deref().unwrap_or(""),
            "🔔 Toast"
        );
    }
}
