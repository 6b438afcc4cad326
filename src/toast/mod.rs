//! Toast notifications
//!
//! A thin dispatch layer over a notification-display backend:
//! - `types`: request, variant and options
//! - `dispatcher`: variant switch, backend trait, `use_toast` handle
//! - `log_backend`: backend that writes toasts to the tracing log

pub mod dispatcher;
pub mod log_backend;
pub mod types;

pub use dispatcher::{use_toast, ToastBackend, Toaster, UseToast, DESTRUCTIVE_STYLE};
pub use log_backend::LogToastBackend;
pub use types::{ToastOptions, ToastRequest, ToastStyle, Variant};
