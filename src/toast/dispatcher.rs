//! Variant-switching toast dispatcher
//!
//! Maps a `ToastRequest` onto exactly one of the backend's three display
//! primitives. The dispatcher itself never fails; a panicking backend
//! propagates to the caller.

use crate::toast::types::{ToastOptions, ToastRequest, ToastStyle, Variant};

/// Fixed width and text color for destructive toasts
pub const DESTRUCTIVE_STYLE: ToastStyle = ToastStyle {
    width: "356px",
    color: "red",
};

/// Notification-display library seam
pub trait ToastBackend {
    /// Neutral toast
    fn show(&self, title: &str, options: ToastOptions);
    /// Error-styled toast
    fn error(&self, title: &str, options: ToastOptions);
    /// Success-styled toast
    fn success(&self, title: &str, options: ToastOptions);
}

impl<B: ToastBackend + ?Sized> ToastBackend for &B {
    fn show(&self, title: &str, options: ToastOptions) {
        (**self).show(title, options)
    }

    fn error(&self, title: &str, options: ToastOptions) {
        (**self).error(title, options)
    }

    fn success(&self, title: &str, options: ToastOptions) {
        (**self).success(title, options)
    }
}

/// Dispatches toast requests to a display backend
#[derive(Debug, Clone)]
pub struct Toaster<B> {
    backend: B,
}

impl<B: ToastBackend> Toaster<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Show a toast, picking the primitive from the request's variant
    pub fn toast(&self, request: ToastRequest) {
        let ToastRequest {
            title,
            description,
            variant,
        } = request;

        match variant {
            Variant::Destructive => self.backend.error(
                &title,
                ToastOptions {
                    description,
                    style: Some(DESTRUCTIVE_STYLE),
                },
            ),
            Variant::Success => self.backend.success(
                &title,
                ToastOptions {
                    description,
                    style: None,
                },
            ),
            Variant::Default => self.backend.show(
                &title,
                ToastOptions {
                    description,
                    style: None,
                },
            ),
        }
    }
}

/// Call-site handle exposing the dispatch function as `toast`
pub struct UseToast<'a> {
    pub toast: Box<dyn Fn(ToastRequest) + 'a>,
}

/// Borrow a backend and hand back `{ toast }` for convenient calls
///
/// ```
/// use showcase::toast::{use_toast, LogToastBackend, ToastRequest};
///
/// let backend = LogToastBackend;
/// let handle = use_toast(&backend);
/// (handle.toast)(ToastRequest::new("Copied to clipboard"));
/// ```
pub fn use_toast<B: ToastBackend + ?Sized>(backend: &B) -> UseToast<'_> {
    let toaster = Toaster::new(backend);
    UseToast {
        toast: Box::new(move |request| toaster.toast(request)),
    }
}
