//! Showcase: featured-projects API and toast dispatcher
//!
//! Two independent pieces of a portfolio site: an HTTP endpoint listing the
//! newest featured projects from SQLite, and a small dispatcher that routes
//! toast notifications to a display backend by variant.

// Core configuration and setup
pub mod config;

// Project records and the persistence seam
pub mod project;

// HTTP API layer - featured projects listing
pub mod api;

// Toast notification dispatch
pub mod toast;

// Server setup and initialization
pub mod server;

// Re-export commonly used types for external consumers
pub use project::{Project, ProjectStore, SqliteProjectStore};
pub use server::{create_router, start_server};
pub use toast::{use_toast, ToastRequest, Toaster, Variant};
