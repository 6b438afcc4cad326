//! Project records and their persistence
//!
//! `ProjectStore` is the seam the API depends on; `SqliteProjectStore` is the
//! production implementation over a sqlx pool.

pub mod database;
pub mod store;
pub mod types;

pub use database::SqliteProjectStore;
pub use store::{ProjectQuery, ProjectStore, SortOrder, StoreError};
pub use types::{NewProject, Project};
