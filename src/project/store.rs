//! Persistence seam for project records
//!
//! Handlers depend on `dyn ProjectStore` rather than a concrete pool so the
//! database can be swapped for a fake in tests.

use crate::project::types::{NewProject, Project};
use async_trait::async_trait;

/// Errors surfaced by a project store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Message is passed through untouched
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("Project store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Ordering on `created_at`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Most recent first
    #[default]
    Newest,
    Oldest,
}

/// Filter, ordering and limit for `find_many`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectQuery {
    /// `None` matches both featured and non-featured projects
    pub featured: Option<bool>,
    pub order: SortOrder,
    /// `None` returns every match
    pub limit: Option<u32>,
}

impl ProjectQuery {
    /// Featured projects only, newest first, capped at `limit`
    pub fn featured(limit: u32) -> Self {
        Self {
            featured: Some(true),
            order: SortOrder::Newest,
            limit: Some(limit),
        }
    }
}

/// Read/write access to project records
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Find every project matching the query, ordered and limited
    async fn find_many(&self, query: &ProjectQuery) -> StoreResult<Vec<Project>>;

    /// Insert a project and return the stored record
    async fn insert(&self, project: NewProject) -> StoreResult<Project>;
}
