//! Project record types
//!
//! Projects are owned by the showcase database. The API only reads them;
//! `NewProject` exists so seeding code and tests can populate the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A portfolio project as stored in the `projects` table
///
/// Serialized with camelCase keys (`createdAt`, `imageUrl`, ...) so the JSON
/// matches what the front end already consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// UUID v4 text
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    /// Promoted projects are shown on the landing page
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for a project
///
/// `created_at` defaults to now when left empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image_url: Option<String>,
    pub project_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl NewProject {
    /// Shorthand for a titled project with the given featured flag
    pub fn new(title: impl Into<String>, featured: bool) -> Self {
        Self {
            title: title.into(),
            featured,
            ..Default::default()
        }
    }

    /// Pin the creation timestamp
    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }
}
