//! SQLite-backed project store
//!
//! Owns the connection pool for `projects` and translates `ProjectQuery`
//! into SQL so filtering, ordering and the limit all run inside SQLite.

use crate::config::DatabaseConfig;
use crate::project::store::{ProjectQuery, ProjectStore, SortOrder, StoreError, StoreResult};
use crate::project::types::{NewProject, Project};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    QueryBuilder, Sqlite,
};
use std::path::Path;

const PROJECT_COLUMNS: &str =
    "id, title, description, image_url, project_url, featured, created_at, updated_at";

/// Project store over a sqlx SQLite pool
#[derive(Debug, Clone)]
pub struct SqliteProjectStore {
    pool: SqlitePool,
}

impl SqliteProjectStore {
    /// Wrap an existing pool. The schema is assumed to exist.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (or create) the database file and initialize the schema
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let db_path = Path::new(&config.path);
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::Unavailable(format!(
                    "Failed to create database directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        tracing::info!("🗄️ Opening project database: {}", db_path.display());

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections.max(1))
            .connect_with(options)
            .await?;

        let store = Self::new(pool);
        store.init_schema().await?;

        tracing::info!("✅ Project database ready: {}", db_path.display());

        Ok(store)
    }

    /// Private in-memory database, used by tests and local tooling
    ///
    /// Pinned to one connection: every `:memory:` connection is its own database.
    pub async fn in_memory() -> StoreResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        let store = Self::new(pool);
        store.init_schema().await?;
        Ok(store)
    }

    /// Create the projects table and its listing index
    ///
    /// Safe to call multiple times (uses IF NOT EXISTS).
    pub async fn init_schema(&self) -> StoreResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS projects (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                image_url TEXT,
                project_url TEXT,
                featured BOOLEAN NOT NULL DEFAULT 0,
                created_at TIMESTAMP NOT NULL,
                updated_at TIMESTAMP NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_projects_featured_created ON projects(featured, created_at)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Render a query as SQL with bound parameters
fn build_find_many(query: &ProjectQuery) -> QueryBuilder<'static, Sqlite> {
    let mut builder = QueryBuilder::new(format!("SELECT {} FROM projects", PROJECT_COLUMNS));

    if let Some(featured) = query.featured {
        builder.push(" WHERE featured = ").push_bind(featured);
    }

    // julianday normalises 'YYYY-MM-DD HH:MM:SS' and RFC 3339 text onto one
    // time axis; raw text then orders sub-millisecond ties, id the rest
    builder.push(match query.order {
        SortOrder::Newest => " ORDER BY julianday(created_at) DESC, created_at DESC, id DESC",
        SortOrder::Oldest => " ORDER BY julianday(created_at) ASC, created_at ASC, id ASC",
    });

    if let Some(limit) = query.limit {
        builder.push(" LIMIT ").push_bind(i64::from(limit));
    }

    builder
}

#[async_trait]
impl ProjectStore for SqliteProjectStore {
    async fn find_many(&self, query: &ProjectQuery) -> StoreResult<Vec<Project>> {
        let mut builder = build_find_many(query);
        let projects = builder
            .build_query_as::<Project>()
            .fetch_all(&self.pool)
            .await?;
        Ok(projects)
    }

    async fn insert(&self, project: NewProject) -> StoreResult<Project> {
        let now = Utc::now();
        let record = Project {
            id: uuid::Uuid::new_v4().to_string(),
            title: project.title,
            description: project.description,
            image_url: project.image_url,
            project_url: project.project_url,
            featured: project.featured,
            created_at: project.created_at.unwrap_or(now),
            updated_at: now,
        };

        sqlx::query(
            r#"
            INSERT INTO projects (id, title, description, image_url, project_url, featured, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.id)
        .bind(&record.title)
        .bind(&record.description)
        .bind(&record.image_url)
        .bind(&record.project_url)
        .bind(record.featured)
        .bind(record.created_at)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await?;

        tracing::debug!("Inserted project {} ({})", record.id, record.title);

        Ok(record)
    }
}
