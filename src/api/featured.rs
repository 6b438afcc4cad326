//! Featured projects endpoint
//!
//! GET /api/projects/featured returns the newest featured projects for the
//! landing page.

use crate::{
    api::{
        error::{ApiError, ApiResult},
        AppState,
    },
    project::{Project, ProjectQuery},
};
use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;

/// Maximum number of projects the landing page shows
pub const FEATURED_LIMIT: u32 = 6;

/// Response body for the featured listing
#[derive(Debug, Serialize)]
pub struct FeaturedProjectsResponse {
    pub projects: Vec<Project>,
}

/// Create project listing routes
pub fn create_project_routes() -> Router<AppState> {
    Router::new().route("/api/projects/featured", get(featured_projects))
}

/// List featured projects
///
/// GET /api/projects/featured
/// Returns: { "projects": [...] } with at most 6 entries, newest `createdAt` first.
/// Any store failure becomes 500 { "error": "..." }.
async fn featured_projects(
    State(state): State<AppState>,
) -> ApiResult<Json<FeaturedProjectsResponse>> {
    let projects = state
        .store
        .find_many(&ProjectQuery::featured(FEATURED_LIMIT))
        .await
        .map_err(|e| {
            tracing::error!("❌ Failed to fetch featured projects: {}", e);
            ApiError::from(e)
        })?;

    tracing::debug!(
        count = projects.len(),
        ids = ?projects.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
        "📦 Fetched featured projects"
    );

    Ok(Json(FeaturedProjectsResponse { projects }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{
        NewProject, ProjectStore, SqliteProjectStore, StoreError,
    };
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::{Duration, TimeZone, Utc};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    /// Store whose every call fails with a fixed message
    struct FailingStore;

    #[async_trait]
    impl ProjectStore for FailingStore {
        async fn find_many(&self, _query: &ProjectQuery) -> Result<Vec<Project>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }

        async fn insert(&self, _project: NewProject) -> Result<Project, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    async fn seeded_state(featured: usize, plain: usize) -> AppState {
        let store = SqliteProjectStore::in_memory().await.unwrap();
        let base = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        // Interleave timestamps so ordering is not insertion order
        for i in 0..featured {
            let at = base + Duration::hours(((i * 7) % 11) as i64 * 3);
            store
                .insert(NewProject::new(format!("featured-{}", i), true).created_at(at))
                .await
                .unwrap();
        }
        for i in 0..plain {
            let at = base + Duration::hours(i as i64 * 3 + 1);
            store
                .insert(NewProject::new(format!("plain-{}", i), false).created_at(at))
                .await
                .unwrap();
        }

        AppState::new(Arc::new(store))
    }

    async fn get_featured(state: AppState) -> (StatusCode, Value) {
        let response = create_project_routes()
            .with_state(state)
            .oneshot(
                Request::builder()
                    .uri("/api/projects/featured")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_returns_at_most_six_featured_newest_first() {
        let (status, body) = get_featured(seeded_state(10, 5).await).await;
        assert_eq!(status, StatusCode::OK);

        let projects = body["projects"].as_array().unwrap();
        assert_eq!(projects.len(), 6);
        assert!(projects.iter().all(|p| p["featured"] == json!(true)));

        let timestamps: Vec<chrono::DateTime<Utc>> = projects
            .iter()
            .map(|p| p["createdAt"].as_str().unwrap().parse().unwrap())
            .collect();
        assert!(timestamps.windows(2).all(|w| w[0] >= w[1]));
    }

    #[tokio::test]
    async fn test_returns_all_featured_when_under_limit() {
        let (status, body) = get_featured(seeded_state(3, 8).await).await;
        assert_eq!(status, StatusCode::OK);
        let projects = body["projects"].as_array().unwrap();
        assert_eq!(projects.len(), 3);
        assert!(projects.iter().all(|p| p["featured"] == json!(true)));
    }

    #[tokio::test]
    async fn test_no_featured_projects_is_empty_list() {
        let (status, body) = get_featured(seeded_state(0, 4).await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "projects": [] }));
    }

    #[tokio::test]
    async fn test_store_failure_returns_500_with_message() {
        let (status, body) = get_featured(AppState::new(Arc::new(FailingStore))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "error": "Project store unavailable: connection refused" })
        );
    }

    #[tokio::test]
    async fn test_records_carry_full_field_set() {
        let (_, body) = get_featured(seeded_state(1, 0).await).await;
        let project = &body["projects"][0];
        for key in ["id", "title", "description", "imageUrl", "projectUrl", "featured", "createdAt", "updatedAt"] {
            assert!(project.get(key).is_some(), "missing {}", key);
        }
    }
}
