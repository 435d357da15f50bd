use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::api::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub build_time: &'static str,
    pub started_at: String,
    pub catalog_entries: usize,
}

/// GET /api/health - 健康检查
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<ApiResponse<HealthStatus>> {
    Json(ApiResponse::success(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        build_time: env!("BUILD_TIME"),
        started_at: state.started_at.to_rfc3339(),
        catalog_entries: state.skill.catalog().len(),
    }))
}

#[cfg(test)]
mod tests {
    use super::super::{router, test_support::app_state};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use calorie_skill::config::AppConfig;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let app = router(app_state(AppConfig::default()));
        let response = app
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["data"]["status"], "ok");
        assert_eq!(value["data"]["catalog_entries"], 19);
    }
}
