pub mod server;
pub mod skill;

use axum::{
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: 200,
            message: "success".to_string(),
            data: Some(data),
        }
    }

    pub fn error(code: i32, message: &str) -> Self {
        Self {
            code,
            message: message.to_string(),
            data: None,
        }
    }
}

/// Build the HTTP router / 构建路由
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(server::health_check))
        .route("/api/skill", post(skill::handle_skill_request))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use calorie_skill::config::AppConfig;
    use calorie_skill::{Catalog, CatalogEntry, FoodSkill};

    pub fn app_state(config: AppConfig) -> Arc<AppState> {
        let mut entries: Vec<CatalogEntry> = (0..18)
            .map(|i| CatalogEntry::new(format!("orange type {}", i), 47.0))
            .collect();
        entries.push(CatalogEntry::new("butter salted", 717.0));
        let catalog = Arc::new(Catalog::new(entries));
        let skill = FoodSkill::from_config(catalog, &config);
        Arc::new(AppState::new(skill, config))
    }
}
