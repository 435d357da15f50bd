use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod state;

use calorie_skill::config;
use calorie_skill::{Catalog, FoodSkill};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "calorie_skill=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration / 加载配置
    let app_config = config::load_config().map_err(anyhow::Error::msg)?;
    tracing::info!("Server will listen on {}:{}", app_config.server.host, app_config.server.port);

    // Catalog is loaded once, failure aborts startup / 目录只加载一次，失败则终止启动
    let catalog_path = app_config.get_catalog_path();
    let catalog = Catalog::load(&catalog_path)
        .map_err(|e| anyhow::anyhow!("Failed to load food catalog {:?}: {}", catalog_path, e))?;
    if catalog.is_empty() {
        tracing::warn!("Food catalog {:?} is empty, every search will miss", catalog_path);
    }

    let skill = FoodSkill::from_config(Arc::new(catalog), &app_config);
    let bind_addr = app_config.get_bind_address();
    let state = Arc::new(AppState::new(skill, app_config));

    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server running at http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
