//! Application configuration module / 应用配置模块
//!
//! Manages application configuration loaded from config.json
//! Creates default config file on first run / 首次运行时创建默认配置文件

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::search::DEFAULT_WEIGHT_THRESHOLD;
use crate::session::PageLimits;

/// Application configuration / 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration / 服务器配置
    #[serde(default)]
    pub server: ServerConfig,
    /// Food catalog configuration / 食物目录配置
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Skill configuration / 技能配置
    #[serde(default)]
    pub skill: SkillConfig,
    /// Search configuration / 搜索配置
    #[serde(default)]
    pub search: SearchConfig,
}

/// Server configuration / 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address / 服务器监听地址
    pub host: String,
    /// Server port / 服务器端口
    pub port: u16,
}

/// Food catalog configuration / 食物目录配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path of the `[name, calories]` JSON file / 目录文件路径
    pub path: String,
}

/// Skill configuration / 技能配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillConfig {
    /// Accepted application id, empty accepts any / 允许的应用ID，空表示不校验
    pub application_id: String,
    /// Wrap speech in SSML, otherwise plain text / 是否使用SSML
    pub ssml: bool,
}

/// Search configuration / 搜索配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Minimum weight of a qualified match / 合格匹配的最低权重
    pub weight_threshold: u32,
    /// Entries spoken per turn / 每轮播报条数
    pub page_size: usize,
    /// Entries retained across turns, first page included / 跨轮次保留的条数
    pub max_buffered: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8180,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: "data/food_db.json".to_string(),
        }
    }
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            application_id: String::new(),
            ssml: true,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        let limits = PageLimits::default();
        Self {
            weight_threshold: DEFAULT_WEIGHT_THRESHOLD,
            page_size: limits.page_size,
            max_buffered: limits.max_buffered,
        }
    }
}

impl SearchConfig {
    pub fn page_limits(&self) -> PageLimits {
        PageLimits {
            page_size: self.page_size,
            max_buffered: self.max_buffered,
        }
    }

    /// Validate paging values / 校验分页参数
    pub fn validate(&self) -> Result<(), String> {
        if self.page_size == 0 {
            return Err("search.page_size must be at least 1".to_string());
        }
        if self.max_buffered <= self.page_size {
            tracing::warn!(
                "search.max_buffered ({}) <= search.page_size ({}), follow-up pages are disabled",
                self.max_buffered,
                self.page_size
            );
        }
        Ok(())
    }
}

impl AppConfig {
    /// Get the catalog path, `CATALOG_PATH` env wins / 获取目录路径
    pub fn get_catalog_path(&self) -> PathBuf {
        std::env::var("CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(&self.catalog.path))
    }

    /// Get the server bind address / 获取服务器绑定地址
    pub fn get_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Check the configured application id / 校验应用ID
    pub fn accepts_application(&self, application_id: Option<&str>) -> bool {
        self.skill.application_id.is_empty()
            || application_id == Some(self.skill.application_id.as_str())
    }
}

/// Get the config file path / 获取配置文件路径
fn get_config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join("config.json")
}

/// Load configuration from file, or create default if not exists / 加载配置文件，不存在则创建默认配置
pub fn load_config() -> Result<AppConfig, String> {
    load_config_from(&get_config_path())
}

pub fn load_config_from(config_path: &Path) -> Result<AppConfig, String> {
    if config_path.exists() {
        // Load existing config / 加载现有配置
        let content = std::fs::read_to_string(config_path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        let config: AppConfig = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse config file: {}", e))?;
        config.search.validate()?;

        tracing::info!("Loaded configuration from {:?}", config_path);
        Ok(config)
    } else {
        // Create default config / 创建默认配置
        let config = AppConfig::default();
        save_config_to(&config, config_path)?;
        tracing::info!("Created default configuration at {:?}", config_path);
        Ok(config)
    }
}

/// Save configuration to file / 保存配置到文件
pub fn save_config_to(config: &AppConfig, config_path: &Path) -> Result<(), String> {
    let content = serde_json::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;

    std::fs::write(config_path, content)
        .map_err(|e| format!("Failed to write config file: {}", e))?;

    Ok(())
}
