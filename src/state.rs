use calorie_skill::config::AppConfig;
use calorie_skill::FoodSkill;
use chrono::{DateTime, Utc};

pub struct AppState {
    /// Skill bound to the shared catalog / 绑定共享目录的技能
    pub skill: FoodSkill,
    pub config: AppConfig,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(skill: FoodSkill, config: AppConfig) -> Self {
        Self {
            skill,
            config,
            started_at: Utc::now(),
        }
    }
}
