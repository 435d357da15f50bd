//! Intent routing / 意图路由

use crate::alexa::IntentPayload;

pub const FOOD_ITEM_SLOT: &str = "FoodItem";

/// Known intents; unrecognized names map to `Unknown` / 已知意图
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// `GetNutritionInfo`, carries the spoken food phrase
    GetNutritionInfo { food_item: Option<String> },
    /// `GetNextEventIntent`, asks for the buffered results
    MoreResults,
    /// `AMAZON.StopIntent` / `AMAZON.CancelIntent`
    Stop,
    Unknown(String),
}

impl From<&IntentPayload> for Intent {
    fn from(payload: &IntentPayload) -> Self {
        match payload.name.as_str() {
            "GetNutritionInfo" => Intent::GetNutritionInfo {
                food_item: payload.slot_value(FOOD_ITEM_SLOT).map(str::to_string),
            },
            "GetNextEventIntent" => Intent::MoreResults,
            "AMAZON.StopIntent" | "AMAZON.CancelIntent" => Intent::Stop,
            other => Intent::Unknown(other.to_string()),
        }
    }
}
