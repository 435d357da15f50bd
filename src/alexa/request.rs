//! Request envelope / 请求信封

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default)]
    pub session: Option<SessionInfo>,
    pub request: SkillRequest,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    #[serde(default)]
    pub new: bool,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub application: Option<Application>,
    /// Opaque attribute bag round-tripped by the platform / 平台回传的会话属性
    #[serde(default)]
    pub attributes: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

/// Request body, tagged by `type` / 请求体
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum SkillRequest {
    #[serde(rename_all = "camelCase")]
    LaunchRequest {
        #[serde(default)]
        request_id: String,
    },
    #[serde(rename_all = "camelCase")]
    IntentRequest {
        #[serde(default)]
        request_id: String,
        intent: IntentPayload,
    },
    #[serde(rename_all = "camelCase")]
    SessionEndedRequest {
        #[serde(default)]
        request_id: String,
        #[serde(default)]
        reason: Option<String>,
    },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntentPayload {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Slot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl IntentPayload {
    /// Slot value, `None` when absent or blank / 获取槽位值
    pub fn slot_value(&self, name: &str) -> Option<&str> {
        self.slots
            .get(name)
            .and_then(|slot| slot.value.as_deref())
            .filter(|v| !v.trim().is_empty())
    }
}

impl RequestEnvelope {
    pub fn session_id(&self) -> &str {
        self.session.as_ref().map(|s| s.session_id.as_str()).unwrap_or("")
    }

    pub fn is_new_session(&self) -> bool {
        self.session.as_ref().map(|s| s.new).unwrap_or(true)
    }

    pub fn application_id(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(|s| s.application.as_ref())
            .map(|a| a.application_id.as_str())
    }

    pub fn attributes(&self) -> Option<&Value> {
        self.session.as_ref().and_then(|s| s.attributes.as_ref())
    }

    pub fn request_id(&self) -> &str {
        match &self.request {
            SkillRequest::LaunchRequest { request_id }
            | SkillRequest::IntentRequest { request_id, .. }
            | SkillRequest::SessionEndedRequest { request_id, .. } => request_id.as_str(),
            SkillRequest::Unsupported => "",
        }
    }
}
