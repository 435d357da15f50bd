//! Typed session state / 会话状态
//!
//! The hosting platform round-trips `sessionAttributes` between turns as an
//! opaque JSON object. It is validated here once per request / 每次请求在此校验

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::CatalogEntry;
use crate::error::SessionError;

/// Wire format: `{ "resultLength": 18, "results": [["orange raw", 47], ...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<CatalogEntry>>,
}

/// Per-session search state / 会话搜索状态
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Total matches of the last search / 上次搜索的匹配总数
    pub result_count: usize,
    /// Buffered overflow page, present only while a continuation is possible / 待展示结果
    pub pending_results: Option<Vec<CatalogEntry>>,
}

impl SessionState {
    pub fn has_pending(&self) -> bool {
        self.pending_results.is_some()
    }

    /// Record an overflow page / 记录溢出页
    pub fn set_pending(&mut self, result_count: usize, pending: Vec<CatalogEntry>) {
        self.result_count = result_count;
        self.pending_results = Some(pending);
    }

    /// Take the pending page, leaving none behind / 取出待展示结果
    pub fn take_pending(&mut self) -> Option<Vec<CatalogEntry>> {
        self.pending_results.take()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Validate raw attributes / 校验原始会话属性
    pub fn from_attributes(value: Option<&Value>) -> Result<Self, SessionError> {
        let value = match value {
            None | Some(Value::Null) => return Ok(Self::default()),
            Some(Value::Object(map)) if map.is_empty() => return Ok(Self::default()),
            Some(v @ Value::Object(_)) => v,
            Some(_) => {
                return Err(SessionError::MalformedAttributes(
                    "attributes must be an object".to_string(),
                ))
            }
        };

        let attrs: SessionAttributes = serde_json::from_value(value.clone())
            .map_err(|e| SessionError::MalformedAttributes(e.to_string()))?;

        match (attrs.result_length, attrs.results) {
            (None, None) => Ok(Self::default()),
            (Some(result_count), Some(results)) => {
                if results.is_empty() {
                    return Err(SessionError::MalformedAttributes(
                        "results must not be empty".to_string(),
                    ));
                }
                if result_count < results.len() {
                    return Err(SessionError::MalformedAttributes(format!(
                        "resultLength {} smaller than buffered results {}",
                        result_count,
                        results.len()
                    )));
                }
                Ok(Self {
                    result_count,
                    pending_results: Some(results),
                })
            }
            _ => Err(SessionError::MalformedAttributes(
                "resultLength and results must be set together".to_string(),
            )),
        }
    }

    /// Attributes to hand back to the platform, `None` when nothing is pending
    pub fn to_attributes(&self) -> Option<SessionAttributes> {
        self.pending_results.as_ref().map(|results| SessionAttributes {
            result_length: Some(self.result_count),
            results: Some(results.clone()),
        })
    }
}
