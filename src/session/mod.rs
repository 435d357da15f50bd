//! Conversation session / 对话会话
//!
//! A session lives for one request: it is opened from the attributes the
//! platform sent, mutated by a single turn, and converted back to attributes
//! for the response / 会话由平台携带的属性恢复，处理一个轮次后写回

pub mod pager;
pub mod state;
pub mod turn;

use serde_json::Value;

pub use pager::{continue_page, paginate, store_overflow, Page, PageLimits};
pub use state::{SessionAttributes, SessionState};
pub use turn::{TurnController, TurnEvent, TurnPhase};

use crate::error::SkillError;

#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub state: SessionState,
    turn: TurnController,
}

impl Session {
    /// Open a session from typed state / 从已校验状态打开会话
    pub fn open(id: impl Into<String>, state: SessionState) -> Self {
        let mut turn = TurnController::new();
        let pending = state.has_pending();
        // Idle 状态下 Start 总是合法
        let _ = turn.apply(TurnEvent::Start { pending });
        Self {
            id: id.into(),
            state,
            turn,
        }
    }

    /// Open a session from raw platform attributes / 从原始会话属性打开会话
    ///
    /// Malformed attributes are dropped so the turn can still be answered
    pub fn restore(id: impl Into<String>, attributes: Option<&Value>) -> Self {
        let id = id.into();
        let state = match SessionState::from_attributes(attributes) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("Session {}: {}, starting from empty state", id, e);
                SessionState::default()
            }
        };
        Self::open(id, state)
    }

    pub fn phase(&self) -> TurnPhase {
        self.turn.phase()
    }

    pub fn is_closed(&self) -> bool {
        self.turn.is_closed()
    }

    /// Advance the turn controller; the state is dropped once the session closes
    pub fn advance(&mut self, event: TurnEvent) -> Result<TurnPhase, SkillError> {
        let result = self.turn.apply(event);
        if self.turn.is_closed() {
            self.state.pending_results = None;
        }
        result
    }

    pub fn check(&self, event: TurnEvent) -> Result<TurnPhase, SkillError> {
        self.turn.check(event)
    }

    /// Attributes for the response, only while the session stays open / 会话属性
    pub fn attributes(&self) -> Option<SessionAttributes> {
        if self.is_closed() {
            None
        } else {
            self.state.to_attributes()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_restore_phases() {
        let session = Session::restore("s1", None);
        assert_eq!(session.phase(), TurnPhase::AwaitingQuery);

        let attrs = json!({"resultLength": 5, "results": [["orange raw", 47]]});
        let session = Session::restore("s1", Some(&attrs));
        assert_eq!(session.phase(), TurnPhase::HasPending);
        assert_eq!(session.state.result_count, 5);
    }

    #[test]
    fn test_malformed_attributes_start_empty() {
        let session = Session::restore("s1", Some(&json!({"resultLength": 5})));
        assert_eq!(session.phase(), TurnPhase::AwaitingQuery);
        assert!(!session.state.has_pending());
    }

    #[test]
    fn test_closing_drops_pending() {
        let attrs = json!({"resultLength": 5, "results": [["orange raw", 47]]});
        let mut session = Session::restore("s1", Some(&attrs));
        assert!(session.attributes().is_some());

        session.advance(TurnEvent::Stop).unwrap();
        assert!(session.attributes().is_none());
        assert!(!session.state.has_pending());
    }
}
