//! Turn controller / 对话轮次状态机
//!
//! ```text
//! Idle --start--> AwaitingQuery --search(found > page)--> HasPending
//!                      |                                      |
//!                      +--search(found <= page) / stop--> Closed <--continue / stop--+
//! ```

use crate::error::SkillError;

/// Conversation phase / 会话阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    Idle,
    AwaitingQuery,
    HasPending,
    Closed,
}

/// Turn events / 轮次事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    /// Session opened, `pending` when restored state carries buffered results
    Start { pending: bool },
    /// A search finished; `has_more` when results overflowed the page
    Search { has_more: bool },
    Continue,
    Stop,
}

#[derive(Debug, Clone)]
pub struct TurnController {
    phase: TurnPhase,
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnController {
    pub fn new() -> Self {
        Self {
            phase: TurnPhase::Idle,
        }
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn is_closed(&self) -> bool {
        self.phase == TurnPhase::Closed
    }

    /// Check whether an event is valid without applying it / 校验事件
    pub fn check(&self, event: TurnEvent) -> Result<TurnPhase, SkillError> {
        use TurnEvent::*;
        use TurnPhase::*;

        match (self.phase, event) {
            (Idle, Start { pending: false }) => Ok(AwaitingQuery),
            (Idle, Start { pending: true }) => Ok(HasPending),
            // 新的搜索会替换缓存结果
            (AwaitingQuery | HasPending, Search { has_more: true }) => Ok(HasPending),
            (AwaitingQuery | HasPending, Search { has_more: false }) => Ok(Closed),
            (HasPending, Continue) => Ok(Closed),
            (Idle | AwaitingQuery | Closed, Continue) => Err(SkillError::NoPendingResults),
            (_, Stop) => Ok(Closed),
            (phase, event) => Err(SkillError::InvalidTurn(format!(
                "{:?} not allowed in {:?}",
                event, phase
            ))),
        }
    }

    /// Apply an event; invalid turns close the session / 应用事件，非法轮次将关闭会话
    pub fn apply(&mut self, event: TurnEvent) -> Result<TurnPhase, SkillError> {
        match self.check(event) {
            Ok(next) => {
                tracing::trace!("Turn {:?} --{:?}--> {:?}", self.phase, event, next);
                self.phase = next;
                Ok(next)
            }
            Err(e) => {
                tracing::warn!("Rejected turn {:?} in {:?}: {}", event, self.phase, e);
                self.phase = TurnPhase::Closed;
                Err(e)
            }
        }
    }
}
