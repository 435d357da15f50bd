//! Food calories skill / 食物热量技能
//!
//! Turn operations on top of search and the session pager:
//! - begin_search_turn: search, speak the first page, buffer the rest / 搜索并分页
//! - continue_turn: speak the buffered page and close / 播报缓存页
//! - stop_turn: close the session / 结束会话

pub mod handler;
pub mod intent;
pub mod speech;

use std::sync::Arc;

use crate::catalog::{Catalog, CatalogEntry};
use crate::config::AppConfig;
use crate::error::{Result, SkillError};
use crate::search::{tokenizer::tokenize_query, FoodSearch, DEFAULT_WEIGHT_THRESHOLD};
use crate::session::{continue_page, paginate, store_overflow, PageLimits, Session, TurnEvent};

pub use intent::Intent;

/// Result of an initial search turn / 首轮搜索结果
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTurn {
    pub displayed: Vec<CatalogEntry>,
    pub result_count: usize,
    pub has_more: bool,
}

/// Result of a continuation turn / 继续轮次结果
#[derive(Debug, Clone, PartialEq)]
pub struct ContinueTurn {
    pub displayed: Vec<CatalogEntry>,
    pub result_count: usize,
}

#[derive(Debug, Clone)]
pub struct FoodSkill {
    search: FoodSearch,
    limits: PageLimits,
    ssml: bool,
}

impl FoodSkill {
    pub fn new(catalog: Arc<Catalog>, threshold: u32, limits: PageLimits, ssml: bool) -> Self {
        Self {
            search: FoodSearch::new(catalog, threshold),
            limits,
            ssml,
        }
    }

    pub fn from_config(catalog: Arc<Catalog>, config: &AppConfig) -> Self {
        Self::new(
            catalog,
            config.search.weight_threshold,
            config.search.page_limits(),
            config.skill.ssml,
        )
    }

    /// Skill with default thresholds and paging / 默认参数
    pub fn with_defaults(catalog: Arc<Catalog>) -> Self {
        Self::new(catalog, DEFAULT_WEIGHT_THRESHOLD, PageLimits::default(), true)
    }

    pub fn catalog(&self) -> &Catalog {
        self.search.catalog()
    }

    /// Search and paginate / 搜索并分页
    ///
    /// Session state is only written when the results overflow one page
    pub fn begin_search_turn(&self, session: &mut Session, phrase: &str) -> Result<SearchTurn> {
        if let Err(e) = session.check(TurnEvent::Search { has_more: false }) {
            return Err(self.abort(session, e));
        }
        if tokenize_query(phrase).is_empty() {
            return Err(self.abort(session, SkillError::EmptyQuery));
        }

        let ranking = self.search.search(phrase);
        let page = paginate(ranking.entries(), self.limits);
        let has_more = store_overflow(&mut session.state, &page);
        session.advance(TurnEvent::Search { has_more })?;

        tracing::debug!(
            "Session {}: {:?} found {} items, showing {}, buffered {}",
            session.id,
            phrase,
            page.total,
            page.shown.len(),
            page.buffered.len()
        );

        Ok(SearchTurn {
            displayed: page.shown,
            result_count: page.total,
            has_more,
        })
    }

    /// Serve the buffered page and close / 播报缓存结果并结束
    pub fn continue_turn(&self, session: &mut Session) -> Result<ContinueTurn> {
        if let Err(e) = session.check(TurnEvent::Continue) {
            return Err(self.abort(session, e));
        }

        let result_count = session.state.result_count;
        let displayed = match continue_page(&mut session.state) {
            Ok(displayed) => displayed,
            Err(e) => return Err(self.abort(session, e)),
        };
        session.advance(TurnEvent::Continue)?;

        Ok(ContinueTurn {
            displayed,
            result_count,
        })
    }

    /// Close the session, idempotent / 结束会话（幂等）
    pub fn stop_turn(&self, session: &mut Session) {
        // Stop 在任何阶段都合法
        let _ = session.advance(TurnEvent::Stop);
    }

    fn abort(&self, session: &mut Session, error: SkillError) -> SkillError {
        tracing::debug!("Session {}: closing after {}", session.id, error);
        self.stop_turn(session);
        error
    }
}
