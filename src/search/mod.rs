//! Search module - maps a spoken phrase to ranked catalog entries / 搜索模块
//!
//! Pipeline / 流程：
//! - tokenizer: normalize and split the phrase / 分词
//! - matcher: hard filter + per-entry weight / 过滤与打分
//! - ranker: threshold filter, stable sort, weak-match fallback / 排序
//!
//! Search is pure: no match is an empty result, never an error / 搜索无副作用

pub mod matcher;
pub mod ranker;
pub mod tokenizer;

use std::sync::Arc;

use crate::catalog::Catalog;

pub use matcher::{match_candidates, Candidate, QueryMatcher};
pub use ranker::{rank, Ranking, DEFAULT_WEIGHT_THRESHOLD};

/// Search a catalog / 搜索目录
pub fn search(catalog: &Catalog, phrase: &str, threshold: u32) -> Ranking {
    rank(match_candidates(catalog, phrase), threshold)
}

/// Search service bound to a shared catalog / 绑定目录的搜索服务
#[derive(Debug, Clone)]
pub struct FoodSearch {
    catalog: Arc<Catalog>,
    threshold: u32,
}

impl FoodSearch {
    pub fn new(catalog: Arc<Catalog>, threshold: u32) -> Self {
        Self { catalog, threshold }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn search(&self, phrase: &str) -> Ranking {
        let ranking = search(&self.catalog, phrase, self.threshold);
        tracing::debug!(
            "Search {:?}: {} results ({})",
            phrase,
            ranking.len(),
            match &ranking {
                Ranking::NoMatch => "no match",
                Ranking::Fallback(_) => "fallback",
                Ranking::Qualified(_) => "qualified",
            }
        );
        ranking
    }
}
