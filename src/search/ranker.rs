//! Ranker / 排序器

use super::matcher::Candidate;
use crate::catalog::CatalogEntry;

/// Default minimum weight for a qualified match / 默认合格权重阈值
pub const DEFAULT_WEIGHT_THRESHOLD: u32 = 10;

/// Ranked search outcome / 排序结果
#[derive(Debug, Clone, PartialEq)]
pub enum Ranking {
    /// No entry contains every query word / 无匹配
    NoMatch,
    /// Entries matched but none reached the threshold, kept in catalog order / 未达阈值
    Fallback(Vec<CatalogEntry>),
    /// Entries at or above the threshold, heaviest first / 达到阈值的结果
    Qualified(Vec<CatalogEntry>),
}

impl Ranking {
    pub fn entries(&self) -> &[CatalogEntry] {
        match self {
            Ranking::NoMatch => &[],
            Ranking::Fallback(entries) | Ranking::Qualified(entries) => entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

/// Filter and sort candidates / 过滤并排序候选项
pub fn rank(candidates: Vec<Candidate<'_>>, threshold: u32) -> Ranking {
    if candidates.is_empty() {
        return Ranking::NoMatch;
    }

    let mut qualified: Vec<&Candidate<'_>> =
        candidates.iter().filter(|c| c.weight >= threshold).collect();

    if qualified.is_empty() {
        return Ranking::Fallback(candidates.iter().map(|c| c.entry.clone()).collect());
    }

    // sort_by is stable: ties keep catalog order / 稳定排序
    qualified.sort_by(|a, b| b.weight.cmp(&a.weight));
    Ranking::Qualified(qualified.into_iter().map(|c| c.entry.clone()).collect())
}
