//! Lexical matcher / 词法匹配器
//!
//! Scoring rules / 打分规则：
//! - Every query word must appear somewhere in the name, otherwise the entry is skipped
//! - +10 when the name starts with the word, allowing a plural `s`/`es` suffix
//! - +10 when the name starts with the word as a plain prefix
//! - +10 when the name has exactly as many words as the query

use regex::Regex;

use super::tokenizer::{tokenize_query, word_count};
use crate::catalog::{Catalog, CatalogEntry};

/// Weight added per matching rule / 每条规则的权重
pub const MATCH_WEIGHT: u32 = 10;

/// Catalog entry with its provisional weight / 候选项
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<'a> {
    pub entry: &'a CatalogEntry,
    pub weight: u32,
}

/// Patterns built from one query word / 单个查询词的匹配模式
#[derive(Debug)]
struct WordPattern {
    word: String,
    /// `^word(es|s)?\b`, ASCII word boundary
    plural: Option<Regex>,
}

impl WordPattern {
    fn new(word: &str) -> Self {
        let plural = match Regex::new(&format!(r"^{}(es|s)?(?-u:\b)", regex::escape(word))) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::warn!("Failed to build plural pattern for {:?}: {}", word, e);
                None
            }
        };

        Self {
            word: word.to_string(),
            plural,
        }
    }

    fn weight(&self, name: &str) -> u32 {
        let mut weight = 0;
        if self.plural.as_ref().is_some_and(|re| re.is_match(name)) {
            weight += MATCH_WEIGHT;
        }
        if name.starts_with(&self.word) {
            weight += MATCH_WEIGHT;
        }
        weight
    }
}

/// Compiled query / 编译后的查询
#[derive(Debug)]
pub struct QueryMatcher {
    patterns: Vec<WordPattern>,
}

impl QueryMatcher {
    pub fn new(query: &str) -> Self {
        let patterns = tokenize_query(query)
            .iter()
            .map(|word| WordPattern::new(word))
            .collect();
        Self { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.patterns.len()
    }

    /// Weigh a lower-cased name, `None` when a query word is missing / 计算权重
    pub fn weigh(&self, name: &str) -> Option<u32> {
        if self.is_empty() || !self.patterns.iter().all(|p| name.contains(&p.word)) {
            return None;
        }

        let mut weight: u32 = self.patterns.iter().map(|p| p.weight(name)).sum();
        if word_count(name) == self.word_count() {
            weight += MATCH_WEIGHT;
        }
        Some(weight)
    }
}

/// Match a phrase against the catalog, unsorted / 将短语与目录匹配（未排序）
pub fn match_candidates<'a>(catalog: &'a Catalog, query: &str) -> Vec<Candidate<'a>> {
    let matcher = QueryMatcher::new(query);
    if matcher.is_empty() {
        return Vec::new();
    }

    catalog
        .iter_folded()
        .filter_map(|(entry, name)| {
            matcher
                .weigh(name)
                .map(|weight| Candidate { entry, weight })
        })
        .collect()
}
