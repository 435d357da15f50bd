//! Session pager / 分页器
//!
//! Splits ranked results into the page spoken now and the remainder kept in
//! session state for a follow-up turn / 拆分为当前页与缓存的剩余结果

use serde::{Deserialize, Serialize};

use super::state::SessionState;
use crate::catalog::CatalogEntry;
use crate::error::SkillError;

/// Paging limits / 分页限制
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLimits {
    /// Entries spoken in the first turn / 首轮展示条数
    pub page_size: usize,
    /// Total entries retained, shown page included / 最多保留条数（含首页）
    pub max_buffered: usize,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            page_size: 3,
            max_buffered: 10,
        }
    }
}

/// One paginated result set / 分页结果
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub shown: Vec<CatalogEntry>,
    pub buffered: Vec<CatalogEntry>,
    pub total: usize,
}

impl Page {
    pub fn has_more(&self) -> bool {
        !self.buffered.is_empty()
    }
}

/// Paginate ranked results / 对排序结果分页
pub fn paginate(results: &[CatalogEntry], limits: PageLimits) -> Page {
    let total = results.len();
    let shown_end = total.min(limits.page_size);
    let buffered = if total > limits.page_size {
        let end = total.min(limits.max_buffered).max(shown_end);
        results[shown_end..end].to_vec()
    } else {
        Vec::new()
    };

    Page {
        shown: results[..shown_end].to_vec(),
        buffered,
        total,
    }
}

/// Store the overflow of a page in session state / 将溢出结果存入会话
///
/// Returns whether the turn can be continued / 返回是否可继续
pub fn store_overflow(state: &mut SessionState, page: &Page) -> bool {
    if page.has_more() {
        state.set_pending(page.total, page.buffered.clone());
        true
    } else {
        state.clear();
        false
    }
}

/// Serve the buffered page, consuming it / 取出缓存页
pub fn continue_page(state: &mut SessionState) -> Result<Vec<CatalogEntry>, SkillError> {
    state.take_pending().ok_or(SkillError::NoPendingResults)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results(len: usize) -> Vec<CatalogEntry> {
        (0..len)
            .map(|i| CatalogEntry::new(format!("orange {}", i), i as f64))
            .collect()
    }

    #[test]
    fn test_pagination_law() {
        let limits = PageLimits::default();
        for len in 0..15 {
            let page = paginate(&results(len), limits);
            assert_eq!(page.shown.len(), len.min(3), "len {}", len);
            assert_eq!(page.buffered.len(), len.min(10).saturating_sub(3), "len {}", len);
            assert_eq!(page.has_more(), len > 3, "len {}", len);
            assert_eq!(page.total, len);
        }
    }

    #[test]
    fn test_buffer_keeps_order() {
        let page = paginate(&results(18), PageLimits::default());
        assert_eq!(page.shown[0].name, "orange 0");
        assert_eq!(page.buffered.first().map(|e| e.name.as_str()), Some("orange 3"));
        assert_eq!(page.buffered.last().map(|e| e.name.as_str()), Some("orange 9"));
    }

    #[test]
    fn test_buffer_smaller_than_page() {
        let limits = PageLimits {
            page_size: 3,
            max_buffered: 2,
        };
        let page = paginate(&results(5), limits);
        assert_eq!(page.shown.len(), 3);
        assert!(page.buffered.is_empty());
    }

    #[test]
    fn test_store_and_continue() {
        let mut state = SessionState::default();
        let page = paginate(&results(18), PageLimits::default());

        assert!(store_overflow(&mut state, &page));
        assert_eq!(state.result_count, 18);

        let served = continue_page(&mut state).unwrap();
        assert_eq!(served, page.buffered);
        assert_eq!(continue_page(&mut state), Err(SkillError::NoPendingResults));
    }

    #[test]
    fn test_store_without_overflow_clears() {
        let mut state = SessionState::default();
        state.set_pending(8, results(5));

        let page = paginate(&results(2), PageLimits::default());
        assert!(!store_overflow(&mut state, &page));
        assert!(!state.has_pending());
    }
}
