//! Query tokenizer / 查询分词器
//!
//! Food names are plain English, so tokenization is whitespace based:
//! - Convert to lowercase / 转小写
//! - Remove commas ("butter, salted" == "butter salted") / 去除逗号
//! - Split on runs of whitespace / 按空白拆分

/// Normalize text for matching / 标准化文本
pub fn normalize(text: &str) -> String {
    text.to_lowercase().replace(',', "")
}

/// Tokenize a query phrase / 对查询短语进行分词
///
/// Returns an empty list when the phrase has no words / 无有效词时返回空列表
pub fn tokenize_query(query: &str) -> Vec<String> {
    normalize(query)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Count whitespace separated words in a name / 统计名称中的词数
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
