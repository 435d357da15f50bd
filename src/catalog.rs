//! Food catalog / 食物目录
//!
//! Static `[name, calories]` table loaded once at startup and shared read-only
//! by every session / 启动时加载一次，所有会话只读共享

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CatalogError;

/// Single catalog entry, serialized as `["butter salted", 717]` / 目录条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, f64)", into = "(String, f64)")]
pub struct CatalogEntry {
    pub name: String,
    /// Calories per 100 grams / 每100克热量
    pub value: f64,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl From<(String, f64)> for CatalogEntry {
    fn from((name, value): (String, f64)) -> Self {
        Self { name, value }
    }
}

impl From<CatalogEntry> for (String, f64) {
    fn from(entry: CatalogEntry) -> Self {
        (entry.name, entry.value)
    }
}

/// Immutable food catalog / 不可变食物目录
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    /// Lower-cased names, same order as `entries` / 小写名称
    folded: Vec<String>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        let folded = entries.iter().map(|e| e.name.to_lowercase()).collect();
        Self { entries, folded }
    }

    /// Load catalog from a JSON file / 从JSON文件加载目录
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let catalog = Self::from_json(&content)?;
        tracing::info!("Loaded {} catalog entries from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// Parse catalog from JSON text / 解析JSON目录
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(content)?;

        for (index, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(CatalogError::InvalidEntry {
                    index,
                    reason: "empty name".to_string(),
                });
            }
            if !entry.value.is_finite() || entry.value < 0.0 {
                return Err(CatalogError::InvalidEntry {
                    index,
                    reason: format!("invalid value {}", entry.value),
                });
            }
        }

        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Iterate `(entry, lower-cased name)` in catalog order / 按目录顺序遍历
    pub fn iter_folded(&self) -> impl Iterator<Item = (&CatalogEntry, &str)> {
        self.entries
            .iter()
            .zip(self.folded.iter().map(String::as_str))
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_pairs() {
        let catalog = Catalog::from_json(r#"[["Butter salted", 717], ["apples raw", 52.5]]"#).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[0], CatalogEntry::new("Butter salted", 717.0));

        let folded: Vec<&str> = catalog.iter_folded().map(|(_, f)| f).collect();
        assert_eq!(folded, vec!["butter salted", "apples raw"]);
    }

    #[test]
    fn test_entry_serializes_as_pair() {
        let json = serde_json::to_string(&CatalogEntry::new("orange juice", 45.0)).unwrap();
        assert_eq!(json, r#"["orange juice",45.0]"#);
    }

    #[test]
    fn test_rejects_invalid_entries() {
        assert!(matches!(
            Catalog::from_json(r#"[["  ", 10]]"#),
            Err(CatalogError::InvalidEntry { index: 0, .. })
        ));
        assert!(matches!(
            Catalog::from_json(r#"[["egg", 155], ["bad", -1]]"#),
            Err(CatalogError::InvalidEntry { index: 1, .. })
        ));
        assert!(matches!(
            Catalog::from_json(r#"{"name": "egg"}"#),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[["egg whole raw", 143]]"#).unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);

        let missing = Catalog::load(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(CatalogError::Io { .. })));
    }
}
