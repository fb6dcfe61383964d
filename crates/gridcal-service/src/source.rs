//! Tabular row source capability.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use crate::error::{ServiceError, ServiceResult};

/// Tabular data source: given a raw range reference, returns the ordered
/// row values inside that range.
pub trait RangeSource: Send + Sync {
    /// ## Errors
    /// Returns [`ServiceError::RangeUnavailable`] when the range cannot be
    /// read.
    fn rows(&self, range_ref: &str) -> ServiceResult<Vec<String>>;
}

/// In-memory source for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryRangeSource {
    ranges: HashMap<String, Vec<String>>,
}

impl MemoryRangeSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, range_ref: impl Into<String>, rows: Vec<String>) {
        self.ranges.insert(range_ref.into(), rows);
    }
}

impl RangeSource for MemoryRangeSource {
    fn rows(&self, range_ref: &str) -> ServiceResult<Vec<String>> {
        self.ranges
            .get(range_ref)
            .cloned()
            .ok_or_else(|| ServiceError::RangeUnavailable(range_ref.to_string()))
    }
}

/// File-backed source: a range reference names a file of newline-separated
/// rows under the data root.
#[derive(Debug)]
pub struct DirRangeSource {
    root: PathBuf,
}

impl DirRangeSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl RangeSource for DirRangeSource {
    fn rows(&self, range_ref: &str) -> ServiceResult<Vec<String>> {
        let relative = Path::new(range_ref);
        // Lookups must stay inside the data root.
        if relative.is_absolute()
            || relative
                .components()
                .any(|component| matches!(component, Component::ParentDir))
        {
            return Err(ServiceError::RangeUnavailable(range_ref.to_string()));
        }
        let path = self.root.join(relative);
        let content = std::fs::read_to_string(&path)
            .map_err(|err| ServiceError::RangeUnavailable(format!("{range_ref}: {err}")))?;
        Ok(content.lines().map(ToString::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_source_returns_rows_in_order() {
        let mut source = MemoryRangeSource::new();
        source.insert("standup.txt", vec!["a".to_string(), "b".to_string()]);
        let rows = source.rows("standup.txt").expect("range exists");
        assert_eq!(rows, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn memory_source_unknown_range_errors() {
        let source = MemoryRangeSource::new();
        assert!(matches!(
            source.rows("missing.txt"),
            Err(ServiceError::RangeUnavailable(_))
        ));
    }

    #[test]
    fn dir_source_rejects_escaping_references() {
        let source = DirRangeSource::new("feeds");
        assert!(matches!(
            source.rows("../etc/passwd"),
            Err(ServiceError::RangeUnavailable(_))
        ));
        assert!(matches!(
            source.rows("/etc/passwd"),
            Err(ServiceError::RangeUnavailable(_))
        ));
    }

    #[test]
    fn dir_source_reads_rows_from_file() {
        let dir = std::env::temp_dir().join("gridcal-dir-source-test");
        std::fs::create_dir_all(&dir).expect("create temp dir");
        std::fs::write(dir.join("rows.txt"), "one\ntwo\n\nthree\n").expect("write rows");

        let source = DirRangeSource::new(&dir);
        let rows = source.rows("rows.txt").expect("range exists");
        assert_eq!(
            rows,
            vec![
                "one".to_string(),
                "two".to_string(),
                String::new(),
                "three".to_string(),
            ]
        );
    }
}
