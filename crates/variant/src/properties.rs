//! Override source loading
//!
//! `local.properties` is a machine-local, untracked key=value file. It is
//! optional by contract: a missing file resolves to an empty map, and the
//! defaults apply.

use crate::error::{Result, VariantError};
use std::collections::HashMap;
use std::path::Path;

/// Flat string-to-string mapping loaded from the override source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalProperties {
    entries: HashMap<String, String>,
}

impl LocalProperties {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the override source from disk.
    ///
    /// A missing file yields an empty mapping. An unreadable or non-UTF-8
    /// file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let bytes = std::fs::read(path)?;
        let content = String::from_utf8(bytes).map_err(|_| VariantError::NotUtf8 {
            path: path.to_path_buf(),
        })?;

        Ok(Self::parse(&content))
    }

    /// Parse `key=value` lines.
    ///
    /// Blank lines and lines starting with `#` or `!` are comments. The
    /// first `=` splits key from value, surrounding whitespace is trimmed,
    /// lines without a separator are ignored, and later duplicates win.
    pub fn parse(content: &str) -> Self {
        let mut entries = HashMap::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                if key.is_empty() {
                    continue;
                }
                entries.insert(key.to_string(), value.trim().to_string());
            }
        }

        Self { entries }
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Lookup that treats an empty value as absent.
    ///
    /// Resolution only honors overrides that actually carry a value.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Check whether the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries in the mapping.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Recognized override keys present in this source.
    pub fn recognized_keys(&self) -> Vec<&'static str> {
        [crate::VERSION_CODE_KEY, crate::VERSION_NAME_KEY]
            .into_iter()
            .filter(|k| self.get(k).is_some())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_entries() {
        let props = LocalProperties::parse("flutter.versionCode=42\nflutter.versionName=2.1\n");
        assert_eq!(props.get("flutter.versionCode"), Some("42"));
        assert_eq!(props.get("flutter.versionName"), Some("2.1"));
        assert_eq!(props.len(), 2);
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let content = "# generated by the IDE\n\n! another comment\nsdk.dir=/opt/android\n";
        let props = LocalProperties::parse(content);
        assert_eq!(props.len(), 1);
        assert_eq!(props.get("sdk.dir"), Some("/opt/android"));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let props = LocalProperties::parse("  flutter.versionCode = 7  \n");
        assert_eq!(props.get("flutter.versionCode"), Some("7"));
    }

    #[test]
    fn test_parse_ignores_lines_without_separator() {
        let props = LocalProperties::parse("not a property line\nkey=value\n");
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn test_parse_last_duplicate_wins() {
        let props = LocalProperties::parse("key=first\nkey=second\n");
        assert_eq!(props.get("key"), Some("second"));
    }

    #[test]
    fn test_parse_value_may_contain_separator() {
        let props = LocalProperties::parse("sdk.dir=C:=weird\n");
        assert_eq!(props.get("sdk.dir"), Some("C:=weird"));
    }

    #[test]
    fn test_get_non_empty_treats_empty_as_absent() {
        let props = LocalProperties::parse("flutter.versionCode=\n");
        assert_eq!(props.get("flutter.versionCode"), Some(""));
        assert_eq!(props.get_non_empty("flutter.versionCode"), None);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let props = LocalProperties::load(&dir.path().join("local.properties")).unwrap();
        assert!(props.is_empty());
    }

    #[test]
    fn test_load_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local.properties");
        std::fs::write(&path, "flutter.versionCode=9\n").unwrap();

        let props = LocalProperties::load(&path).unwrap();
        assert_eq!(props.get("flutter.versionCode"), Some("9"));
    }

    #[test]
    fn test_load_rejects_non_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local.properties");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = LocalProperties::load(&path).unwrap_err();
        assert!(matches!(err, VariantError::NotUtf8 { .. }));
    }

    #[test]
    fn test_recognized_keys() {
        let props = LocalProperties::parse("flutter.versionName=2.0\nsdk.dir=/opt/android\n");
        assert_eq!(props.recognized_keys(), vec!["flutter.versionName"]);
    }
}
