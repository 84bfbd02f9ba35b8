use std::{collections::HashMap, fs::File, io::BufReader, path::Path};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Optimal matching sizes of the instances shipped with the reference test corpus.
pub const BUILTIN_OPTIMA: &[(&str, i64)] = &[
    ("ar9152.dmx", 4349),
    ("ch71009.dmx", 35025),
    ("ei8246.dmx", 4123),
    ("fixed.dmx", 500),
    ("gr9882.dmx", 4931),
    ("K2.dmx", 1),
    ("K3.dmx", 1),
    ("K4.dmx", 2),
    ("lu980.dmx", 490),
    ("P3.dmx", 2),
    ("pbd984.dmx", 492),
    ("peterson.dmx", 5),
    ("pma343.dmx", 171),
    ("queen10_10.dmx", 50),
    ("queen11_11.dmx", 60),
    ("queen16_16.dmx", 128),
    ("queen27_27.dmx", 364),
    ("queen4_4.dmx", 8),
    ("queen5_5.dmx", 12),
    ("queen6_6.dmx", 18),
    ("queen7_7.dmx", 24),
    ("queen8_8.dmx", 32),
    ("queen9_9.dmx", 40),
    ("simple.dmx", 2),
    ("xqf131.dmx", 64),
];

#[derive(Debug, Error)]
pub enum KnownOptimaError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid known-optima file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Maps instance file names to their known optimal result size.
/// A missing name is not an error; it marks an instance without ground truth.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct KnownOptima {
    optima: HashMap<String, i64>,
}

impl KnownOptima {
    pub fn builtin() -> Self {
        BUILTIN_OPTIMA.iter().copied().collect()
    }

    /// Reads a JSON object of the form `{"name.dmx": 42, ...}`.
    pub fn read(path: &Path) -> Result<Self, KnownOptimaError> {
        debug!("Read known optima from {path:?}");
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.optima.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.optima.len()
    }

    pub fn is_empty(&self) -> bool {
        self.optima.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for KnownOptima {
    fn from_iter<T: IntoIterator<Item = (S, i64)>>(iter: T) -> Self {
        Self {
            optima: iter.into_iter().map(|(n, v)| (n.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::tests::test_instances_directory;
    use std::io::Write;

    #[test]
    fn builtin_table() {
        let optima = KnownOptima::builtin();
        assert_eq!(optima.len(), BUILTIN_OPTIMA.len());
        assert_eq!(optima.get("simple.dmx"), Some(2));
        assert_eq!(optima.get("fixed.dmx"), Some(500));
        assert_eq!(optima.get("ch71009.dmx"), Some(35025));
        assert_eq!(optima.get("unlisted.dmx"), None);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let optima = KnownOptima::builtin();
        assert_eq!(optima.get("K4.dmx"), Some(2));
        assert_eq!(optima.get("k4.dmx"), None);
    }

    #[test]
    fn read_fixture() {
        let optima = KnownOptima::read(&test_instances_directory("optima.json")).unwrap();
        assert_eq!(optima.len(), 2);
        assert_eq!(optima.get("simple.dmx"), Some(5));
        assert_eq!(optima.get("unlisted.dmx"), Some(7));
        assert_eq!(optima.get("fixed.dmx"), None);
    }

    #[test]
    fn read_empty_object() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{}}").unwrap();
        let optima = KnownOptima::read(file.path()).unwrap();
        assert!(optima.is_empty());
    }

    #[test]
    fn read_rejects_non_integer() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"simple.dmx": "two"}}"#).unwrap();
        assert!(matches!(
            KnownOptima::read(file.path()),
            Err(KnownOptimaError::Json(_))
        ));
    }

    #[test]
    fn read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            KnownOptima::read(&dir.path().join("missing.json")),
            Err(KnownOptimaError::Io(_))
        ));
    }
}
