use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

/// Top-level manifest of declared checks.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Date pairs that must be in chronological order.
    #[serde(default, rename = "pair")]
    pub pairs: Vec<PairToml>,

    /// Date sequences that must be in ascending order.
    #[serde(default, rename = "sequence")]
    pub sequences: Vec<SequenceToml>,

    /// Sequence pairs that must hold the same number of elements.
    #[serde(default, rename = "length")]
    pub lengths: Vec<LengthToml>,
}

impl Manifest {
    /// Reads and parses a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML manifest")
    }

    /// Total number of declared checks.
    pub fn n_checks(&self) -> usize {
        self.pairs.len() + self.sequences.len() + self.lengths.len()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PairToml {
    pub first: NaiveDate,
    #[serde(default = "default_first_name")]
    pub first_name: String,
    pub second: NaiveDate,
    #[serde(default = "default_second_name")]
    pub second_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SequenceToml {
    pub name: String,
    #[serde(default)]
    pub dates: Vec<NaiveDate>,
}

/// Length check. A missing `first` or `second` array is an absent argument.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LengthToml {
    #[serde(default)]
    pub first: Option<Vec<toml::Value>>,
    #[serde(default = "default_first_name")]
    pub first_name: String,
    #[serde(default)]
    pub second: Option<Vec<toml::Value>>,
    #[serde(default = "default_second_name")]
    pub second_name: String,
}

fn default_first_name() -> String {
    "first".to_string()
}
fn default_second_name() -> String {
    "second".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const MANIFEST: &str = r#"
[[pair]]
first = "2020-01-01"
first_name = "start date"
second = "2020-12-31"
second_name = "end date"

[[sequence]]
name = "observation dates"
dates = ["2020-01-01", "2020-01-02", "2020-01-04"]

[[length]]
first_name = "values"
first = [1, 2, 3]
second_name = "weights"
second = [0.1, 0.2, 0.3]

[[length]]
first = ["a"]
"#;

    #[test]
    fn parse_full_manifest() {
        let manifest: Manifest = toml::from_str(MANIFEST).unwrap();
        assert_eq!(manifest.n_checks(), 4);

        let pair = &manifest.pairs[0];
        assert_eq!(pair.first, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(pair.second_name, "end date");

        assert_eq!(manifest.sequences[0].dates.len(), 3);

        let length = &manifest.lengths[0];
        assert_eq!(length.first.as_ref().map(Vec::len), Some(3));
        assert_eq!(length.second.as_ref().map(Vec::len), Some(3));
    }

    #[test]
    fn missing_length_side_is_absent() {
        let manifest: Manifest = toml::from_str(MANIFEST).unwrap();
        let length = &manifest.lengths[1];
        assert!(length.second.is_none());
        assert_eq!(length.first_name, "first");
        assert_eq!(length.second_name, "second");
    }

    #[test]
    fn empty_manifest() {
        let manifest: Manifest = toml::from_str("").unwrap();
        assert_eq!(manifest.n_checks(), 0);
    }

    #[test]
    fn unknown_field_rejected() {
        let toml_str = r#"
[[pair]]
first = "2020-01-01"
second = "2020-01-02"
third = 1
"#;
        let result: Result<Manifest, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_date_rejected() {
        let result: Result<Manifest, _> =
            toml::from_str("[[sequence]]\nname = \"d\"\ndates = [\"2021-02-29\"]\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(MANIFEST.as_bytes()).unwrap();
        let manifest = Manifest::load(file.path()).unwrap();
        assert_eq!(manifest.pairs.len(), 1);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = Manifest::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read manifest"));
    }
}
