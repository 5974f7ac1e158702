//! This module contains the reverse index from key names to the settings that bind them.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use super::keys::SymbolicKey;

/// One configuration entry that binds a key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingRecord {
    /// Short path of the file, see [`two_level_label`]
    pub location: String,
    /// Left-hand side of the assignment
    pub setting: String,
}

impl fmt::Display for BindingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.location, self.setting)
    }
}

/// Mapping from recognized keys to every setting bound to them.
///
/// A key is present only if at least one record exists for it. Records keep
/// the order in which they were ingested.
#[derive(Debug, Default)]
pub struct BindingIndex {
    bindings: BTreeMap<SymbolicKey, Vec<BindingRecord>>,
    files: usize,
}

impl BindingIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a configuration file and index its key assignments.
    ///
    /// Returns the number of records added.
    pub fn ingest_file(&mut self, path: &Path) -> Result<usize> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let added = self.ingest_str(&two_level_label(path), &content);
        debug!(file = %path.display(), added, "Indexed file");
        Ok(added)
    }

    /// Index every `setting = Key` line of `content` under the given location label.
    ///
    /// Lines that are not a single assignment, numeric values and unknown key
    /// names are skipped. Returns the number of records added.
    pub fn ingest_str(&mut self, location: &str, content: &str) -> usize {
        self.files += 1;
        let mut added = 0;

        // A leading byte order mark is not part of the first setting name.
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        for line in content.lines() {
            let Some((setting, value)) = parse_assignment(line) else {
                continue;
            };
            let Some(key) = SymbolicKey::resolve(value) else {
                continue;
            };

            self.bindings.entry(key).or_default().push(BindingRecord {
                location: location.to_string(),
                setting: setting.to_string(),
            });
            added += 1;
        }

        added
    }

    /// Records bound to `key`, in ingestion order
    pub fn lookup(&self, key: SymbolicKey) -> &[BindingRecord] {
        self.bindings.get(&key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterate over indexed keys in enumeration order
    pub fn iter(&self) -> impl Iterator<Item = (SymbolicKey, &[BindingRecord])> {
        self.bindings
            .iter()
            .map(|(key, records)| (*key, records.as_slice()))
    }

    /// Number of distinct keys with at least one record
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Total number of records across all keys
    pub fn record_count(&self) -> usize {
        self.bindings.values().map(Vec::len).sum()
    }

    /// Number of files ingested so far
    pub fn file_count(&self) -> usize {
        self.files
    }
}

/// Split a `setting = value` line into its trimmed parts.
///
/// Returns `None` when the line does not split into exactly two parts or the
/// value is an integer.
fn parse_assignment(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split('=');
    let (setting, value) = (parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let value = value.trim();
    if value.parse::<i32>().is_ok() {
        return None;
    }

    Some((setting.trim(), value))
}

/// Shorten a path to its last two parent directories plus the file name.
///
/// Paths with fewer than two named parent directories collapse to the bare
/// file name.
pub fn two_level_label(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let parents: Vec<_> = path
        .parent()
        .map(|dir| {
            dir.components()
                .filter_map(|c| match c {
                    Component::Normal(name) => Some(name),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default();

    match parents.as_slice() {
        [.., grandparent, parent] => PathBuf::from(grandparent)
            .join(parent)
            .join(&file_name)
            .to_string_lossy()
            .into_owned(),
        _ => file_name,
    }
}
