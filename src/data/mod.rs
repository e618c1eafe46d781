//! File listing data
//!
//! `FileEntry` records and the listing source the table is mounted with.
//! The only source today is a static seed list (built-in or a JSON file in
//! the page's `{ id, attributes: { name, lastModifiedOn } }` shape).

pub mod seed;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A single row of the file table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub id: String,
    pub name: String,
    pub last_modified_on: DateTime<Utc>,
}

impl FileEntry {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        last_modified_on: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            last_modified_on,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SeedRecord {
    #[serde(default)]
    id: Option<Value>,
    attributes: SeedAttributes,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedAttributes {
    name: String,
    last_modified_on: DateTime<Utc>,
}

/// Parse a JSON seed list
///
/// Records without an `id` get their insertion index as id. Numeric ids are
/// accepted and stringified. Duplicate ids are rejected since row selection
/// is keyed by id.
pub fn parse_seed(json: &str) -> Result<Vec<FileEntry>> {
    let records: Vec<SeedRecord> =
        serde_json::from_str(json).context("Seed file is not a valid file list")?;

    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(records.len());

    for (idx, record) in records.into_iter().enumerate() {
        let id = match record.id {
            Some(Value::String(s)) => s,
            Some(Value::Null) | None => idx.to_string(),
            Some(other) => other.to_string(),
        };

        if !seen.insert(id.clone()) {
            bail!("Duplicate row id '{}' in seed file", id);
        }

        entries.push(FileEntry {
            id,
            name: record.attributes.name,
            last_modified_on: record.attributes.last_modified_on,
        });
    }

    Ok(entries)
}

/// Read and parse a JSON seed file
pub fn load_seed_file(path: &Path) -> Result<Vec<FileEntry>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    parse_seed(&json).with_context(|| format!("Failed to parse seed file {}", path.display()))
}

/// Source of file rows for a folder
///
/// Stands in for a future file-listing service: given a folder path it
/// returns the folder's entries in display (insertion) order.
pub trait FileListing {
    fn list(&self, folder_path: &[String]) -> Result<Vec<FileEntry>>;
}

/// Listing backed by a fixed in-memory seed; the folder path is ignored
#[derive(Debug, Clone, Default)]
pub struct StaticListing {
    entries: Vec<FileEntry>,
}

impl StaticListing {
    pub fn new(entries: Vec<FileEntry>) -> Self {
        Self { entries }
    }

    /// Listing over the built-in seed list
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(seed::builtin_entries()?))
    }
}

impl FileListing for StaticListing {
    fn list(&self, _folder_path: &[String]) -> Result<Vec<FileEntry>> {
        Ok(self.entries.clone())
    }
}
