//! Built-in seed list

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use super::FileEntry;

/// (id, name, last modified) of the built-in rows, in display order
const SEED: &[(&str, &str, &str)] = &[
    ("f-001", "Budget.xlsx", "2024-11-04T09:15:00Z"),
    ("f-002", "Notes.txt", "2024-11-12T16:42:10Z"),
    ("f-003", "Quarterly Report Q3.pdf", "2024-10-01T08:00:00Z"),
    ("f-004", "Design Mockups", "2024-09-18T13:27:45Z"),
    ("f-005", "invoice-2024-10.pdf", "2024-10-31T17:05:00Z"),
    ("f-006", "invoice-2024-2.pdf", "2024-02-29T11:30:00Z"),
    ("f-007", "invoice-2024-9.pdf", "2024-09-30T10:12:00Z"),
    ("f-008", "Team Photo.jpg", "2023-12-20T19:03:22Z"),
    ("f-009", "README.md", "2024-11-15T07:55:01Z"),
    ("f-010", "meeting-notes-2024-10-21.docx", "2024-10-21T15:00:00Z"),
    ("f-011", "Archive.zip", "2022-06-07T12:00:00Z"),
    ("f-012", "Roadmap.pptx", "2024-08-02T09:45:30Z"),
];

/// Rows of the built-in seed list
pub fn builtin_entries() -> Result<Vec<FileEntry>> {
    SEED.iter()
        .map(|(id, name, modified)| {
            let ts = modified
                .parse::<DateTime<Utc>>()
                .with_context(|| format!("Bad built-in timestamp for '{}': {}", name, modified))?;
            Ok(FileEntry::new(*id, *name, ts))
        })
        .collect()
}
