//! filedeck library
//!
//! Exposes the table model and pure logic for testing

pub mod data;
pub mod logic;
pub mod model;
pub mod ops;

/// Column identifiers of the file table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnId {
    Select,
    FileName,
    LastModifiedOn,
    Actions,
}

impl ColumnId {
    pub fn as_str(&self) -> &str {
        match self {
            ColumnId::Select => "select",
            ColumnId::FileName => "fileName",
            ColumnId::LastModifiedOn => "lastModifiedOn",
            ColumnId::Actions => "actions",
        }
    }
}

/// Direction of the active sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &str {
        match self {
            SortDirection::Ascending => "Asc",
            SortDirection::Descending => "Desc",
        }
    }

    pub fn arrow(&self) -> &str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// How the last-modified column is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampMode {
    Relative, // "3 days ago"
    Absolute, // "2025-10-26 20:58"
}
