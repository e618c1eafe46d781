//! Column descriptors
//!
//! Each column of the file table is an explicit tagged descriptor resolved
//! when the table is built: a select column, text columns carrying their
//! cell renderer and optional comparator, and the actions column.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::data::FileEntry;
use crate::logic::{formatting, sorting};
use crate::logic::sorting::RowComparator;
use crate::{ColumnId, TimestampMode};

/// Inputs a cell renderer may depend on besides the row
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    pub now: DateTime<Utc>,
    pub timestamp_mode: TimestampMode,
}

pub type CellRenderer = fn(&FileEntry, &RenderContext) -> String;

#[derive(Clone, Copy)]
pub enum ColumnKind {
    /// Row checkbox; header holds the select-all checkbox
    Select,
    Text {
        render: CellRenderer,
        comparator: Option<RowComparator>,
    },
    /// Row action menu trigger
    Action,
}

impl fmt::Debug for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Select => write!(f, "Select"),
            ColumnKind::Text { comparator, .. } => f
                .debug_struct("Text")
                .field("sortable", &comparator.is_some())
                .finish(),
            ColumnKind::Action => write!(f, "Action"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnDescriptor {
    pub id: ColumnId,
    pub title: &'static str,
    /// Share of the table width as (numerator, denominator)
    pub basis: (u32, u32),
    pub kind: ColumnKind,
}

impl ColumnDescriptor {
    pub fn comparator(&self) -> Option<RowComparator> {
        match self.kind {
            ColumnKind::Text { comparator, .. } => comparator,
            _ => None,
        }
    }

    pub fn is_sortable(&self) -> bool {
        self.comparator().is_some()
    }

    /// Cell text for text columns; `None` for select and action columns
    pub fn render_cell(&self, entry: &FileEntry, ctx: &RenderContext) -> Option<String> {
        match self.kind {
            ColumnKind::Text { render, .. } => Some(render(entry, ctx)),
            _ => None,
        }
    }
}

fn render_name(entry: &FileEntry, _ctx: &RenderContext) -> String {
    entry.name.clone()
}

fn render_last_modified(entry: &FileEntry, ctx: &RenderContext) -> String {
    match ctx.timestamp_mode {
        TimestampMode::Relative => formatting::format_distance(entry.last_modified_on, ctx.now),
        TimestampMode::Absolute => formatting::format_timestamp(entry.last_modified_on),
    }
}

/// Columns of the file table, in display order
pub fn file_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor {
            id: ColumnId::Select,
            title: "",
            basis: (1, 10),
            kind: ColumnKind::Select,
        },
        ColumnDescriptor {
            id: ColumnId::FileName,
            title: "Name",
            basis: (6, 12),
            kind: ColumnKind::Text {
                render: render_name,
                comparator: Some(sorting::compare_by_name),
            },
        },
        ColumnDescriptor {
            id: ColumnId::LastModifiedOn,
            title: "Last Modified",
            basis: (3, 12),
            kind: ColumnKind::Text {
                render: render_last_modified,
                comparator: Some(sorting::compare_by_last_modified),
            },
        },
        ColumnDescriptor {
            id: ColumnId::Actions,
            title: "",
            basis: (1, 12),
            kind: ColumnKind::Action,
        },
    ]
}
