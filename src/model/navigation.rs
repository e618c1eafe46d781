//! Navigation Model
//!
//! The breadcrumb trail shown above the table. It is a display fixture:
//! nothing in the app changes the folder, and picking a collapsed folder
//! from the ellipsis menu only closes the menu.

/// One rendered piece of the trail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreadcrumbSegment<'a> {
    Home,
    /// Collapsed folders, opened as a dropdown
    Ellipsis,
    Link(&'a str),
    /// Current folder (not a link)
    Page(&'a str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreadcrumbTrail {
    /// Folders hidden behind the ellipsis, outermost first
    pub collapsed: Vec<String>,
    pub parent: Option<String>,
    pub current: Option<String>,
}

impl BreadcrumbTrail {
    /// Build a trail from a folder path below Home
    ///
    /// The last folder is the current page, the one before it a link, and
    /// everything further up collapses behind the ellipsis.
    pub fn from_path(path: &[String]) -> Self {
        let n = path.len();
        let current = path.last().cloned();
        let parent = if n >= 2 { Some(path[n - 2].clone()) } else { None };
        let collapsed = if n > 2 { path[..n - 2].to_vec() } else { Vec::new() };

        Self {
            collapsed,
            parent,
            current,
        }
    }

    /// The folder path the trail stands for
    pub fn full_path(&self) -> Vec<String> {
        self.collapsed
            .iter()
            .chain(self.parent.iter())
            .chain(self.current.iter())
            .cloned()
            .collect()
    }

    pub fn segments(&self) -> Vec<BreadcrumbSegment<'_>> {
        let mut segments = vec![BreadcrumbSegment::Home];
        if !self.collapsed.is_empty() {
            segments.push(BreadcrumbSegment::Ellipsis);
        }
        if let Some(parent) = &self.parent {
            segments.push(BreadcrumbSegment::Link(parent));
        }
        if let Some(current) = &self.current {
            segments.push(BreadcrumbSegment::Page(current));
        }
        segments
    }

    pub fn has_ellipsis(&self) -> bool {
        !self.collapsed.is_empty()
    }
}
