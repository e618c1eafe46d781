//! App Orchestration Methods
//!
//! `impl App` blocks grouped by domain. Each submodule wires key-level
//! intents to the table model (src/model/), pure logic (src/logic/) and the
//! `FileOperations` seam, then reports back through toasts.

pub(crate) mod filters;
pub(crate) mod menus;
pub(crate) mod selection;
pub(crate) mod sorting;
