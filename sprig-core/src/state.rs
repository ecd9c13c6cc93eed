use crate::{
    branch::{Branch, BranchSet},
    matching::{self, Pattern},
};
use unicode_segmentation::UnicodeSegmentation;

/// Viewport rows assumed until the renderer reports the real terminal height.
pub const DEFAULT_VISIBLE_ROWS: usize = 20;

/// What mode the session is in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Typing a query / navigating the filtered list
    Select,
    /// Waiting for confirmation before deleting a local branch
    ConfirmDelete { branch_name: String },
}

/// Outcome of the interactive session, propagated to the top-level driver.
/// The state machine never exits the process itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitAction {
    /// Check out this branch and terminate
    Switch { branch: String },
    Quit,
}

/// Central session state. Components read from this, actions modify it.
///
/// The filtered view is recomputed wholesale on every query or catalog
/// change; a query that fails to compile leaves the previous view (and the
/// previously compiled pattern) in place.
#[derive(Debug, Clone)]
pub struct AppState {
    branches: BranchSet,
    query: String,
    /// Last successfully compiled pattern; the view is always derived from it
    pattern: Pattern,
    filtered: Vec<usize>,
    selected: Option<usize>,
    capacity: usize,
    pub mode: Mode,
    pub error: Option<String>,
    pub local_only: bool,
}

impl AppState {
    pub fn new(branches: BranchSet, local_only: bool) -> Self {
        let pattern = Pattern::default();
        let filtered: Vec<usize> = (0..branches.len()).collect();
        let selected = if filtered.is_empty() { None } else { Some(0) };
        Self {
            branches,
            query: String::new(),
            pattern,
            filtered,
            selected,
            capacity: DEFAULT_VISIBLE_ROWS,
            mode: Mode::Select,
            error: None,
            local_only,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn branches(&self) -> &BranchSet {
        &self.branches
    }

    /// Indices into the catalog for the current filtered view, in display order.
    pub fn filtered(&self) -> &[usize] {
        &self.filtered
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The renderer reports viewport rows once at session start; the value
    /// bounds both rendering and the navigable range of the cursor.
    pub fn set_capacity(&mut self, rows: usize) {
        self.capacity = rows.max(1);
        self.clamp_selection();
    }

    pub fn selected_branch(&self) -> Option<&Branch> {
        let idx = *self.filtered.get(self.selected?)?;
        self.branches.get(idx)
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    /// Remove the last grapheme cluster of the query, if any.
    pub fn pop_char(&mut self) {
        if let Some((idx, _)) = self.query.grapheme_indices(true).next_back() {
            self.query.truncate(idx);
            self.refilter();
        }
    }

    pub fn move_selection(&mut self, delta: i32) {
        let len = self.navigable_len();
        if len == 0 {
            return;
        }
        let current = self.selected.unwrap_or(0);
        let next = if delta > 0 {
            current
                .saturating_add(delta.unsigned_abs() as usize)
                .min(len - 1)
        } else {
            current.saturating_sub(delta.unsigned_abs() as usize)
        };
        self.selected = Some(next);
    }

    /// Enter the delete confirmation for the selected branch. Remote-only
    /// branches are never offered for deletion.
    pub fn request_delete(&mut self) {
        let Some(branch) = self.selected_branch() else {
            return;
        };
        if branch.is_local {
            self.mode = Mode::ConfirmDelete {
                branch_name: branch.name.clone(),
            };
        }
    }

    pub fn cancel_delete(&mut self) {
        self.mode = Mode::Select;
    }

    /// Replace the catalog after a reload; the current pattern is re-applied
    /// and the cursor reclamped.
    pub fn set_branches(&mut self, branches: BranchSet) {
        self.branches = branches;
        self.filtered = matching::filter(&self.branches, &self.pattern);
        self.clamp_selection();
    }

    fn refilter(&mut self) {
        match matching::compile(&self.query) {
            Ok(pattern) => {
                self.pattern = pattern;
                self.filtered = matching::filter(&self.branches, &self.pattern);
            }
            Err(err) => {
                // Half-typed pattern; keep showing the previous view.
                log::debug!("pattern not yet valid: {err}");
            }
        }
        self.clamp_selection();
    }

    fn navigable_len(&self) -> usize {
        self.filtered.len().min(self.capacity)
    }

    fn clamp_selection(&mut self) {
        let len = self.navigable_len();
        self.selected = if len == 0 {
            None
        } else {
            Some(self.selected.unwrap_or(0).min(len - 1))
        };
    }
}
