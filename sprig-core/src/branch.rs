use crate::git::GitProvider;
use anyhow::{Context, Result};
use std::collections::HashMap;

/// A known branch. Immutable snapshot; the whole catalog is rebuilt whenever
/// the repository may have changed (startup, after a delete).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    pub is_local: bool,
    /// Exists on at least one tracked remote (remote prefix stripped)
    pub is_remote: bool,
}

impl Branch {
    pub fn remote_only(&self) -> bool {
        self.is_remote && !self.is_local
    }
}

/// Deduplicated, ordered branch catalog: local branches first (in the order
/// git reports them), then remote-only branches. No two entries share a name.
#[derive(Debug, Clone, Default)]
pub struct BranchSet {
    entries: Vec<Branch>,
}

impl BranchSet {
    /// Enumerate branches through the git gateway. With `local_only` the
    /// remote listing is skipped entirely and no remote flags are ever set.
    pub fn load(git: &dyn GitProvider, local_only: bool) -> Result<Self> {
        let local = git
            .list_local_branches()
            .context("failed to list local branches")?;
        let remote = if local_only {
            Vec::new()
        } else {
            git.list_remote_branches()
                .context("failed to list remote branches")?
        };
        let set = Self::from_parts(local, remote);
        log::debug!(
            "loaded {} branches ({local_only_note})",
            set.len(),
            local_only_note = if local_only { "local only" } else { "local + remote" }
        );
        Ok(set)
    }

    /// Merge local and remote name lists into a deduplicated catalog. A remote
    /// name that already exists locally marks that entry `is_remote` instead
    /// of creating a second entry.
    pub fn from_parts(local: Vec<String>, remote: Vec<String>) -> Self {
        let mut entries: Vec<Branch> = Vec::with_capacity(local.len() + remote.len());
        let mut index_by_name: HashMap<String, usize> = HashMap::new();

        for name in local {
            if index_by_name.contains_key(&name) {
                continue;
            }
            index_by_name.insert(name.clone(), entries.len());
            entries.push(Branch {
                name,
                is_local: true,
                is_remote: false,
            });
        }

        for name in remote {
            if let Some(&idx) = index_by_name.get(&name) {
                entries[idx].is_remote = true;
            } else {
                index_by_name.insert(name.clone(), entries.len());
                entries.push(Branch {
                    name,
                    is_local: false,
                    is_remote: true,
                });
            }
        }

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Branch> {
        self.entries.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Branch> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a BranchSet {
    type Item = &'a Branch;
    type IntoIter = std::slice::Iter<'a, Branch>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
