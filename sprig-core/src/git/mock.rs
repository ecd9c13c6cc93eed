use super::provider::GitProvider;
use anyhow::Result;
use std::sync::Mutex;

/// Canned `GitProvider` for tests: fixed branch lists, injectable one-shot
/// failures, recorded mutating calls.
#[derive(Default)]
pub struct MockGitProvider {
    pub local_branches: Vec<String>,
    pub remote_branches: Vec<String>,
    pub list_local_result: Mutex<Option<Result<Vec<String>>>>,
    pub checkout_result: Mutex<Option<Result<()>>>,
    pub delete_result: Mutex<Option<Result<()>>>,
    pub list_remote_calls: Mutex<Vec<()>>,
    pub checkout_calls: Mutex<Vec<String>>,
    pub delete_calls: Mutex<Vec<String>>,
    pub fetch_calls: Mutex<Vec<()>>,
    pub pull_calls: Mutex<Vec<()>>,
}

impl MockGitProvider {
    pub fn new(local_branches: Vec<String>, remote_branches: Vec<String>) -> Self {
        Self {
            local_branches,
            remote_branches,
            ..Self::default()
        }
    }
}

impl GitProvider for MockGitProvider {
    fn list_local_branches(&self) -> Result<Vec<String>> {
        self.list_local_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(self.local_branches.clone()))
    }

    fn list_remote_branches(&self) -> Result<Vec<String>> {
        self.list_remote_calls.lock().unwrap().push(());
        Ok(self.remote_branches.clone())
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        self.checkout_calls.lock().unwrap().push(branch.to_string());
        self.checkout_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or(Ok(()))
    }

    fn fetch(&self) -> Result<()> {
        self.fetch_calls.lock().unwrap().push(());
        Ok(())
    }

    fn pull(&self) -> Result<()> {
        self.pull_calls.lock().unwrap().push(());
        Ok(())
    }

    fn delete_local(&self, branch: &str) -> Result<()> {
        self.delete_calls.lock().unwrap().push(branch.to_string());
        self.delete_result.lock().unwrap().take().unwrap_or(Ok(()))
    }
}
