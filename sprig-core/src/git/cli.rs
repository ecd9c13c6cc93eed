use super::provider::GitProvider;
use anyhow::{Context, Result};
use std::{
    path::{Path, PathBuf},
    process::Command,
};

/// `GitProvider` backed by the `git` binary, anchored to one repository root
/// resolved when the provider is constructed.
pub struct CliGitProvider {
    repo_root: PathBuf,
}

impl CliGitProvider {
    /// Resolve the repository containing the current working directory.
    pub fn discover() -> Result<Self> {
        let output = Command::new("git")
            .args(["rev-parse", "--show-toplevel"])
            .output()
            .context("failed to run git")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("not inside a git repository: {}", stderr.trim());
        }

        let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(Self {
            repo_root: PathBuf::from(root),
        })
    }

    /// Provider anchored to an explicit repository path.
    pub fn at(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
        }
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_root)
            .output()
            .with_context(|| format!("failed to run git {}", args.join(" ")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("git {} failed: {}", args.join(" "), stderr.trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl GitProvider for CliGitProvider {
    fn list_local_branches(&self) -> Result<Vec<String>> {
        let stdout = self.run(&["branch", "--format=%(refname:short)"])?;
        Ok(stdout.lines().map(String::from).collect())
    }

    fn list_remote_branches(&self) -> Result<Vec<String>> {
        let stdout = self.run(&["branch", "-r", "--format=%(refname:short)"])?;
        Ok(stdout
            .lines()
            .filter_map(|line| {
                let line = line.trim();
                // Skip HEAD pointer (e.g. "origin/HEAD -> origin/main")
                if line.contains("->") {
                    return None;
                }
                // Strip the remote prefix (e.g. "origin/feature" -> "feature")
                line.split_once('/').map(|(_, branch)| branch.to_string())
            })
            .collect())
    }

    fn checkout(&self, branch: &str) -> Result<()> {
        self.run(&["checkout", branch]).map(|_| ())
    }

    fn fetch(&self) -> Result<()> {
        self.run(&["fetch"]).map(|_| ())
    }

    fn pull(&self) -> Result<()> {
        self.run(&["pull"]).map(|_| ())
    }

    fn delete_local(&self, branch: &str) -> Result<()> {
        self.run(&["branch", "-d", branch]).map(|_| ())
    }
}
