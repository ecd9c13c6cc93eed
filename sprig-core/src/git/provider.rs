use anyhow::Result;

/// Gateway to the version-control binary. All calls are synchronous and
/// blocking; failures carry the captured git output so it can be surfaced to
/// the user once, verbatim.
pub trait GitProvider: Send + Sync {
    fn list_local_branches(&self) -> Result<Vec<String>>;
    /// Remote branch names with the remote prefix stripped
    /// (e.g. `origin/feature` -> `feature`).
    fn list_remote_branches(&self) -> Result<Vec<String>>;
    fn checkout(&self, branch: &str) -> Result<()>;
    fn fetch(&self) -> Result<()>;
    fn pull(&self) -> Result<()>;
    fn delete_local(&self, branch: &str) -> Result<()>;
}
