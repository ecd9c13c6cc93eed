pub mod cli;
pub mod mock;
pub mod provider;

pub use cli::CliGitProvider;
pub use mock::MockGitProvider;
pub use provider::GitProvider;
