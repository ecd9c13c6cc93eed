pub mod action;
pub mod branch;
pub mod config;
pub mod git;
pub mod matching;
pub mod state;

// Re-export commonly used types at crate root
pub use action::Action;
pub use branch::{Branch, BranchSet};
pub use config::Config;
pub use git::GitProvider;
pub use state::{AppState, ExitAction, Mode};
