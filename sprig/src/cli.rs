use sprig_core::{
    branch::BranchSet,
    git::GitProvider,
    matching,
};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Clone)]
pub struct CliError {
    message: String,
    code: i32,
}

impl CliError {
    pub fn user(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: 1,
        }
    }

    pub fn system(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: 2,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> i32 {
        self.code
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(value: anyhow::Error) -> Self {
        Self::system(value.to_string())
    }
}

pub fn print_error(error: &CliError) {
    eprintln!("{}", error.message());
}

/// Non-interactive path: check out the closest-named branch and exit.
pub fn cmd_switch(
    git: &dyn GitProvider,
    pattern: &str,
    pull: bool,
    local_only: bool,
) -> CliResult<()> {
    let branches = BranchSet::load(git, local_only)?;
    let Some(branch) = matching::best_match(&branches, pattern) else {
        return Err(CliError::user(format!(
            "No branch matching '{pattern}'"
        )));
    };
    let name = branch.name.clone();
    git.checkout(&name)?;
    println!("Switched to branch '{name}'");
    if pull {
        git.pull()?;
    }
    Ok(())
}
