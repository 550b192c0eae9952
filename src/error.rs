use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoltArenaError {
    #[error("{0}")]
    Message(String),
    #[error("{program} exited with {status}: {stderr}")]
    ProcessFailed {
        program: String,
        status: String,
        stderr: String,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
    #[error(transparent)]
    GixClone(#[from] gix::clone::Error),
    #[error(transparent)]
    GixFetch(#[from] gix::clone::fetch::Error),
    #[error(transparent)]
    GixCheckout(#[from] gix::clone::checkout::main_worktree::Error),
}

pub type Result<T> = std::result::Result<T, MoltArenaError>;
