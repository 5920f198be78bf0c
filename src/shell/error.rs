// Shell channel errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("shell program must not be empty")]
    EmptyProgram,

    #[error("pty size must have non-zero rows and columns (got {rows}x{cols})")]
    InvalidSize { rows: u16, cols: u16 },

    #[error("only pty channels are supported")]
    PtyRequired,

    #[error("failed to spawn shell: {0}")]
    Spawn(String),

    #[error("shell channel is closed")]
    Closed,

    #[error("failed to resize pty: {0}")]
    Resize(String),
}

impl ShellError {
    pub(crate) fn spawn(error: impl std::fmt::Display) -> Self {
        ShellError::Spawn(error.to_string())
    }
}
