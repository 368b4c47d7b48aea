use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManagementRunnerError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Management binary not found")]
    BinaryNotFound,
    #[error("Management command exited with status {status:?}: {stderr}")]
    CommandFailed {
        status: Option<i32>,
        stderr: String,
    },
}
