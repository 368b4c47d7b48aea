use async_process::Command;
use std::path::Path;

use error::ManagementRunnerError;

pub mod error;
pub mod ops;

/// Default install location of the device-management binary.
pub const DEFAULT_MANAGEMENT_BINARY: &str = "/usr/local/bin/jamf";

/// Renames the local machine by invoking the device-management binary with
/// `setComputerName -name <hostname>`.
///
/// # arguments
/// * `binary`: full path to the device-management binary.
/// * `hostname`: the hostname to assign to the machine.
///
/// # errors
/// * `ManagementRunnerError::BinaryNotFound`: If the binary path does not exist.
/// * `ManagementRunnerError::CommandFailed`: If the command exits with a nonzero status.
/// * `ManagementRunnerError::IoError`: If the command cannot be spawned or awaited.
pub async fn set_computer_name(
    binary: &Path,
    hostname: &str,
) -> Result<(), ManagementRunnerError> {
    run_management_command(binary, &["setComputerName", "-name", hostname]).await
}

/// Submits current machine inventory to the management server by invoking the
/// device-management binary with `recon`.
///
/// Same error policy as [`set_computer_name`].
pub async fn submit_inventory(binary: &Path) -> Result<(), ManagementRunnerError> {
    run_management_command(binary, &["recon"]).await
}

/// Runs the binary with the given arguments, waiting for completion and
/// capturing stdout and stderr rather than streaming them.
async fn run_management_command(
    binary: &Path,
    args: &[&str],
) -> Result<(), ManagementRunnerError> {
    if !binary.exists() {
        return Err(ManagementRunnerError::BinaryNotFound);
    }

    tracing::debug!("Management binary: {}", binary.display());
    tracing::debug!("Management arguments: {:?}", args);

    let output = Command::new(binary).args(args).output().await.map_err(|e| {
        ManagementRunnerError::IoError(format!("Failed to run management command: {}", e))
    })?;

    if !output.status.success() {
        return Err(ManagementRunnerError::CommandFailed {
            status: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(())
}
