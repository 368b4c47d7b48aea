use crate::error::ManagementRunnerError;
use crate::{set_computer_name, submit_inventory, DEFAULT_MANAGEMENT_BINARY};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Trait for device-management runner operations.
///
/// This trait abstracts the management binary invocations to allow for
/// different implementations, including mocks for testing purposes. The
/// rename+recon workflow is one concrete use; anything that validates and
/// applies operator input can sit behind this seam.
#[async_trait::async_trait]
pub trait ManagementRunnerOps: Send + Sync {
    /// Renames the local machine to `hostname`.
    async fn set_computer_name(&self, hostname: &str) -> Result<(), ManagementRunnerError>;

    /// Submits current machine inventory to the management server.
    async fn submit_inventory(&self) -> Result<(), ManagementRunnerError>;
}

/// Default implementation that invokes the actual management binary.
pub struct DefaultManagementRunnerOps {
    binary: PathBuf,
}

impl DefaultManagementRunnerOps {
    pub fn new(binary: PathBuf) -> Self {
        Self { binary }
    }
}

impl Default for DefaultManagementRunnerOps {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_MANAGEMENT_BINARY))
    }
}

#[async_trait::async_trait]
impl ManagementRunnerOps for DefaultManagementRunnerOps {
    async fn set_computer_name(&self, hostname: &str) -> Result<(), ManagementRunnerError> {
        set_computer_name(&self.binary, hostname).await
    }

    async fn submit_inventory(&self) -> Result<(), ManagementRunnerError> {
        submit_inventory(&self.binary).await
    }
}

/// Represents a recorded call to a management runner operation.
///
/// Used by `MockManagementRunnerOps` to track and verify calls in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum ManagementCall {
    /// A rename invocation with the hostname that was requested.
    SetComputerName(String),
    /// An inventory submission invocation.
    SubmitInventory,
}

/// Mock implementation for testing management runner operations.
///
/// This mock tracks all calls in order and can simulate failure of either
/// step, allowing the fixed rename-then-recon sequencing to be tested without
/// touching a real management binary.
#[derive(Clone, Default)]
pub struct MockManagementRunnerOps {
    rename_error: Option<String>,
    inventory_error: Option<String>,
    calls: Arc<Mutex<Vec<ManagementCall>>>,
}

impl MockManagementRunnerOps {
    /// Creates a new mock that succeeds on all operations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new mock whose rename operation fails with the given error message.
    pub fn with_rename_failure(error_msg: impl Into<String>) -> Self {
        Self {
            rename_error: Some(error_msg.into()),
            ..Default::default()
        }
    }

    /// Creates a new mock whose inventory submission fails with the given error message.
    pub fn with_inventory_failure(error_msg: impl Into<String>) -> Self {
        Self {
            inventory_error: Some(error_msg.into()),
            ..Default::default()
        }
    }

    /// Returns all recorded calls in invocation order.
    pub fn calls(&self) -> Vec<ManagementCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Returns the total number of calls made.
    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl ManagementRunnerOps for MockManagementRunnerOps {
    async fn set_computer_name(&self, hostname: &str) -> Result<(), ManagementRunnerError> {
        self.calls
            .lock()
            .unwrap()
            .push(ManagementCall::SetComputerName(hostname.to_string()));

        if let Some(msg) = &self.rename_error {
            return Err(ManagementRunnerError::IoError(msg.clone()));
        }
        Ok(())
    }

    async fn submit_inventory(&self) -> Result<(), ManagementRunnerError> {
        self.calls
            .lock()
            .unwrap()
            .push(ManagementCall::SubmitInventory);

        if let Some(msg) = &self.inventory_error {
            return Err(ManagementRunnerError::IoError(msg.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[async_std::test]
    async fn test_mock_management_runner_ops_success() {
        let mock = MockManagementRunnerOps::new();

        mock.set_computer_name("cpu42").await.unwrap();
        mock.submit_inventory().await.unwrap();

        assert_eq!(mock.total_calls(), 2);
        let calls = mock.calls();
        assert_eq!(calls[0], ManagementCall::SetComputerName("cpu42".to_string()));
        assert_eq!(calls[1], ManagementCall::SubmitInventory);
    }

    #[async_std::test]
    async fn test_mock_rename_failure() {
        let mock = MockManagementRunnerOps::with_rename_failure("Simulated rename failure");

        let result = mock.set_computer_name("cpu42").await;

        // The call is tracked even though it failed
        assert_eq!(mock.total_calls(), 1);
        match result {
            Err(ManagementRunnerError::IoError(msg)) => {
                assert_eq!(msg, "Simulated rename failure");
            }
            _ => panic!("Expected IoError"),
        }
    }

    #[async_std::test]
    async fn test_mock_inventory_failure() {
        let mock = MockManagementRunnerOps::with_inventory_failure("Simulated recon failure");

        assert!(mock.set_computer_name("cpu42").await.is_ok());
        assert!(mock.submit_inventory().await.is_err());
        assert_eq!(mock.total_calls(), 2);
    }
}
