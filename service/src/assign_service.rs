use std::sync::Arc;

use management_runner::ops::ManagementRunnerOps;

use crate::error::Error;

/// Service for the assign workflow: derive a hostname from operator input,
/// rename the machine, then submit inventory to the management server.
///
/// The two management calls run in a fixed order and the workflow stops at
/// the first failure: inventory is never submitted for a machine whose rename
/// did not take.
pub struct AssignService {
    runner: Arc<dyn ManagementRunnerOps>,
}

impl AssignService {
    pub fn new(runner: Arc<dyn ManagementRunnerOps>) -> Self {
        Self { runner }
    }

    /// Runs the full workflow for the given operator input and returns the
    /// hostname that was assigned.
    ///
    /// The input is accepted as-is apart from whitespace stripping: an empty
    /// field yields the bare hostname prefix.
    pub async fn assign(&self, input: &str) -> Result<String, Error> {
        let hostname = naming::hostname_for(input);
        tracing::info!("Hostname: {}", hostname);

        self.runner
            .set_computer_name(&hostname)
            .await
            .map_err(|e| Error::RenameFailed(e.to_string()))?;
        tracing::info!("Set computer name to {}", hostname);

        self.runner
            .submit_inventory()
            .await
            .map_err(|e| Error::InventoryFailed(e.to_string()))?;
        tracing::info!("Submitted inventory to JSS");

        Ok(hostname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use management_runner::ops::{ManagementCall, MockManagementRunnerOps};

    #[async_std::test]
    async fn test_assign_runs_rename_then_inventory() {
        let mock = MockManagementRunnerOps::new();
        let service = AssignService::new(Arc::new(mock.clone()));

        let result = service.assign("42").await;

        assert_eq!(result, Ok("cpu42".to_string()));
        assert_eq!(
            mock.calls(),
            vec![
                ManagementCall::SetComputerName("cpu42".to_string()),
                ManagementCall::SubmitInventory,
            ]
        );
    }

    #[async_std::test]
    async fn test_assign_strips_whitespace_from_input() {
        let mock = MockManagementRunnerOps::new();
        let service = AssignService::new(Arc::new(mock.clone()));

        let result = service.assign("  4 2 ").await;

        assert_eq!(result, Ok("cpu42".to_string()));
        assert_eq!(
            mock.calls()[0],
            ManagementCall::SetComputerName("cpu42".to_string())
        );
    }

    #[async_std::test]
    async fn test_assign_empty_input_yields_bare_prefix() {
        let mock = MockManagementRunnerOps::new();
        let service = AssignService::new(Arc::new(mock.clone()));

        let result = service.assign("").await;

        assert_eq!(result, Ok("cpu".to_string()));
    }

    #[async_std::test]
    async fn test_rename_failure_skips_inventory() {
        let mock = MockManagementRunnerOps::with_rename_failure("rename exploded");
        let service = AssignService::new(Arc::new(mock.clone()));

        let result = service.assign("A1 B2").await;

        assert!(matches!(result, Err(Error::RenameFailed(_))));
        assert_eq!(
            mock.calls(),
            vec![ManagementCall::SetComputerName("cpuA1B2".to_string())]
        );
    }

    #[async_std::test]
    async fn test_inventory_failure_after_successful_rename() {
        let mock = MockManagementRunnerOps::with_inventory_failure("recon exploded");
        let service = AssignService::new(Arc::new(mock.clone()));

        let result = service.assign("42").await;

        assert!(matches!(result, Err(Error::InventoryFailed(_))));
        assert_eq!(mock.total_calls(), 2);
    }
}
