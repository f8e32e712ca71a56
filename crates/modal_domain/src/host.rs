use crate::{DialogRequest, DialogResponse};

/// The collaborator that actually renders a modal dialog and captures the
/// operator's answer.
///
/// `present` must not return until the operator has answered. Cancellation
/// is reported as a normal response, errors are reserved for host faults.
#[async_trait::async_trait]
pub trait HostSurface: Send + Sync {
    async fn present(&self, request: &DialogRequest) -> anyhow::Result<DialogResponse>;
}
