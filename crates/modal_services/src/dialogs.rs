use std::sync::Arc;

use anyhow::Context;
use modal_domain::{DialogKind, DialogRequest, DialogResponse, Error, HostSurface};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::DialogService;

/// Dialog facade over a [`HostSurface`].
///
/// Holds a lock for the duration of each interaction, so concurrent callers
/// are answered one after another and the host never sees two outstanding
/// requests.
pub struct ModalDialogs<H> {
    host: Arc<H>,
    outstanding: Mutex<()>,
}

impl<H: HostSurface> ModalDialogs<H> {
    pub fn new(host: Arc<H>) -> Self {
        Self { host, outstanding: Mutex::new(()) }
    }

    async fn interact(&self, request: DialogRequest) -> anyhow::Result<DialogResponse> {
        let _guard = self.outstanding.lock().await;
        let kind = request.kind();

        debug!(%kind, message = request.message(), "Presenting dialog");
        let response = self
            .host
            .present(&request)
            .await
            .with_context(|| format!("Failed to present {kind} dialog"))?;
        debug!(%kind, ?response, "Dialog answered");

        Ok(response)
    }
}

fn mismatch(kind: DialogKind, response: DialogResponse) -> anyhow::Error {
    warn!(%kind, ?response, "Host returned a response of the wrong kind");
    Error::ResponseMismatch { kind, response }.into()
}

#[async_trait::async_trait]
impl<H: HostSurface> DialogService for ModalDialogs<H> {
    async fn notify(&self, message: &str) -> anyhow::Result<()> {
        match self.interact(DialogRequest::notify(message)).await? {
            DialogResponse::Acknowledged => Ok(()),
            response => Err(mismatch(DialogKind::Notify, response)),
        }
    }

    async fn request_text(
        &self,
        message: &str,
        default_value: Option<&str>,
    ) -> anyhow::Result<Option<String>> {
        let request = DialogRequest::text_input(message, default_value.map(str::to_string));
        match self.interact(request).await? {
            DialogResponse::Text(text) => Ok(text),
            response => Err(mismatch(DialogKind::TextInput, response)),
        }
    }

    async fn request_confirmation(&self, message: &str) -> anyhow::Result<bool> {
        match self.interact(DialogRequest::confirmation(message)).await? {
            DialogResponse::Confirmed(answer) => Ok(answer),
            response => Err(mismatch(DialogKind::Confirmation, response)),
        }
    }
}
