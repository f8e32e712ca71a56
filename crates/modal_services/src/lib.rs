mod dialogs;

pub use dialogs::*;

/// The three modal interactions, as seen by the code that asks.
///
/// Every call completes a whole request/response cycle before it returns.
/// Operator cancellation shows up in the return value, never as an error.
#[async_trait::async_trait]
pub trait DialogService: Send + Sync {
    /// Shows `message` and waits until the operator acknowledges it.
    async fn notify(&self, message: &str) -> anyhow::Result<()>;

    /// Asks for text. Returns `None` if the operator cancelled.
    async fn request_text(
        &self,
        message: &str,
        default_value: Option<&str>,
    ) -> anyhow::Result<Option<String>>;

    /// Asks a yes/no question. Cancelling counts as "no".
    async fn request_confirmation(&self, message: &str) -> anyhow::Result<bool>;
}
