use anyhow::{anyhow, Result};
use inquire::ui::{RenderConfig, Styled};
use inquire::{Confirm, InquireError, Select, Text};
use modal_domain::{DialogKind, DialogRequest, DialogResponse, Environment, HostSurface};

const OK: &str = "OK";

/// Renders dialogs on the controlling terminal.
pub struct ModalInquire {
    confirm_default: bool,
}

impl ModalInquire {
    pub fn new(env: &Environment) -> Self {
        Self { confirm_default: env.confirm_default }
    }

    fn render_config() -> RenderConfig<'static> {
        RenderConfig::default()
            .with_prompt_prefix(Styled::new("⏺"))
            .with_answered_prompt_prefix(Styled::new("✓"))
            .with_highlighted_option_prefix(Styled::new("➤"))
    }

    async fn prompt<T, F>(&self, f: F) -> Result<Option<T>>
    where
        F: FnOnce() -> std::result::Result<T, InquireError> + Send + 'static,
        T: Send + 'static,
    {
        let result = tokio::task::spawn_blocking(f).await?;
        resolve(result)
    }
}

/// Escape and Ctrl-C both dismiss the dialog; anything else is a terminal
/// fault.
fn resolve<T>(result: std::result::Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(anyhow!(e)),
    }
}

#[async_trait::async_trait]
impl HostSurface for ModalInquire {
    async fn present(&self, request: &DialogRequest) -> Result<DialogResponse> {
        let message = request.message().to_string();
        match request.kind() {
            DialogKind::Notify => {
                self.prompt(move || {
                    Select::new(&message, vec![OK])
                        .with_render_config(Self::render_config())
                        .with_help_message("Press Enter to continue")
                        .prompt()
                })
                .await?;
                Ok(DialogResponse::Acknowledged)
            }
            DialogKind::TextInput => {
                let default_value = request.default_value().map(str::to_string);
                let text = self
                    .prompt(move || {
                        let mut text = Text::new(&message)
                            .with_render_config(Self::render_config())
                            .with_help_message("Press Enter to submit, ESC to cancel");
                        if let Some(default_value) = default_value.as_deref() {
                            text = text.with_initial_value(default_value);
                        }
                        text.prompt()
                    })
                    .await?;
                Ok(DialogResponse::Text(text))
            }
            DialogKind::Confirmation => {
                let default = self.confirm_default;
                let answer = self
                    .prompt(move || {
                        Confirm::new(&message)
                            .with_default(default)
                            .with_render_config(Self::render_config())
                            .with_help_message("y/n, ESC to cancel")
                            .prompt()
                    })
                    .await?;
                Ok(DialogResponse::Confirmed(answer.unwrap_or(false)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_resolve_answer() {
        let actual = resolve(Ok("42".to_string())).unwrap();
        assert_eq!(actual, Some("42".to_string()));
    }

    #[test]
    fn test_resolve_escape_and_interrupt_are_cancellation() {
        let escape = resolve::<String>(Err(InquireError::OperationCanceled)).unwrap();
        let interrupt = resolve::<String>(Err(InquireError::OperationInterrupted)).unwrap();
        assert_eq!(escape, None);
        assert_eq!(interrupt, None);
    }

    #[test]
    fn test_resolve_terminal_fault_is_error() {
        let actual = resolve::<bool>(Err(InquireError::NotTTY));
        assert!(actual.is_err());
    }
}
