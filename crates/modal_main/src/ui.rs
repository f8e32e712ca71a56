use std::process::ExitCode;
use std::sync::Arc;

use modal_services::DialogService;
use tracing::info;

use crate::Command;

/// Runs CLI commands against a dialog facade.
pub struct UI<D> {
    dialogs: Arc<D>,
}

impl<D: DialogService> UI<D> {
    pub fn new(dialogs: Arc<D>) -> Self {
        Self { dialogs }
    }

    /// Executes `command`, printing any answer on stdout.
    pub async fn run(&self, command: Command) -> anyhow::Result<ExitCode> {
        let outcome = self.execute(command).await?;
        if let Some(output) = &outcome.output {
            println!("{output}");
        }
        Ok(outcome.exit_code())
    }

    async fn execute(&self, command: Command) -> anyhow::Result<Outcome> {
        match command {
            Command::Alert { message } => {
                self.dialogs.notify(&message).await?;
                Ok(Outcome::success(None))
            }
            Command::Prompt { message, default } => {
                match self.dialogs.request_text(&message, default.as_deref()).await? {
                    Some(text) => Ok(Outcome::success(Some(text))),
                    None => {
                        info!("Prompt cancelled");
                        Ok(Outcome::failure(None))
                    }
                }
            }
            Command::Confirm { message, .. } => {
                let answer = self.dialogs.request_confirmation(&message).await?;
                Ok(Outcome { success: answer, output: Some(answer.to_string()) })
            }
            Command::Demo => {
                self.demo().await?;
                Ok(Outcome::success(None))
            }
        }
    }

    async fn demo(&self) -> anyhow::Result<()> {
        let age = self
            .dialogs
            .request_text("How old are you?", Some("100"))
            .await?;
        match age {
            Some(age) => self.dialogs.notify(&format!("You are {age} years old!")).await?,
            None => self.dialogs.notify("You didn't say how old you are.").await?,
        }

        let is_boss = self.dialogs.request_confirmation("Are you the boss?").await?;
        self.dialogs.notify(&is_boss.to_string()).await
    }
}

#[derive(Debug, PartialEq)]
struct Outcome {
    success: bool,
    output: Option<String>,
}

impl Outcome {
    fn success(output: Option<String>) -> Self {
        Self { success: true, output }
    }

    fn failure(output: Option<String>) -> Self {
        Self { success: false, output }
    }

    fn exit_code(&self) -> ExitCode {
        if self.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}
