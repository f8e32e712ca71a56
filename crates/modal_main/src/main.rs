use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use colored::Colorize;
use modal::{init_tracing, Cli, Command, UI};
use modal_domain::{EnvironmentService, HostSurface};
use modal_infra::{ModalEnvironmentService, ModalInquire, ScriptedHost};
use modal_services::ModalDialogs;
use tracing::warn;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{} {error:?}", "ERROR:".red().bold());
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut env = ModalEnvironmentService::new().get_environment();
    if let Command::Confirm { default_answer: Some(answer), .. } = &cli.command {
        env = env.confirm_default(*answer);
    }

    let _guard = init_tracing(env.log_path(), cli.verbose)?;

    match cli.script {
        Some(path) => {
            let host = Arc::new(ScriptedHost::load(&path).await?);
            let code = execute(host.clone(), cli.command).await?;

            let remaining = host.remaining().await;
            if remaining > 0 {
                warn!(remaining, "Operator script has unused actions");
            }
            Ok(code)
        }
        None => execute(Arc::new(ModalInquire::new(&env)), cli.command).await,
    }
}

async fn execute<H: HostSurface>(host: Arc<H>, command: Command) -> anyhow::Result<ExitCode> {
    UI::new(Arc::new(ModalDialogs::new(host))).run(command).await
}
