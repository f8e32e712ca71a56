use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Answer dialogs from an operator script instead of the terminal.
    ///
    /// The script is a list of actions, in YAML or JSON (`.json`), e.g.
    /// `- action: submit` / `  text: "42"`. Each dialog consumes one action.
    #[arg(long, short = 's', global = true)]
    pub script: Option<PathBuf>,

    /// Also write logs to stderr.
    #[arg(long, default_value_t = false, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Show a message and wait for the operator to press OK.
    Alert {
        /// The text to show.
        message: String,
    },

    /// Ask for a line of text. Prints the answer; exits with 1 if cancelled.
    Prompt {
        /// The text to show.
        message: String,

        /// Initial value of the input field.
        #[arg(long, short)]
        default: Option<String>,
    },

    /// Ask a yes/no question. Prints true or false; exits with 1 on false.
    Confirm {
        /// The question to ask.
        message: String,

        /// Answer pre-selected in the terminal. Overrides MODAL_CONFIRM_DEFAULT.
        #[arg(long)]
        default_answer: Option<bool>,
    },

    /// Walk through all three dialogs.
    Demo,
}
