mod cli;
mod log;
mod ui;

pub use cli::*;
pub use log::*;
pub use ui::*;
