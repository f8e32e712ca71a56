mod env;
mod scripted;
mod terminal;

pub use env::*;
pub use scripted::*;
pub use terminal::*;
