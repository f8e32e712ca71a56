mod dialog;
mod environment;
mod error;
mod host;
mod operator;
mod record;

pub use dialog::*;
pub use environment::*;
pub use error::*;
pub use host::*;
pub use operator::*;
pub use record::*;
