use thiserror::Error;

use crate::{DialogKind, DialogResponse, OperatorAction};

// Operator cancellation is never an error. Everything here is a fault of the
// host surface answering a request.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Host answered a {kind} dialog with {response:?}")]
    ResponseMismatch { kind: DialogKind, response: DialogResponse },

    #[error("No scripted operator action left for {0} dialog")]
    ScriptExhausted(DialogKind),

    #[error("Scripted action {action} cannot answer a {kind} dialog")]
    UnexpectedAction { kind: DialogKind, action: OperatorAction },
}

pub type Result<A> = std::result::Result<A, Error>;
