use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::{DialogKind, DialogRequest, DialogResponse, Error, Result};

/// A single thing a simulated operator does when a dialog is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(tag = "action", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OperatorAction {
    /// Press OK on a notification.
    Acknowledge,
    /// Replace the input field's content with `text` and press OK.
    Submit { text: String },
    /// Press OK on a text input without editing it.
    AcceptDefault,
    /// Press Cancel or Escape. Valid for every dialog kind.
    Cancel,
    /// Press OK on a confirmation.
    Affirm,
    /// Press Cancel on a confirmation.
    Deny,
}

impl OperatorAction {
    pub fn submit(text: impl Into<String>) -> Self {
        Self::Submit { text: text.into() }
    }

    /// Turns this action into the response the host would report for
    /// `request`.
    pub fn respond(&self, request: &DialogRequest) -> Result<DialogResponse> {
        let kind = request.kind();
        match (self, kind) {
            (Self::Acknowledge | Self::Cancel, DialogKind::Notify) => Ok(DialogResponse::Acknowledged),
            (Self::Submit { text }, DialogKind::TextInput) => {
                Ok(DialogResponse::Text(Some(text.clone())))
            }
            // An untouched field holds exactly the default, or nothing at all.
            (Self::AcceptDefault, DialogKind::TextInput) => Ok(DialogResponse::Text(Some(
                request.default_value().unwrap_or_default().to_string(),
            ))),
            (Self::Cancel, DialogKind::TextInput) => Ok(DialogResponse::Text(None)),
            (Self::Affirm, DialogKind::Confirmation) => Ok(DialogResponse::Confirmed(true)),
            (Self::Deny | Self::Cancel, DialogKind::Confirmation) => {
                Ok(DialogResponse::Confirmed(false))
            }
            (action, kind) => Err(Error::UnexpectedAction { kind, action: action.clone() }),
        }
    }
}
