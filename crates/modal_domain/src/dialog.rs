use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The three kinds of modal interaction a host can present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DialogKind {
    /// Shows a message and waits for acknowledgement.
    Notify,
    /// Asks for a line of text, optionally pre-filled with a default.
    TextInput,
    /// Asks a yes/no question.
    Confirmation,
}

/// A single request for operator interaction.
///
/// Requests can only be built through the per-kind constructors, which keeps
/// `default_value` confined to [`DialogKind::TextInput`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogRequest {
    kind: DialogKind,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_value: Option<String>,
}

impl DialogRequest {
    pub fn notify(message: impl Into<String>) -> Self {
        Self { kind: DialogKind::Notify, message: message.into(), default_value: None }
    }

    pub fn text_input(message: impl Into<String>, default_value: Option<String>) -> Self {
        Self { kind: DialogKind::TextInput, message: message.into(), default_value }
    }

    pub fn confirmation(message: impl Into<String>) -> Self {
        Self { kind: DialogKind::Confirmation, message: message.into(), default_value: None }
    }

    pub fn kind(&self) -> DialogKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The initial value of the input field. Always `None` unless this is a
    /// text input request created with a default.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }
}

/// The operator's answer to a [`DialogRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "value")]
pub enum DialogResponse {
    Acknowledged,
    /// `None` means the operator cancelled the input.
    Text(Option<String>),
    Confirmed(bool),
}
