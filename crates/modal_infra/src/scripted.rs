use std::collections::VecDeque;
use std::path::Path;

use anyhow::{Context, Result};
use modal_domain::{
    DialogRecord, DialogRequest, DialogResponse, Error, HostSurface, OperatorAction,
};
use tokio::sync::Mutex;
use tracing::debug;

/// A simulated operator that answers dialogs from a fixed list of actions.
///
/// Each presented dialog consumes one action. Every answered dialog is kept
/// in a transcript for later inspection.
#[derive(Default)]
pub struct ScriptedHost {
    actions: Mutex<VecDeque<OperatorAction>>,
    transcript: Mutex<Vec<DialogRecord>>,
}

impl ScriptedHost {
    pub fn new(actions: impl IntoIterator<Item = OperatorAction>) -> Self {
        Self {
            actions: Mutex::new(actions.into_iter().collect()),
            transcript: Mutex::new(Vec::new()),
        }
    }

    /// Loads a script file: a list of actions in JSON (`.json`) or YAML
    /// (anything else).
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read operator script {}", path.display()))?;

        let actions: Vec<OperatorAction> = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON operator script {}", path.display()))?,
            _ => serde_yml::from_str(&content)
                .with_context(|| format!("Invalid YAML operator script {}", path.display()))?,
        };

        debug!(path = %path.display(), actions = actions.len(), "Loaded operator script");
        Ok(Self::new(actions))
    }

    /// Number of actions not yet consumed.
    pub async fn remaining(&self) -> usize {
        self.actions.lock().await.len()
    }

    pub async fn transcript(&self) -> Vec<DialogRecord> {
        self.transcript.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl HostSurface for ScriptedHost {
    async fn present(&self, request: &DialogRequest) -> Result<DialogResponse> {
        let action = self
            .actions
            .lock()
            .await
            .pop_front()
            .ok_or(Error::ScriptExhausted(request.kind()))?;

        let response = action.respond(request)?;
        debug!(%action, ?response, "Simulated operator answered");

        self.transcript
            .lock()
            .await
            .push(DialogRecord::new(request.clone(), response.clone()));
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use modal_domain::DialogKind;
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_answers_in_order_and_records_transcript() {
        let host = ScriptedHost::new([OperatorAction::AcceptDefault, OperatorAction::Affirm]);
        let ask_age = DialogRequest::text_input("How old are you?", Some("100".to_string()));
        let ask_boss = DialogRequest::confirmation("Are you the boss?");

        let age = host.present(&ask_age).await.unwrap();
        let boss = host.present(&ask_boss).await.unwrap();

        assert_eq!(age, DialogResponse::Text(Some("100".to_string())));
        assert_eq!(boss, DialogResponse::Confirmed(true));
        assert_eq!(host.remaining().await, 0);
        assert_eq!(
            host.transcript().await,
            vec![
                DialogRecord::new(ask_age, age),
                DialogRecord::new(ask_boss, boss),
            ]
        );
    }

    #[tokio::test]
    async fn test_exhausted_script_is_error() {
        let host = ScriptedHost::default();

        let actual = host
            .present(&DialogRequest::notify("Hello"))
            .await
            .unwrap_err();

        assert!(matches!(
            actual.downcast_ref::<Error>(),
            Some(Error::ScriptExhausted(DialogKind::Notify))
        ));
        assert!(host.transcript().await.is_empty());
    }

    #[tokio::test]
    async fn test_wrong_action_is_not_recorded() {
        let host = ScriptedHost::new([OperatorAction::submit("42")]);

        let actual = host.present(&DialogRequest::confirmation("Are you the boss?")).await;

        assert!(actual.is_err());
        assert!(host.transcript().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_yaml_script() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(
            file,
            "- action: acknowledge\n- action: submit\n  text: \"42\"\n- action: cancel\n"
        )
        .unwrap();

        let host = ScriptedHost::load(file.path()).await.unwrap();
        let actual = host.actions.lock().await.iter().cloned().collect::<Vec<_>>();

        let expected = vec![
            OperatorAction::Acknowledge,
            OperatorAction::submit("42"),
            OperatorAction::Cancel,
        ];
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_load_json_script() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"[{{"action": "affirm"}}, {{"action": "deny"}}]"#).unwrap();

        let host = ScriptedHost::load(file.path()).await.unwrap();

        assert_eq!(host.remaining().await, 2);
    }

    #[tokio::test]
    async fn test_load_missing_script_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");

        let actual = ScriptedHost::load(&path).await.err().unwrap();

        assert!(actual.to_string().contains("missing.yaml"));
    }
}
