use std::path::PathBuf;

use modal_domain::{Environment, EnvironmentService};
use tracing::warn;

#[derive(Default)]
pub struct ModalEnvironmentService;

impl ModalEnvironmentService {
    pub fn new() -> Self {
        Self
    }

    fn resolve(var: impl Fn(&str) -> Option<String>) -> Environment {
        let base_path = var("MODAL_HOME").map(PathBuf::from).unwrap_or_else(|| {
            dirs::config_dir()
                .map(|a| a.join("modal"))
                .unwrap_or(PathBuf::from(".").join(".modal"))
        });

        let confirm_default = match var("MODAL_CONFIRM_DEFAULT") {
            None => true,
            Some(value) => parse_flag(&value).unwrap_or_else(|| {
                warn!(value = %value, "Ignoring invalid MODAL_CONFIRM_DEFAULT");
                true
            }),
        };

        Environment { base_path, confirm_default }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl EnvironmentService for ModalEnvironmentService {
    fn get_environment(&self) -> Environment {
        dotenv::dotenv().ok();
        Self::resolve(|key| std::env::var(key).ok())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn resolve_with(vars: &[(&str, &str)]) -> Environment {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ModalEnvironmentService::resolve(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let actual = resolve_with(&[]);
        assert!(actual.confirm_default);
        assert!(actual.base_path.ends_with("modal") || actual.base_path.ends_with(".modal"));
    }

    #[test]
    fn test_home_override() {
        let actual = resolve_with(&[("MODAL_HOME", "/tmp/modal-home")]);
        assert_eq!(actual.base_path, PathBuf::from("/tmp/modal-home"));
        assert_eq!(actual.log_path(), PathBuf::from("/tmp/modal-home/logs"));
    }

    #[test]
    fn test_confirm_default_flags() {
        assert!(!resolve_with(&[("MODAL_CONFIRM_DEFAULT", "no")]).confirm_default);
        assert!(!resolve_with(&[("MODAL_CONFIRM_DEFAULT", " FALSE ")]).confirm_default);
        assert!(resolve_with(&[("MODAL_CONFIRM_DEFAULT", "1")]).confirm_default);
    }

    #[test]
    fn test_invalid_confirm_default_falls_back() {
        let actual = resolve_with(&[("MODAL_CONFIRM_DEFAULT", "maybe")]);
        assert!(actual.confirm_default);
    }
}
