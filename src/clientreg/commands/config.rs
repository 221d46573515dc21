use crate::commands::{CmdMessage, CmdResult};
use crate::config::ClientRegConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = ClientRegConfig::load(config_dir)?;
    let mut result = CmdResult::default();
    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(value) => result.add_message(CmdMessage::info(value)),
            None => result.add_message(CmdMessage::error(format!("Unknown config key: {}", key))),
        },
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e));
                return Ok(result);
            }
            config.save(config_dir)?;
            let shown = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
        }
    }
    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    #[test]
    fn show_all_returns_defaults_without_writing() {
        let dir = TempDir::new().unwrap();
        let result = run(dir.path(), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(ClientRegConfig::default()));
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn set_persists() {
        let dir = TempDir::new().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("seed-demo".into(), "false".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "seed-demo set to false");
        assert!(!ClientRegConfig::load(dir.path()).unwrap().seed_demo);

        let shown = run(dir.path(), ConfigAction::ShowKey("seed-demo".into())).unwrap();
        assert_eq!(shown.messages[0].content, "false");
    }

    #[test]
    fn bad_values_are_reported_not_saved() {
        let dir = TempDir::new().unwrap();
        let result = run(
            dir.path(),
            ConfigAction::Set("seed-demo".into(), "maybe".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!dir.path().join("config.json").exists());

        let unknown = run(dir.path(), ConfigAction::ShowKey("color".into())).unwrap();
        assert_eq!(unknown.messages[0].level, MessageLevel::Error);
    }
}
