use std::path::Path;

use crate::commands::{CmdMessage, CmdResult};
use crate::config::BillzConfig;
use crate::error::{BillzError, Result};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
    Unset(String),
}

pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = BillzConfig::load(config_dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = BillzConfig::load(config_dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => match BillzConfig::set(config_dir, &key, &value) {
            Ok(config) => {
                let display_val = config.get(&key).unwrap_or(value);
                let mut result = CmdResult::default().with_config(config);
                result.add_message(CmdMessage::success(format!(
                    "{} set to {}",
                    key, display_val
                )));
                Ok(result)
            }
            Err(BillzError::Config(message)) => Ok(error_result(message)),
            Err(e) => Err(e),
        },
        ConfigAction::Unset(key) => match BillzConfig::unset(config_dir, &key) {
            Ok(config) => {
                let display_val = config.get(&key).unwrap_or_default();
                let mut result = CmdResult::default().with_config(config);
                result.add_message(CmdMessage::success(format!(
                    "{} reset to {}",
                    key, display_val
                )));
                Ok(result)
            }
            Err(BillzError::Config(message)) => Ok(error_result(message)),
            Err(e) => Err(e),
        },
    }
}

fn error_result(message: String) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::error(message));
    result
}
