use crate::commands::{CmdMessage, CmdResult, RentHubPaths};
use crate::config::RentHubConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &RentHubPaths, action: ConfigAction) -> Result<CmdResult> {
    match action {
        ConfigAction::ShowAll => {
            let config = RentHubConfig::load(&paths.data)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = RentHubConfig::load(&paths.data)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => {
                    result.add_message(CmdMessage::info(val));
                    Ok(result)
                }
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)));
                    Ok(result)
                }
            }
        }
        ConfigAction::Set(key, value) => {
            let mut config = RentHubConfig::load(&paths.data)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(&paths.data)?;
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn set_then_show_roundtrips() {
        let dir = tempdir().unwrap();
        let paths = RentHubPaths {
            data: dir.path().to_path_buf(),
        };

        run(
            &paths,
            ConfigAction::Set("currency".into(), "€".into()),
        )
        .unwrap();

        let result = run(&paths, ConfigAction::ShowKey("currency".into())).unwrap();
        assert_eq!(result.messages[0].content, "€");
    }

    #[test]
    fn unknown_key_reports_an_error_message() {
        let dir = tempdir().unwrap();
        let paths = RentHubPaths {
            data: dir.path().to_path_buf(),
        };
        let result = run(&paths, ConfigAction::ShowKey("nope".into())).unwrap();
        assert!(result.messages[0].content.contains("Unknown config key"));
    }
}
