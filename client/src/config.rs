use engine::game::{Difficulty, Mark};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

pub fn default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    pub difficulty: Difficulty,
    pub bot_delay_ms: u64,
    pub human_mark: Mark,
    #[serde(default = "default_confetti")]
    pub confetti: bool,
}

fn default_confetti() -> bool {
    true
}

impl ClientConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.human_mark == Mark::Empty {
            return Err("human_mark must be X or O".to_string());
        }
        if self.bot_delay_ms > 10_000 {
            return Err("bot_delay_ms must not exceed 10000".to_string());
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            bot_delay_ms: 700,
            human_mark: Mark::X,
            confetti: true,
        }
    }
}

/// Missing file falls back to defaults; a malformed or invalid file is an
/// error rather than a silent reset.
pub fn load_config(path: &str) -> Result<ClientConfig, String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let config: ClientConfig = serde_yaml_ng::from_str(&content)
                .map_err(|e| format!("Failed to deserialize config: {}", e))?;
            config
                .validate()
                .map_err(|e| format!("Config validation error: {}", e))?;
            Ok(config)
        }
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(ClientConfig::default()),
        Err(err) => Err(format!("Failed to read config file: {}", err)),
    }
}

pub fn save_config(path: &str, config: &ClientConfig) -> Result<(), String> {
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;
    let content = serde_yaml_ng::to_string(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {}", e))
}
