use anyhow::anyhow;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub input: InputConfig,
}

#[derive(Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub extension: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            extension: String::from(".bl"),
        }
    }
}

impl AppConfig {
    /// A missing config file means defaults; a malformed one is an error.
    pub fn load(file_name: &str) -> anyhow::Result<AppConfig> {
        let project_root = env!("CARGO_MANIFEST_DIR");
        let file_path = Path::new(project_root).join(file_name);
        if !file_path.exists() {
            return Ok(AppConfig::default());
        }
        let content = fs::read_to_string(file_path).map_err(|err| anyhow!("Could not read config file: {:?}", err))?;
        toml::from_str(&content).map_err(|err| anyhow!("Could not parse TOML config: {:?}", err))
    }
}
