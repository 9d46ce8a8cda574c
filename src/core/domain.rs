use std::env;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

pub const DATA_FILE_NAME: &str = "bibliotheque.json";
pub const DATA_FILE_ENV: &str = "CATALOG_DATA_FILE";
pub const LOG_LEVEL_ENV: &str = "CATALOG_LOG_LEVEL";
pub const JSON_LOGS_ENV: &str = "CATALOG_JSON_LOGS";

// Identifiable defines common traits that can be shared by persistent objects
pub trait Identifiable {
    fn id(&self) -> &str;
}

// Configuration abstracts config options for the catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub data_file: PathBuf,
    pub log_level: String,
    pub json_logs: bool,
}

impl Configuration {
    pub fn new(data_file: &Path) -> Self {
        Configuration {
            data_file: data_file.to_path_buf(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }

    // environment overrides defaults, command line flags override the environment
    pub fn from_env() -> Self {
        let data_file = env::var_os(DATA_FILE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_data_file);
        let mut config = Configuration::new(&data_file);
        if let Ok(level) = env::var(LOG_LEVEL_ENV) {
            config.log_level = level;
        }
        if let Ok(json) = env::var(JSON_LOGS_ENV) {
            config.json_logs = matches!(json.to_lowercase().as_str(), "1" | "true" | "yes");
        }
        config
    }
}

// platform data dir, e.g. ~/.local/share/bibliotheque/bibliotheque.json on linux
pub fn default_data_file() -> PathBuf {
    match ProjectDirs::from("", "", "bibliotheque") {
        Some(dirs) => dirs.data_dir().join(DATA_FILE_NAME),
        None => PathBuf::from(DATA_FILE_NAME),
    }
}
