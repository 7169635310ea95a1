use std::path::{Path, PathBuf};

use crate::error::TypeaheadError;

use super::types::Config;

/// Default config file location: `<config dir>/typeahead/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("typeahead").join("config.toml"))
}

/// Load configuration.
///
/// With an explicit path the file must exist and parse. Without one, the
/// default location is used when present and the defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<Config, TypeaheadError> {
    match path {
        Some(path) => read_config(path),
        None => match default_config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => Ok(Config::default()),
        },
    }
}

fn read_config(path: &Path) -> Result<Config, TypeaheadError> {
    let contents = std::fs::read_to_string(path).map_err(|e| TypeaheadError::ConfigRead {
        path: path.display().to_string(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| TypeaheadError::ConfigParse {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
