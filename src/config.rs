//! Configuration loading and types
//!
//! Settings live in `<config dir>/typeahead/config.toml`. Every field is
//! optional; a missing file yields the defaults.

mod loader;
mod types;

pub use loader::{default_config_path, load_config};
pub use types::{Config, ServerConfig, UiConfig};
