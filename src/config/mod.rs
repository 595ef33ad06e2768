mod core;
mod loader;

pub use self::core::{OutputConfig, SummaryConfig};
pub use self::loader::{
    discover_config, load_config, load_config_from_path, parse_config, CONFIG_FILE_NAME,
};
