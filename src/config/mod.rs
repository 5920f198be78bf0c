// Configuration module
// Public interface for configuration loading

mod colors;
pub mod constants;
mod loader;
mod settings;

pub use colors::{ColorSpec, DangerColors, UiColors};
pub use loader::{config_dir, default_config_path, load_config, load_config_from};
pub use settings::{Config, FeaturesConfig, TrackerConfig};
