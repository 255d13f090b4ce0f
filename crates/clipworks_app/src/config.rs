//! Read-only application configuration.
//!
//! Loaded once at startup from `clipworks.ron` next to the working directory;
//! missing or malformed files fall back to defaults with a logged warning.

use std::fs;
use std::path::{Path, PathBuf};

use app_logging::{app_info, app_warn};
use serde::Deserialize;

const CONFIG_FILENAME: &str = "clipworks.ron";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Open the output directory automatically after a successful job.
    pub auto_open_output: bool,
    /// External tool invoked by the frame-interpolation panel.
    pub interpolation_tool: PathBuf,
    /// External tool invoked by the matting panel.
    pub matting_tool: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auto_open_output: false,
            interpolation_tool: PathBuf::from("rife-ncnn-vulkan"),
            matting_tool: PathBuf::from("rvm-ncnn-vulkan"),
        }
    }
}

pub fn load_default() -> AppConfig {
    load(Path::new(CONFIG_FILENAME))
}

pub fn load(path: &Path) -> AppConfig {
    match fs::read_to_string(path) {
        Ok(text) => match ron::from_str(&text) {
            Ok(config) => {
                app_info!("loaded config from {}", path.display());
                config
            }
            Err(err) => {
                app_warn!("ignoring malformed config {}: {}", path.display(), err);
                AppConfig::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppConfig::default(),
        Err(err) => {
            app_warn!("failed to read config {}: {}", path.display(), err);
            AppConfig::default()
        }
    }
}
