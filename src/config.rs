use crate::error::AppError;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::collections::HashSet;

pub const DEFAULT_SCAN_DIRECTORY: &str = "images";
pub const DEFAULT_EXTENSIONS: [&str; 4] = [".jpeg", ".jpg", ".png", ".gif"];

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub scan_directory: String,
    /// Case-sensitive file name suffixes, dot included.
    pub allowed_extensions: HashSet<String>,
    pub output_directory: String,
    pub log_level: String,
}

/// Values given on the command line. They win over every other source.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub scan_directory: Option<String>,
    pub output_directory: Option<String>,
    pub log_level: Option<String>,
}

impl AppConfig {
    pub fn new(overrides: Overrides) -> Result<Self, AppError> {
        let env = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            .set_default("scan_directory", DEFAULT_SCAN_DIRECTORY)?
            .set_default("allowed_extensions", DEFAULT_EXTENSIONS.to_vec())?
            .set_default("output_directory", ".")?
            .set_default("log_level", "info")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(Environment::with_prefix("GEOTAG"))
            .set_override_option("scan_directory", non_empty(overrides.scan_directory))?
            .set_override_option("output_directory", non_empty(overrides.output_directory))?
            .set_override_option("log_level", non_empty(overrides.log_level))?
            .build()?;

        Ok(s.try_deserialize()?)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scan_directory: DEFAULT_SCAN_DIRECTORY.to_string(),
            allowed_extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            output_directory: ".".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// An empty flag value means "not given".
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
