//! Configuration module for grouping-forest.
//!
//! Handles the TOML settings file and its lookup locations.

mod settings;

pub use settings::{
    user_config_path, PlannerSettings, Settings, SettingsError, CONFIG_ENV_VAR, LOCAL_CONFIG_FILE,
};
