//! # Application Configuration
//!
//! This module defines the configuration structure for the `brandcircle-server`
//! and provides the logic for loading it from a `config.yml` file and
//! environment variables.

use brandcircle::{
    constants::{DEFAULT_MAX_UPLOAD_MB, GOLDEN_CIRCLE_TASK},
    prompts::golden_circle::{GOLDEN_CIRCLE_SYSTEM_PROMPT, GOLDEN_CIRCLE_USER_PROMPT},
    types::ProviderConfig,
};
use config::{
    Config as ConfigBuilder, Environment, File, FileFormat, Value as ConfigValue,
    ValueKind as ConfigValueKind,
};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::info;

/// The provider key the default task points at.
pub const DEFAULT_PROVIDER: &str = "default";

static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}").expect("env var pattern is valid")
});

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates a required configuration file was not found.
    NotFound(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::NotFound(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure, mapping directly to `config.yml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The maximum accepted upload size in megabytes. Loaded from `MAX_UPLOAD_MB`.
    #[serde(default = "default_max_upload_mb")]
    pub max_upload_mb: usize,
    /// A map of named, reusable AI provider configurations.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
    /// A map of tasks, each specifying a provider and prompts.
    #[serde(default)]
    pub tasks: HashMap<String, TaskConfig>,
}

fn default_port() -> u16 {
    8000
}

fn default_max_upload_mb() -> usize {
    DEFAULT_MAX_UPLOAD_MB
}

impl AppConfig {
    /// The upload limit in bytes, as enforced on the upload route.
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }

    /// The Golden Circle extraction task, falling back to the library defaults
    /// for any field the configuration leaves out.
    pub fn golden_circle_task(&self) -> ResolvedTask {
        let task = self.tasks.get(GOLDEN_CIRCLE_TASK).cloned().unwrap_or_default();
        ResolvedTask {
            provider: task.provider.unwrap_or_else(|| DEFAULT_PROVIDER.to_string()),
            system_prompt: task
                .system_prompt
                .unwrap_or_else(|| GOLDEN_CIRCLE_SYSTEM_PROMPT.to_string()),
            user_prompt: task
                .user_prompt
                .unwrap_or_else(|| GOLDEN_CIRCLE_USER_PROMPT.to_string()),
        }
    }
}

/// Defines the prompts and provider for a specific application task.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct TaskConfig {
    /// The key of the provider to use from the `providers` map.
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub system_prompt: Option<String>,
    #[serde(default)]
    pub user_prompt: Option<String>,
}

/// A task configuration with every field filled in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedTask {
    pub provider: String,
    pub system_prompt: String,
    pub user_prompt: String,
}

/// Constructs a `config::Value` map of the default tasks from the library.
/// This serves as the base layer of configuration.
fn build_default_tasks() -> HashMap<String, ConfigValue> {
    let mut table = HashMap::new();
    table.insert("provider".to_string(), ConfigValue::from(DEFAULT_PROVIDER));
    table.insert(
        "system_prompt".to_string(),
        ConfigValue::from(GOLDEN_CIRCLE_SYSTEM_PROMPT),
    );
    table.insert(
        "user_prompt".to_string(),
        ConfigValue::from(GOLDEN_CIRCLE_USER_PROMPT),
    );

    HashMap::from([(
        GOLDEN_CIRCLE_TASK.to_string(),
        ConfigValue::new(None, ConfigValueKind::Table(table)),
    )])
}

// Reads a file and substitutes `${VAR}` references with environment values.
// Returns Ok(None) if the file does not exist.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let expanded_content = ENV_VAR_PATTERN.replace_all(&content, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_default()
    });

    Ok(Some(expanded_content.to_string()))
}

/// Loads the application configuration from files and environment variables.
///
/// Layers, lowest precedence first:
/// 1. library defaults (the `golden_circle_extraction` task);
/// 2. the main YAML file, `config_path_override` or `config.yml` next to this crate;
/// 3. an optional `prompt.yml` with prompt overrides;
/// 4. plain environment variables for top-level keys (`PORT`, `MAX_UPLOAD_MB`);
/// 5. `BRANDCIRCLE_`-prefixed variables for nested keys
///    (e.g. `BRANDCIRCLE_PROVIDERS__DEFAULT__API_KEY`).
///
/// An explicit `config_path_override` must exist. Without one, a missing
/// `config.yml` is fine and the service runs on defaults.
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let base_path = env!("CARGO_MANIFEST_DIR");
    let mut builder = ConfigBuilder::builder()
        // Layer 1: Programmatic defaults from the library.
        .set_default("tasks", build_default_tasks())?;

    // Layer 2: Main config.
    match config_path_override {
        Some(override_path) => {
            let main_content = read_and_substitute(override_path)?.ok_or_else(|| {
                ConfigError::NotFound(format!("Config file not found at '{override_path}'."))
            })?;
            info!("Loading configuration from '{override_path}'.");
            builder = builder.add_source(File::from_str(&main_content, FileFormat::Yaml));
        }
        None => {
            let user_config_path = format!("{base_path}/config.yml");
            match read_and_substitute(&user_config_path)? {
                Some(main_content) => {
                    info!("Loading user-defined configuration from '{user_config_path}'.");
                    builder = builder.add_source(File::from_str(&main_content, FileFormat::Yaml));
                }
                None => info!("'{user_config_path}' not found. Using built-in defaults."),
            }
        }
    }

    // Layer 3: User prompt overrides (optional).
    let user_prompt_path = format!("{base_path}/prompt.yml");
    if let Some(user_prompts_content) = read_and_substitute(&user_prompt_path)? {
        info!("Loading user prompt overrides from '{user_prompt_path}'.");
        builder = builder.add_source(File::from_str(&user_prompts_content, FileFormat::Yaml));
    }

    let settings = builder
        // Layer 4: Environment variables for top-level keys like PORT.
        .add_source(Environment::default())
        // Layer 5: Prefixed environment variables for deeper overrides.
        .add_source(
            Environment::with_prefix("BRANDCIRCLE")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;
    Ok(config)
}
