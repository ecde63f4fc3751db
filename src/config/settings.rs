use std::path::Path;

use anyhow::{Context as _, Result, bail};
use config::{Config, Environment, File, FileFormat, Map};
use serde::Deserialize;

use crate::i18n::Locale;

const ENV_PREFIX: &str = "HOMEMATIC";

/// Contents of the settings file.
///
/// ```toml
/// ccu2_ip = "homematic-ccu2"
/// locale = "de"
///
/// [defaults]
/// show_current_mode = true
///
/// [[devices]]
/// id = "1234"
/// label = "Bad"
/// warn_temp_low = true
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub devices: Vec<DeviceOverrides>,

    #[serde(default = "default_ccu2_ip")]
    pub ccu2_ip: String,

    #[serde(default = "default_xmlapi_url")]
    pub xmlapi_url: String,

    /// Poll interval in milliseconds.
    #[serde(default = "default_update_interval")]
    pub update_interval: u64,

    /// Hub request timeout in milliseconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    #[serde(default = "default_warn_color")]
    pub warn_color: String,

    #[serde(default)]
    pub locale: Locale,

    #[serde(default)]
    pub defaults: DisplayDefaults,
}

/// Global values for every per-device setting.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayDefaults {
    pub show_set_temperature: bool,
    pub show_fault_reporting: bool,
    pub show_current_mode: bool,
    pub show_humidity: bool,
    pub precision_temp: u32,
    pub precision_hum: u32,
    pub warn_temp_high: bool,
    pub warn_temp_low: bool,
    pub warn_hum_high: bool,
    pub warn_hum_low: bool,
    pub temp_threshold_high: f64,
    pub temp_threshold_low: f64,
    pub hum_threshold_high: f64,
    pub hum_threshold_low: f64,
}

impl Default for DisplayDefaults {
    fn default() -> Self {
        Self {
            show_set_temperature: false,
            show_fault_reporting: false,
            show_current_mode: false,
            show_humidity: false,
            precision_temp: 2,
            precision_hum: 0,
            warn_temp_high: false,
            warn_temp_low: false,
            warn_hum_high: false,
            warn_hum_low: false,
            temp_threshold_high: 24.0,
            temp_threshold_low: 5.0,
            hum_threshold_high: 60.0,
            hum_threshold_low: 35.0,
        }
    }
}

/// One `[[devices]]` entry. Every field except `id` is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeviceOverrides {
    pub id: String,
    pub label: Option<String>,
    pub show_set_temperature: Option<bool>,
    pub show_fault_reporting: Option<bool>,
    pub show_current_mode: Option<bool>,
    pub show_humidity: Option<bool>,
    pub precision_temp: Option<u32>,
    pub precision_hum: Option<u32>,
    pub warn_temp_high: Option<bool>,
    pub warn_temp_low: Option<bool>,
    pub warn_hum_high: Option<bool>,
    pub warn_hum_low: Option<bool>,
    pub temp_threshold_high: Option<f64>,
    pub temp_threshold_low: Option<f64>,
    pub hum_threshold_high: Option<f64>,
    pub hum_threshold_low: Option<f64>,
}

fn default_ccu2_ip() -> String {
    "homematic-ccu2".to_owned()
}

fn default_xmlapi_url() -> String {
    "config/xmlapi".to_owned()
}

fn default_update_interval() -> u64 {
    300_000
}

fn default_request_timeout() -> u64 {
    30_000
}

fn default_warn_color() -> String {
    "red".to_owned()
}

impl Settings {
    /// Reads the TOML settings file, then applies `HOMEMATIC_*` environment
    /// overrides (nested keys separated by `__`, e.g. `HOMEMATIC_DEFAULTS__SHOW_HUMIDITY`).
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// `env` replaces the process environment when given.
    fn load_with_env(path: &Path, env: Option<Map<String, String>>) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()
            .with_context(|| format!("failed to read settings file: {path:?}"))?;

        Self::from_config(config)
    }

    pub fn from_toml(toml: &str) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .context("failed to read settings")?;

        Self::from_config(config)
    }

    fn from_config(config: Config) -> Result<Self> {
        let settings: Settings = config
            .try_deserialize()
            .context("failed to deserialize settings")?;

        if settings.update_interval == 0 {
            bail!("update_interval must be greater than 0");
        }

        if settings.devices.is_empty() {
            bail!("no devices configured");
        }

        Ok(settings)
    }
}
