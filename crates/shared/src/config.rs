//! Application configuration management.

use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report configuration.
    #[serde(default)]
    pub report: ReportConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Report configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Currency used to display amounts.
    #[serde(default)]
    pub currency: Currency,
    /// Name of the produced unit, shown next to unit counts.
    #[serde(default = "default_unit_label")]
    pub unit_label: String,
    /// Ordered cost elements tracked by the report.
    #[serde(default = "default_elements")]
    pub elements: Vec<ElementConfig>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            unit_label: default_unit_label(),
            elements: default_elements(),
        }
    }
}

impl ReportConfig {
    /// Returns the configured elements as `(code, label)` pairs, in order.
    #[must_use]
    pub fn element_pairs(&self) -> Vec<(String, String)> {
        self.elements
            .iter()
            .map(|element| (element.code.clone(), element.label.clone()))
            .collect()
    }
}

/// A configured cost element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ElementConfig {
    /// Short code used as the key in input files (e.g., "MP").
    pub code: String,
    /// Display label.
    pub label: String,
}

fn default_unit_label() -> String {
    "crepas".to_string()
}

/// Cost elements of the crepe shop as `(code, label)`: raw material, direct
/// labor, manufacturing overhead.
pub const STANDARD_ELEMENTS: [(&str, &str); 3] = [
    ("MP", "Materia prima"),
    ("MO", "Mano de obra"),
    ("GF", "Gastos de fabricación"),
];

fn default_elements() -> Vec<ElementConfig> {
    STANDARD_ELEMENTS
        .into_iter()
        .map(|(code, label)| ElementConfig {
            code: code.to_string(),
            label: label.to_string(),
        })
        .collect()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "creperia=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CREPERIA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
