//! Configuration loaded from environment variables.

use std::path::PathBuf;

use stockline_inventory::{DEFAULT_MAX_BATCH_MASS_G, EngineConfig, PackingPolicy};
use stockline_observability::LogFormat;

/// Where the command script is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSource {
    Stdin,
    File(PathBuf),
}

/// Runtime configuration with defaults.
///
/// Reads from environment variables:
/// - `STOCKLINE_CATALOG` — catalog JSON path (default: `data/product.catalog.json`)
/// - `STOCKLINE_SCRIPT` — command script path, `-` for stdin (default: stdin)
/// - `STOCKLINE_MAX_BATCH_MASS_G` — batch mass cap in grams (default: `1800`)
/// - `STOCKLINE_PACKING` — `split` or `fresh-batch` (default: `split`)
/// - `STOCKLINE_LOG_FORMAT` — `json` or `pretty` (default: `json`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub script: ScriptSource,
    pub max_batch_mass_g: f64,
    pub packing: PackingPolicy,
    pub log_format: LogFormat,
    /// `(variable, value)` pairs that failed to parse and fell back to defaults.
    pub rejected: Vec<(&'static str, String)>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("data/product.catalog.json"),
            script: ScriptSource::Stdin,
            max_batch_mass_g: DEFAULT_MAX_BATCH_MASS_G,
            packing: PackingPolicy::default(),
            log_format: LogFormat::default(),
            rejected: Vec::new(),
        }
    }
}

impl Config {
    /// Loads configuration from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("STOCKLINE_CATALOG") {
            config.catalog_path = PathBuf::from(path);
        }

        config.script = match lookup("STOCKLINE_SCRIPT") {
            Some(path) if path != "-" && !path.trim().is_empty() => {
                ScriptSource::File(PathBuf::from(path))
            }
            _ => ScriptSource::Stdin,
        };

        if let Some(raw) = lookup("STOCKLINE_MAX_BATCH_MASS_G") {
            match raw.trim().parse::<f64>() {
                Ok(mass) if mass.is_finite() && mass > 0.0 => config.max_batch_mass_g = mass,
                _ => config.rejected.push(("STOCKLINE_MAX_BATCH_MASS_G", raw)),
            }
        }

        if let Some(raw) = lookup("STOCKLINE_PACKING") {
            match raw.parse::<PackingPolicy>() {
                Ok(policy) => config.packing = policy,
                Err(_) => config.rejected.push(("STOCKLINE_PACKING", raw)),
            }
        }

        if let Some(raw) = lookup("STOCKLINE_LOG_FORMAT") {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.log_format = format,
                Err(_) => config.rejected.push(("STOCKLINE_LOG_FORMAT", raw)),
            }
        }

        config
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig::default()
            .with_max_batch_mass_g(self.max_batch_mass_g)
            .with_packing(self.packing)
    }
}
