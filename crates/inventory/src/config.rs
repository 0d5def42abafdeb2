//! Engine configuration.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockline_core::{DomainError, DomainResult};

/// Mass cap for a single shipment batch, in grams.
pub const DEFAULT_MAX_BATCH_MASS_G: f64 = 1800.0;

/// How packages are grouped into batches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PackingPolicy {
    /// Heaviest units first; a package that overflows the open batch is split
    /// so the batch is filled before a new one opens.
    #[default]
    SplitAcrossBatches,
    /// Lightest packages first; a package that overflows the open batch
    /// starts a new batch whole.
    FreshBatch,
}

impl FromStr for PackingPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "split" | "split-across-batches" => Ok(Self::SplitAcrossBatches),
            "fresh" | "fresh-batch" => Ok(Self::FreshBatch),
            other => Err(DomainError::validation(format!(
                "unknown packing policy '{other}' (expected 'split' or 'fresh-batch')"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub max_batch_mass_g: f64,
    pub packing: PackingPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_batch_mass_g: DEFAULT_MAX_BATCH_MASS_G,
            packing: PackingPolicy::default(),
        }
    }
}

impl EngineConfig {
    pub fn with_max_batch_mass_g(mut self, max_batch_mass_g: f64) -> Self {
        self.max_batch_mass_g = max_batch_mass_g;
        self
    }

    pub fn with_packing(mut self, packing: PackingPolicy) -> Self {
        self.packing = packing;
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        if !(self.max_batch_mass_g.is_finite() && self.max_batch_mass_g > 0.0) {
            return Err(DomainError::validation(
                "max_batch_mass_g must be a finite positive number",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_split_packing_under_1800g() {
        let config = EngineConfig::default();
        assert_eq!(config.max_batch_mass_g, 1800.0);
        assert_eq!(config.packing, PackingPolicy::SplitAcrossBatches);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn packing_policy_parses_short_and_long_names() {
        assert_eq!("split".parse::<PackingPolicy>().unwrap(), PackingPolicy::SplitAcrossBatches);
        assert_eq!("Fresh-Batch".parse::<PackingPolicy>().unwrap(), PackingPolicy::FreshBatch);
        assert!("best-fit".parse::<PackingPolicy>().is_err());
    }

    #[test]
    fn rejects_non_positive_batch_cap() {
        assert!(EngineConfig::default().with_max_batch_mass_g(0.0).validate().is_err());
        assert!(EngineConfig::default().with_max_batch_mass_g(f64::NAN).validate().is_err());
    }
}
