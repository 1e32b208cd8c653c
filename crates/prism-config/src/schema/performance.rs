//! Performance configuration types.

use serde::{Deserialize, Serialize};

/// Performance quality preset. `Auto` classifies the device at startup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum PerformancePreset {
    #[default]
    Auto,
    Low,
    Medium,
    High,
}

/// Particle field counts for one tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParticleBudget {
    pub small_fields: u32,
    pub small_particles: u32,
    pub large_fields: u32,
    pub large_particles: u32,
}

impl ParticleBudget {
    pub const LOW: Self = Self {
        small_fields: 8,
        small_particles: 100,
        large_fields: 4,
        large_particles: 6,
    };
    pub const MEDIUM: Self = Self {
        small_fields: 15,
        small_particles: 200,
        large_fields: 8,
        large_particles: 10,
    };
    pub const HIGH: Self = Self {
        small_fields: 25,
        small_particles: 300,
        large_fields: 12,
        large_particles: 12,
    };

    /// Total number of point sprites across all fields.
    pub fn total_particles(&self) -> u32 {
        self.small_fields * self.small_particles + self.large_fields * self.large_particles
    }
}

/// Per-tier particle budgets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TierBudgets {
    pub low: ParticleBudget,
    pub medium: ParticleBudget,
    pub high: ParticleBudget,
}

impl Default for TierBudgets {
    fn default() -> Self {
        Self {
            low: ParticleBudget::LOW,
            medium: ParticleBudget::MEDIUM,
            high: ParticleBudget::HIGH,
        }
    }
}

/// Performance configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    pub preset: PerformancePreset,
    pub frame_rate: u32,
    pub budgets: TierBudgets,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            preset: PerformancePreset::Auto,
            frame_rate: 60,
            budgets: TierBudgets::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn performance_defaults() {
        let config = PerformanceConfig::default();
        assert_eq!(config.preset, PerformancePreset::Auto);
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.budgets.high, ParticleBudget::HIGH);
    }

    #[test]
    fn preset_parses_lowercase() {
        let config: PerformanceConfig = toml::from_str(r#"preset = "medium""#).unwrap();
        assert_eq!(config.preset, PerformancePreset::Medium);
    }

    #[test]
    fn budget_override_in_toml() {
        let toml_str = r#"
[budgets.low]
small_fields = 2
small_particles = 50
large_fields = 1
large_particles = 3
"#;
        let config: PerformanceConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.budgets.low.small_fields, 2);
        assert_eq!(config.budgets.medium, ParticleBudget::MEDIUM);
    }

    #[test]
    fn total_particles() {
        assert_eq!(ParticleBudget::HIGH.total_particles(), 25 * 300 + 12 * 12);
        assert_eq!(ParticleBudget::LOW.total_particles(), 824);
    }
}
