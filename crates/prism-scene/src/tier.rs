//! Device performance classification.
//!
//! Resolved once at startup into a [`RenderProfile`] that is passed down to
//! every scene; nothing re-reads device signals afterwards.

use std::fmt;
use std::sync::LazyLock;

use prism_config::schema::{ParticleBudget, PerformanceConfig, PerformancePreset};
use regex::Regex;
use tracing::info;

static APPLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)Apple GPU|Apple M").unwrap());
static INTEL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)Intel.*HD|Intel.*UHD").unwrap());
static DISCRETE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)NVIDIA|AMD|Radeon").unwrap());
static MOBILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini").unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tier::Low => "low",
            Tier::Medium => "medium",
            Tier::High => "high",
        })
    }
}

/// What the graphics stack reports about the GPU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GpuInfo {
    /// No hardware-accelerated context at all.
    Unavailable,
    /// A context exists but the renderer string is hidden.
    Masked,
    Renderer(String),
}

impl GpuInfo {
    pub fn score(&self) -> u32 {
        match self {
            GpuInfo::Unavailable => 1,
            GpuInfo::Masked => 2,
            GpuInfo::Renderer(name) => {
                if APPLE_RE.is_match(name) {
                    3
                } else if INTEL_RE.is_match(name) {
                    1
                } else if DISCRETE_RE.is_match(name) {
                    3
                } else {
                    2
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeviceSignals {
    pub cores: Option<u32>,
    pub memory_gb: Option<f32>,
    pub gpu: GpuInfo,
    pub mobile: bool,
}

impl Default for DeviceSignals {
    fn default() -> Self {
        Self {
            cores: None,
            memory_gb: None,
            gpu: GpuInfo::Masked,
            mobile: false,
        }
    }
}

impl DeviceSignals {
    /// Signals readable from the host: logical cores only.
    pub fn detect() -> Self {
        Self {
            cores: std::thread::available_parallelism()
                .ok()
                .map(|n| n.get() as u32),
            ..Self::default()
        }
    }

    /// Mark the device mobile if the user agent looks like one.
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.mobile = is_mobile_user_agent(user_agent);
        self
    }

    /// Weighted score in `1..=9`.
    pub fn score(&self) -> u32 {
        let cores = self.cores.unwrap_or(2);
        let core_score = match cores {
            c if c >= 8 => 3,
            c if c >= 4 => 2,
            _ => 1,
        };
        let memory_score = match self.memory_gb {
            Some(m) if m >= 8.0 => 3,
            Some(m) if m >= 4.0 => 2,
            Some(_) => 1,
            None => 2,
        };
        let score = core_score + memory_score + self.gpu.score();
        if self.mobile {
            score.saturating_sub(2).max(1)
        } else {
            score
        }
    }

    pub fn classify(&self) -> Tier {
        tier_for_score(self.score())
    }
}

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    MOBILE_RE.is_match(user_agent)
}

pub fn tier_for_score(score: u32) -> Tier {
    match score {
        s if s >= 7 => Tier::High,
        s if s >= 5 => Tier::Medium,
        _ => Tier::Low,
    }
}

/// Shader float precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Highp,
    Mediump,
}

/// Everything a scene needs to know about the device.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderProfile {
    pub tier: Tier,
    pub score: u32,
    pub budget: ParticleBudget,
    pub bloom: bool,
    pub antialias: bool,
    pub precision: Precision,
}

impl RenderProfile {
    /// Fixed profile for `tier` with the built-in budgets.
    pub fn for_tier(tier: Tier) -> Self {
        let budget = match tier {
            Tier::Low => ParticleBudget::LOW,
            Tier::Medium => ParticleBudget::MEDIUM,
            Tier::High => ParticleBudget::HIGH,
        };
        Self::build(tier, 0, budget)
    }

    fn build(tier: Tier, score: u32, budget: ParticleBudget) -> Self {
        Self {
            tier,
            score,
            budget,
            bloom: tier >= Tier::Medium,
            antialias: tier == Tier::High,
            precision: if tier == Tier::High {
                Precision::Highp
            } else {
                Precision::Mediump
            },
        }
    }

    /// Resolve the profile for this run. A non-`auto` preset wins over the
    /// device score.
    pub fn resolve(config: &PerformanceConfig, signals: &DeviceSignals) -> Self {
        let score = signals.score();
        let tier = match config.preset {
            PerformancePreset::Auto => tier_for_score(score),
            PerformancePreset::Low => Tier::Low,
            PerformancePreset::Medium => Tier::Medium,
            PerformancePreset::High => Tier::High,
        };
        let budget = match tier {
            Tier::Low => config.budgets.low,
            Tier::Medium => config.budgets.medium,
            Tier::High => config.budgets.high,
        };
        let profile = Self::build(tier, score, budget);
        info!(
            tier = %profile.tier,
            score,
            preset = ?config.preset,
            particles = budget.total_particles(),
            "render profile resolved"
        );
        profile
    }
}
