use crate::settings::Settings;
use std::time::Duration;

pub const DEFAULT_LAYERS: usize = 25;
pub const DEFAULT_INTERVAL_MS: u64 = 80;
pub const DEFAULT_RESOLUTION: usize = 100;

const MIN_INTERVAL_MS: u64 = 10;
const RESOLUTION_RANGE: (usize, usize) = (10, 400);

/// Timing and resolution of the ripple animation
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    /// Ripple frames per session; one transparent frame follows them
    pub layers: usize,
    /// Tick period
    pub interval: Duration,
    /// Side length of the ripple field grid
    pub resolution: usize,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            layers: DEFAULT_LAYERS,
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

impl AnimationConfig {
    /// Merge settings-file values with command-line overrides, clamping to sane bounds
    pub fn resolve(
        settings: &Settings,
        layers: Option<usize>,
        interval_ms: Option<u64>,
        resolution: Option<usize>,
    ) -> Self {
        let anim = &settings.animation;
        let layers = layers.or(anim.layers).unwrap_or(DEFAULT_LAYERS).max(1);
        let interval_ms = interval_ms
            .or(anim.interval_ms)
            .unwrap_or(DEFAULT_INTERVAL_MS)
            .max(MIN_INTERVAL_MS);
        let resolution = resolution
            .or(anim.resolution)
            .unwrap_or(DEFAULT_RESOLUTION)
            .clamp(RESOLUTION_RANGE.0, RESOLUTION_RANGE.1);

        Self {
            layers,
            interval: Duration::from_millis(interval_ms),
            resolution,
        }
    }
}

/// Configuration for the interactive canvas
#[derive(Debug, Clone)]
pub struct ShowConfig {
    pub animation: AnimationConfig,
    pub seed: Option<u64>,
    pub show_table: bool,
}

/// Configuration for a headless single-session replay
#[derive(Debug, Clone)]
pub struct ReplayConfig {
    pub animation: AnimationConfig,
    pub seed: Option<u64>,
    /// Named district; a random click selection is used when absent
    pub district: Option<String>,
    /// Overrides the selected district's rainfall
    pub rainfall: Option<f64>,
    pub center: (f64, f64),
}

/// Seed from the command line, or the wall clock
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0) // Fallback seed for misconfigured system clocks
    })
}
