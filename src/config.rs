//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Default board height, in cells.
pub const DEFAULT_ROWS: i32 = 16;
/// Default board width, in cells.
pub const DEFAULT_COLUMNS: i32 = 16;
/// Default probability that `randomize()` makes a cell alive.
pub const DEFAULT_DENSITY: f64 = 0.5;

/// Settings used to build an [`Engine`](crate::Engine).
///
/// Missing fields fall back to the defaults, so a partial document such as
/// `{"rows": 32}` is valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rows: i32,
    pub columns: i32,
    /// Probability in `[0, 1]` used by `randomize()`. Clamped on use.
    pub density: f64,
    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            density: DEFAULT_DENSITY,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn new(rows: i32, columns: i32) -> Self {
        EngineConfig {
            rows,
            columns,
            ..Default::default()
        }
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Clamp a probability into `[0, 1]`. NaN becomes 0.
#[inline]
pub(crate) fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}
