//! Placer configuration and cooling schedules.

use std::fmt;

/// Cooling schedule for temperature reduction.
///
/// The schedule is applied once after each sweep with the signature
/// `(current_t, initial_t, nsweeps) -> new_t`.
pub enum CoolingSchedule {
    /// Linear cooling: `T - initial_t / nsweeps`.
    ///
    /// Fixed total duration: starting from `initial_t`, the temperature
    /// reaches zero after exactly `nsweeps` applications. The first sweep
    /// always runs at the full initial temperature.
    Linear,

    /// A user-supplied schedule with the same signature.
    Custom(Box<dyn Fn(f64, f64, usize) -> f64 + Send + Sync>),
}

impl CoolingSchedule {
    /// Computes the temperature for the next sweep.
    pub fn next(&self, current_t: f64, initial_t: f64, nsweeps: usize) -> f64 {
        match self {
            CoolingSchedule::Linear => current_t - initial_t / nsweeps as f64,
            CoolingSchedule::Custom(f) => f(current_t, initial_t, nsweeps),
        }
    }
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Linear
    }
}

impl fmt::Debug for CoolingSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoolingSchedule::Linear => write!(f, "Linear"),
            CoolingSchedule::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Weights for the terms of the default energy function.
///
/// Overlap defects carry the largest weights: an overlapping layout is the
/// worst outcome, a long leader line merely undesirable.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weights {
    /// Leader line length.
    pub leader_len: f64,
    /// Per-crossing penalty for intersecting leader lines.
    pub leader_crossing: f64,
    /// Label-label overlap area.
    pub label_overlap: f64,
    /// Label-anchor overlap area.
    pub anchor_overlap: f64,
    /// Orientation bias (quadrant bucket multiplier).
    pub orientation: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            leader_len: 0.2,
            leader_crossing: 1.0,
            label_overlap: 30.0,
            anchor_overlap: 30.0,
            orientation: 3.0,
        }
    }
}

impl Weights {
    pub(crate) fn is_finite(&self) -> bool {
        self.leader_len.is_finite()
            && self.leader_crossing.is_finite()
            && self.label_overlap.is_finite()
            && self.anchor_overlap.is_finite()
            && self.orientation.is_finite()
    }
}

/// Canvas padding, keeping labels away from each edge.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Padding {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.left.is_finite()
            && self.right.is_finite()
            && self.top.is_finite()
            && self.bottom.is_finite()
    }
}

/// Configuration for the annealing label placer.
///
/// # Examples
///
/// ```
/// use label_anneal::placer::{Padding, PlacerConfig};
///
/// let config = PlacerConfig::default()
///     .with_width(800.0)
///     .with_height(600.0)
///     .with_padding(Padding::new(10.0, 10.0, 10.0, 10.0))
///     .with_label_dist(30.0)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacerConfig {
    /// Canvas width.
    pub width: f64,

    /// Canvas height.
    pub height: f64,

    /// Padding inside the canvas edges.
    pub padding: Padding,

    /// Safe viewing distance between labels. A label whose every neighbor
    /// is at least this far away gets its leader line suppressed by the
    /// post-pass.
    pub label_dist: f64,

    /// Maximum translation per move; offsets are drawn uniformly from
    /// `[-max_move/2, +max_move/2]` per axis.
    pub max_move: f64,

    /// Maximum rotation per move, in radians; angles are drawn uniformly
    /// from `[-max_angle/2, +max_angle/2]`.
    pub max_angle: f64,

    /// Energy term weights.
    pub weights: Weights,

    /// Random seed for reproducibility. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for PlacerConfig {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
            padding: Padding::default(),
            label_dist: 50.0,
            max_move: 5.0,
            max_angle: 0.5,
            weights: Weights::default(),
            seed: None,
        }
    }
}

impl PlacerConfig {
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_label_dist(mut self, dist: f64) -> Self {
        self.label_dist = dist;
        self
    }

    pub fn with_max_move(mut self, max_move: f64) -> Self {
        self.max_move = max_move;
        self
    }

    pub fn with_max_angle(mut self, max_angle: f64) -> Self {
        self.max_angle = max_angle;
        self
    }

    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(format!("width must be finite and positive, got {}", self.width));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(format!(
                "height must be finite and positive, got {}",
                self.height
            ));
        }
        if !self.padding.is_finite() {
            return Err("padding must be finite".into());
        }
        if !self.label_dist.is_finite() || self.label_dist < 0.0 {
            return Err(format!(
                "label_dist must be finite and non-negative, got {}",
                self.label_dist
            ));
        }
        if !self.max_move.is_finite() || self.max_move <= 0.0 {
            return Err(format!(
                "max_move must be finite and positive, got {}",
                self.max_move
            ));
        }
        if !self.max_angle.is_finite() || self.max_angle <= 0.0 {
            return Err(format!(
                "max_angle must be finite and positive, got {}",
                self.max_angle
            ));
        }
        if !self.weights.is_finite() {
            return Err("weights must be finite".into());
        }
        Ok(())
    }
}
