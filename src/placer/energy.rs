//! Energy evaluation for label configurations.
//!
//! The energy of label `i` scores its current position against the full
//! configuration: leader length, orientation bias, leader-leader crossings,
//! label-label overlap, and label-anchor overlap. Lower is better.

use std::fmt;

use super::config::Weights;
use super::types::{Anchor, Label};
use crate::geometry::{overlap_span, segments_intersect};

/// Energy strategy: the built-in multi-term function or a user-supplied
/// replacement.
///
/// A custom function receives the label index under evaluation plus the
/// full label and anchor collections, and must return a non-negative
/// score (lower is better). Once installed it is used exclusively for
/// every move evaluation.
pub enum EnergyModel {
    /// The default five-term energy, weighted by [`Weights`].
    Default,
    /// A user-supplied energy function.
    Custom(Box<dyn Fn(usize, &[Label], &[Anchor]) -> f64 + Send + Sync>),
}

impl EnergyModel {
    /// Evaluates the energy of label `index` in the current configuration.
    pub fn evaluate(
        &self,
        index: usize,
        labels: &[Label],
        anchors: &[Anchor],
        weights: &Weights,
    ) -> f64 {
        match self {
            EnergyModel::Default => default_energy(index, labels, anchors, weights),
            EnergyModel::Custom(f) => f(index, labels, anchors),
        }
    }
}

impl Default for EnergyModel {
    fn default() -> Self {
        EnergyModel::Default
    }
}

impl fmt::Debug for EnergyModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnergyModel::Default => write!(f, "Default"),
            EnergyModel::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Quadrant penalty bucket for the direction from anchor to label.
///
/// No penalty when the label sits up-right of its anchor, increasing
/// counter-clockwise. `dy` is measured upward (`anchor.y - label.y`)
/// since canvas y grows downward. A zero-length leader has no direction
/// and falls in the worst bucket.
fn orientation_bucket(dx: f64, dy: f64, dist: f64) -> f64 {
    if dist == 0.0 {
        return 3.0;
    }
    let ux = dx / dist;
    let uy = dy / dist;
    if ux > 0.0 && uy > 0.0 {
        0.0
    } else if ux < 0.0 && uy > 0.0 {
        1.0
    } else if ux < 0.0 && uy < 0.0 {
        2.0
    } else {
        3.0
    }
}

/// The default energy function.
fn default_energy(index: usize, labels: &[Label], anchors: &[Anchor], weights: &Weights) -> f64 {
    let lab = &labels[index];
    let anc = &anchors[index];

    let dx = lab.x - anc.x;
    let dy = anc.y - lab.y;
    let dist = (dx * dx + dy * dy).sqrt();

    let mut energy = 0.0;

    if dist > 0.0 {
        energy += dist * weights.leader_len;
    }
    energy += orientation_bucket(dx, dy, dist) * weights.orientation;

    for (j, other) in labels.iter().enumerate() {
        if j != index {
            // leader-leader crossing
            if segments_intersect(
                anc.x, anc.y, lab.x, lab.y, anchors[j].x, anchors[j].y, other.x, other.y,
            ) {
                energy += weights.leader_crossing;
            }

            // label-label overlap area
            let x_overlap = overlap_span(lab.left(), lab.right(), other.left(), other.right());
            let y_overlap = overlap_span(lab.top(), lab.bottom(), other.top(), other.bottom());
            energy += x_overlap * y_overlap * weights.label_overlap;
        }

        // label-anchor overlap area, against every anchor including our own
        let a = &anchors[j];
        let x_overlap = overlap_span(lab.left(), lab.right(), a.x - a.r, a.x + a.r);
        let y_overlap = overlap_span(lab.top(), lab.bottom(), a.y - a.r, a.y + a.r);
        energy += x_overlap * y_overlap * weights.anchor_overlap;
    }

    energy
}
