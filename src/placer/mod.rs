//! Annealing label placer.
//!
//! A single-solution trajectory metaheuristic tailored to label placement:
//! random translate/rotate moves on label boxes, Metropolis acceptance
//! under a decaying temperature, and a post-pass that decides which labels
//! still need a visible leader line.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Christensen, Marks & Shieber (1995), "An Empirical Study of Algorithms
//!   for Point-Feature Label Placement"

mod config;
mod energy;
mod runner;
mod types;

pub use config::{CoolingSchedule, Padding, PlacerConfig, Weights};
pub use energy::EnergyModel;
pub use runner::{LabelPlacer, RunStats};
pub use types::{Anchor, Label};
