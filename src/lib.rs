//! Simulated-annealing label placement for 2D point annotations.
//!
//! Given a set of fixed **anchors** (points with an exclusion radius) and an
//! index-aligned set of movable **labels** (axis-aligned text boxes), the
//! solver searches for label positions that:
//!
//! - avoid label-label and label-anchor overlap,
//! - keep each label close to the anchor it annotates,
//! - minimize crossings between leader lines (anchor-to-label connectors),
//! - prefer the conventional upper-right placement.
//!
//! The search is a single-solution trajectory metaheuristic: each sweep
//! perturbs labels by random translation or rotation about their anchor,
//! accepting moves via the Metropolis criterion under a decaying
//! temperature. Both the energy function and the cooling schedule are
//! pluggable strategies. After annealing, a post-pass marks which labels
//! still need a visible leader line.
//!
//! This is a heuristic local search, not an exact placement solver: the
//! result is usually overlap-free for reasonable densities, but no global
//! optimality is guaranteed.
//!
//! # Examples
//!
//! ```
//! use label_anneal::placer::{Anchor, Label, LabelPlacer, PlacerConfig};
//!
//! let anchors = vec![Anchor::new(120.0, 80.0, 3.0), Anchor::new(140.0, 95.0, 3.0)];
//! let mut labels = vec![
//!     Label::new(120.0, 80.0, 40.0, 12.0),
//!     Label::new(140.0, 95.0, 40.0, 12.0),
//! ];
//!
//! let config = PlacerConfig::default()
//!     .with_width(400.0)
//!     .with_height(300.0)
//!     .with_seed(42);
//!
//! let stats = LabelPlacer::new(config)
//!     .start(&mut labels, &anchors, 500)
//!     .unwrap();
//!
//! assert_eq!(stats.moves, 500 * labels.len());
//! ```

pub mod geometry;
pub mod placer;
