//! The annealing loop, move generators, and leader-line post-pass.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::{CoolingSchedule, PlacerConfig};
use super::energy::EnergyModel;
use super::types::{Anchor, Label};
use crate::geometry::point_dist;

/// Statistics from one placement run.
#[derive(Debug, Clone)]
pub struct RunStats {
    /// Number of sweeps performed.
    pub sweeps: usize,

    /// Total number of moves attempted (`sweeps * label_count`).
    pub moves: usize,

    /// Number of accepted moves.
    pub accepted: usize,

    /// Number of rejected (reverted) moves.
    pub rejected: usize,

    /// Number of accepted moves that increased energy.
    pub uphill_accepted: usize,

    /// Accepted uphill moves per sweep. Shrinks toward zero as the
    /// temperature decays.
    pub uphill_per_sweep: Vec<usize>,

    /// Temperature after the final sweep.
    pub final_temperature: f64,
}

/// Outcome of a single Monte Carlo move.
struct MoveOutcome {
    accepted: bool,
    uphill: bool,
}

/// Places labels around fixed anchors by simulated annealing.
///
/// The placer holds configuration and the two pluggable strategies
/// (energy function, cooling schedule). It stores no geometry: [`start`]
/// borrows the label collection exclusively for the duration of the run
/// and mutates it in place, reading the anchor collection alongside.
///
/// [`start`]: LabelPlacer::start
///
/// # Examples
///
/// ```
/// use label_anneal::placer::{Anchor, Label, LabelPlacer, PlacerConfig};
///
/// let anchors = vec![Anchor::new(30.0, 30.0, 2.0)];
/// let mut labels = vec![Label::new(30.0, 30.0, 20.0, 8.0)];
///
/// let placer = LabelPlacer::new(PlacerConfig::default().with_seed(1));
/// placer.start(&mut labels, &anchors, 200).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct LabelPlacer {
    config: PlacerConfig,
    energy: EnergyModel,
    schedule: CoolingSchedule,
}

impl LabelPlacer {
    pub fn new(config: PlacerConfig) -> Self {
        Self {
            config,
            energy: EnergyModel::default(),
            schedule: CoolingSchedule::default(),
        }
    }

    /// Installs a replacement energy function. Once installed it is used
    /// exclusively for every move evaluation.
    pub fn with_energy(mut self, energy: EnergyModel) -> Self {
        self.energy = energy;
        self
    }

    /// Installs a replacement cooling schedule.
    pub fn with_schedule(mut self, schedule: CoolingSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// The current configuration.
    pub fn config(&self) -> &PlacerConfig {
        &self.config
    }

    /// The active energy strategy.
    pub fn energy(&self) -> &EnergyModel {
        &self.energy
    }

    /// The active cooling schedule.
    pub fn schedule(&self) -> &CoolingSchedule {
        &self.schedule
    }

    /// Runs `nsweeps` annealing sweeps followed by the leader-line
    /// post-pass, seeding the random source from the configuration.
    ///
    /// Each sweep attempts one move per label, though every move targets a
    /// uniformly random label, so per-sweep coverage is probabilistic. On
    /// return, `labels` holds the final positions and the post-pass
    /// outputs (`count`, `show_line`).
    ///
    /// Fails fast on invalid configuration, mismatched collection lengths,
    /// or non-finite geometry. Empty collections are a harmless no-op.
    pub fn start(
        &self,
        labels: &mut [Label],
        anchors: &[Anchor],
        nsweeps: usize,
    ) -> Result<RunStats, String> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        self.start_with_rng(labels, anchors, nsweeps, &mut rng)
    }

    /// Like [`start`], but draws randomness from a caller-supplied source,
    /// ignoring the configured seed.
    ///
    /// [`start`]: LabelPlacer::start
    pub fn start_with_rng<R: Rng>(
        &self,
        labels: &mut [Label],
        anchors: &[Anchor],
        nsweeps: usize,
        rng: &mut R,
    ) -> Result<RunStats, String> {
        self.config.validate()?;
        if labels.len() != anchors.len() {
            return Err(format!(
                "label/anchor collections must be index-aligned: {} labels vs {} anchors",
                labels.len(),
                anchors.len()
            ));
        }
        if let Some(i) = labels.iter().position(|l| !l.is_finite()) {
            return Err(format!("label {i} has non-finite geometry"));
        }
        if let Some(i) = anchors.iter().position(|a| !a.is_finite()) {
            return Err(format!("anchor {i} has non-finite geometry"));
        }

        let m = labels.len();
        let initial_t = 1.0;
        let mut curr_t = initial_t;

        let mut stats = RunStats {
            sweeps: nsweeps,
            moves: 0,
            accepted: 0,
            rejected: 0,
            uphill_accepted: 0,
            uphill_per_sweep: Vec::with_capacity(nsweeps),
            final_temperature: curr_t,
        };

        for _ in 0..nsweeps {
            let mut uphill = 0;
            for _ in 0..m {
                let outcome = if rng.random_range(0.0..1.0) < 0.5 {
                    self.mc_translate(labels, anchors, curr_t, rng)
                } else {
                    self.mc_rotate(labels, anchors, curr_t, rng)
                };
                stats.moves += 1;
                if outcome.accepted {
                    stats.accepted += 1;
                    if outcome.uphill {
                        stats.uphill_accepted += 1;
                        uphill += 1;
                    }
                } else {
                    stats.rejected += 1;
                }
            }
            stats.uphill_per_sweep.push(uphill);
            curr_t = self.schedule.next(curr_t, initial_t, nsweeps);
        }
        stats.final_temperature = curr_t;

        self.post_pass(labels);
        Ok(stats)
    }

    /// Random translation move on a uniformly chosen label.
    fn mc_translate<R: Rng>(
        &self,
        labels: &mut [Label],
        anchors: &[Anchor],
        curr_t: f64,
        rng: &mut R,
    ) -> MoveOutcome {
        let i = rng.random_range(0..labels.len());
        let (x_old, y_old) = (labels[i].x, labels[i].y);
        let old_energy = self.energy.evaluate(i, labels, anchors, &self.config.weights);

        labels[i].x += rng.random_range(-0.5..0.5) * self.config.max_move;
        labels[i].y += rng.random_range(-0.5..0.5) * self.config.max_move;
        self.repair_boundary(&mut labels[i], x_old, y_old);

        self.metropolis(i, labels, anchors, old_energy, x_old, y_old, curr_t, rng)
    }

    /// Random rotation move about the label's own anchor.
    fn mc_rotate<R: Rng>(
        &self,
        labels: &mut [Label],
        anchors: &[Anchor],
        curr_t: f64,
        rng: &mut R,
    ) -> MoveOutcome {
        let i = rng.random_range(0..labels.len());
        let (x_old, y_old) = (labels[i].x, labels[i].y);
        let old_energy = self.energy.evaluate(i, labels, anchors, &self.config.weights);

        let angle = rng.random_range(-0.5..0.5) * self.config.max_angle;
        let (s, c) = angle.sin_cos();
        let dx = labels[i].x - anchors[i].x;
        let dy = labels[i].y - anchors[i].y;
        labels[i].x = dx * c - dy * s + anchors[i].x;
        labels[i].y = dx * s + dy * c + anchors[i].y;
        self.repair_boundary(&mut labels[i], x_old, y_old);

        self.metropolis(i, labels, anchors, old_energy, x_old, y_old, curr_t, rng)
    }

    /// Hard-wall boundary repair.
    ///
    /// A trial position outside the padded canvas is not rejected but
    /// replaced by an offset from the *old* position, in check order:
    /// right, left, bottom, top. The repaired position is a new trial,
    /// still subject to the acceptance test. Crude but effective
    /// boundary repulsion; a reflect-at-wall variant would slot in here.
    fn repair_boundary(&self, label: &mut Label, x_old: f64, y_old: f64) {
        let cfg = &self.config;
        if label.x + label.width > cfg.width - cfg.padding.right {
            label.x = x_old - 100.0;
        }
        if label.x < cfg.padding.left {
            label.x = x_old + 1.0;
        }
        if label.y > cfg.height - cfg.padding.bottom {
            label.y = y_old - 1.0;
        }
        if label.y < cfg.padding.top {
            label.y = y_old + 1.0;
        }
    }

    /// Metropolis acceptance: keep the trial position with probability
    /// `exp(-delta / T)`, otherwise revert to the saved position.
    #[allow(clippy::too_many_arguments)]
    fn metropolis<R: Rng>(
        &self,
        i: usize,
        labels: &mut [Label],
        anchors: &[Anchor],
        old_energy: f64,
        x_old: f64,
        y_old: f64,
        curr_t: f64,
        rng: &mut R,
    ) -> MoveOutcome {
        let new_energy = self.energy.evaluate(i, labels, anchors, &self.config.weights);
        let delta = new_energy - old_energy;

        if rng.random_range(0.0..1.0) < (-delta / curr_t).exp() {
            MoveOutcome {
                accepted: true,
                uphill: delta > 0.0,
            }
        } else {
            labels[i].x = x_old;
            labels[i].y = y_old;
            MoveOutcome {
                accepted: false,
                uphill: false,
            }
        }
    }

    /// Decides leader-line visibility after annealing.
    ///
    /// For each label, counts how many other labels keep all four
    /// reference-corner distances at or above `label_dist`. The leader
    /// line is suppressed only when every other label is safely distant,
    /// i.e. the label's association with its anchor is unambiguous.
    fn post_pass(&self, labels: &mut [Label]) {
        let m = labels.len();
        for i in 0..m {
            let mut count = 0;
            for j in 0..m {
                if i != j && self.safely_apart(&labels[i], &labels[j]) {
                    count += 1;
                }
            }
            labels[i].count = count;
            labels[i].show_line = count != m - 1;
        }
    }

    /// True if the four distances between the two labels' reference
    /// corners (bottom-left and bottom-right of each box) all reach the
    /// configured safe viewing distance.
    fn safely_apart(&self, a: &Label, b: &Label) -> bool {
        let d = self.config.label_dist;
        point_dist(a.x, a.y, b.x, b.y) >= d
            && point_dist(a.x, a.y, b.x + b.width, b.y) >= d
            && point_dist(a.x + a.width, a.y, b.x, b.y) >= d
            && point_dist(a.x + a.width, a.y, b.x + b.width, b.y) >= d
    }
}
