//! Runs several engines on one instance and compares them.
//!
//! Every engine gets its own config and its own seed, so a suite run is
//! reproducible whether the engines run one after another or, with the
//! `parallel` feature, side by side on the rayon pool.

use std::fmt;
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::info;

use crate::distance::DistanceModel;
use crate::error::Result;
use crate::pso::{ParticleSwarm, PsoConfig};
use crate::sa::{SaConfig, SimulatedAnnealing};
use crate::tabu::{TabuConfig, TabuSearch};
use crate::tour::Tour;
use crate::vnd::{VariableNeighborhoodDescent, VndConfig};

/// Identifies an engine in a [`Suite`] report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineKind {
    Tabu,
    SimulatedAnnealing,
    ParticleSwarm,
    Vnd,
}

impl EngineKind {
    /// Reporting order.
    pub const ALL: [EngineKind; 4] = [
        EngineKind::Tabu,
        EngineKind::SimulatedAnnealing,
        EngineKind::ParticleSwarm,
        EngineKind::Vnd,
    ];
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EngineKind::Tabu => "tabu search",
            EngineKind::SimulatedAnnealing => "simulated annealing",
            EngineKind::ParticleSwarm => "particle swarm",
            EngineKind::Vnd => "variable neighborhood descent",
        };
        f.write_str(name)
    }
}

/// Outcome of one engine within a suite run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineReport {
    pub engine: EngineKind,
    pub tour: Tour,
    pub cost: f64,
    /// Wall-clock time of the engine's `run()`.
    pub elapsed: Duration,
}

/// One config per engine; `None` skips that engine.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceModel;
/// use u_tsp::pso::PsoConfig;
/// use u_tsp::sa::SaConfig;
/// use u_tsp::suite::{EngineKind, Suite};
/// use u_tsp::tabu::TabuConfig;
/// use u_tsp::vnd::VndConfig;
///
/// let model = DistanceModel::random_seeded(8, 10..99, 1).unwrap();
/// let suite = Suite::default()
///     .with_tabu(TabuConfig::default().with_iterations(200).with_seed(1))
///     .with_sa(SaConfig::default().with_seed(2))
///     .with_pso(PsoConfig::default().with_iterations(10).with_seed(3))
///     .with_vnd(VndConfig::default().with_seed(4));
///
/// let reports = suite.run(&model).unwrap();
/// assert_eq!(reports.len(), 4);
/// assert_eq!(reports[0].engine, EngineKind::Tabu);
/// let best = Suite::best(&reports).unwrap();
/// assert!(reports.iter().all(|r| best.cost <= r.cost));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Suite {
    pub tabu: Option<TabuConfig>,
    pub sa: Option<SaConfig>,
    pub pso: Option<PsoConfig>,
    pub vnd: Option<VndConfig>,
    /// Run engines on the rayon pool. Ignored without the `parallel` feature.
    pub parallel: bool,
}

impl Default for Suite {
    fn default() -> Self {
        Self {
            tabu: Some(TabuConfig::default()),
            sa: Some(SaConfig::default()),
            pso: Some(PsoConfig::default()),
            vnd: Some(VndConfig::default()),
            parallel: false,
        }
    }
}

impl Suite {
    /// A suite with every engine skipped.
    pub fn empty() -> Self {
        Self {
            tabu: None,
            sa: None,
            pso: None,
            vnd: None,
            parallel: false,
        }
    }

    pub fn with_tabu(mut self, config: TabuConfig) -> Self {
        self.tabu = Some(config);
        self
    }

    pub fn with_sa(mut self, config: SaConfig) -> Self {
        self.sa = Some(config);
        self
    }

    pub fn with_pso(mut self, config: PsoConfig) -> Self {
        self.pso = Some(config);
        self
    }

    pub fn with_vnd(mut self, config: VndConfig) -> Self {
        self.vnd = Some(config);
        self
    }

    /// Removes an engine from the suite.
    pub fn skip(mut self, engine: EngineKind) -> Self {
        match engine {
            EngineKind::Tabu => self.tabu = None,
            EngineKind::SimulatedAnnealing => self.sa = None,
            EngineKind::ParticleSwarm => self.pso = None,
            EngineKind::Vnd => self.vnd = None,
        }
        self
    }

    /// Enables running engines concurrently.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Engines that will run, in reporting order.
    pub fn engines(&self) -> Vec<EngineKind> {
        EngineKind::ALL
            .into_iter()
            .filter(|engine| match engine {
                EngineKind::Tabu => self.tabu.is_some(),
                EngineKind::SimulatedAnnealing => self.sa.is_some(),
                EngineKind::ParticleSwarm => self.pso.is_some(),
                EngineKind::Vnd => self.vnd.is_some(),
            })
            .collect()
    }

    /// Runs every configured engine on `model`.
    ///
    /// Every engine is constructed before any of them runs, so an invalid
    /// config fails the call without spending search time.
    #[tracing::instrument(level = "debug", name = "suite", skip_all, fields(locations = model.size()))]
    pub fn run(&self, model: &DistanceModel) -> Result<Vec<EngineReport>> {
        let engines = self.build(model)?;

        #[cfg(feature = "parallel")]
        let reports: Vec<EngineReport> = if self.parallel {
            engines.par_iter().map(Engine::run).collect()
        } else {
            engines.iter().map(Engine::run).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let reports: Vec<EngineReport> = engines.iter().map(Engine::run).collect();

        for report in &reports {
            info!(
                engine = %report.engine,
                cost = report.cost,
                elapsed_ms = report.elapsed.as_millis() as u64,
                "engine finished"
            );
        }
        Ok(reports)
    }

    fn build<'a>(&self, model: &'a DistanceModel) -> Result<Vec<Engine<'a>>> {
        let mut engines = Vec::with_capacity(EngineKind::ALL.len());
        if let Some(config) = &self.tabu {
            engines.push(Engine::Tabu(TabuSearch::new(model, config.clone())?));
        }
        if let Some(config) = &self.sa {
            engines.push(Engine::Sa(SimulatedAnnealing::new(model, config.clone())?));
        }
        if let Some(config) = &self.pso {
            engines.push(Engine::Pso(ParticleSwarm::new(model, config.clone())?));
        }
        if let Some(config) = &self.vnd {
            engines.push(Engine::Vnd(VariableNeighborhoodDescent::new(
                model,
                config.clone(),
            )?));
        }
        Ok(engines)
    }

    /// Cheapest report, first one on ties.
    pub fn best(reports: &[EngineReport]) -> Option<&EngineReport> {
        reports
            .iter()
            .reduce(|best, r| if r.cost < best.cost { r } else { best })
    }
}

/// A validated engine ready to run.
enum Engine<'a> {
    Tabu(TabuSearch<'a>),
    Sa(SimulatedAnnealing<'a>),
    Pso(ParticleSwarm<'a>),
    Vnd(VariableNeighborhoodDescent<'a>),
}

impl<'a> Engine<'a> {
    fn run(&self) -> EngineReport {
        let start = Instant::now();
        let (engine, tour, cost) = match self {
            Engine::Tabu(e) => {
                let r = e.run();
                (EngineKind::Tabu, r.tour, r.cost)
            }
            Engine::Sa(e) => {
                let r = e.run();
                (EngineKind::SimulatedAnnealing, r.tour, r.cost)
            }
            Engine::Pso(e) => {
                let r = e.run();
                (EngineKind::ParticleSwarm, r.tour, r.cost)
            }
            Engine::Vnd(e) => {
                let r = e.run();
                (EngineKind::Vnd, r.tour, r.cost)
            }
        };
        EngineReport {
            engine,
            tour,
            cost,
            elapsed: start.elapsed(),
        }
    }
}
