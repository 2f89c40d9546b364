use serde::{Deserialize, Serialize};
use argh::FromArgs;
use crate::graph::Mode;
use crate::utils::error::{Error, Result};
use crate::{ALPHA, ANTS, BETHA, ELITE_DEP, ELITE_FRACTION, EVAP_RATE, INIT_PHEROMONE,
            MAX_ITER, N_ITER_NO_CHANGE, PHE_DEP, SEED};

/// General purpose ant colony optimization over travelling salesman instances
#[derive(FromArgs)]
pub struct Arguments {
    /// path to problem file
    #[argh(positional)]
    pub problem: String,
    /// path to configuration file
    #[argh(option, short='c', default="String::from(\"data/config/default.yaml\")")]
    pub config: String,
    /// override random seed of the colony
    #[argh(option, short='s')]
    pub seed: Option<u64>,
    /// override number of ants
    #[argh(option, short='a')]
    pub ants: Option<usize>,
    /// override maximum number of iterations
    #[argh(option, short='i')]
    pub iterations: Option<usize>,
    /// hide the per-iteration table
    #[argh(switch, short='q')]
    pub quiet: bool,
}

#[derive(Deserialize, Serialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub name: String,
    pub seed: u64,
    pub graph: GraphConfig,
    pub colony: Parameters,
    pub run: Schedule,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GraphConfig {
    pub mode: Mode,
    pub init_pheromone: f64,
}

/// Colony parameters, checked by `validate` before any iteration runs.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Parameters {
    /// number of ants
    pub ants: usize,
    /// start each ant on a random node instead of the first one
    pub random_start: bool,
    /// relative importance of pheromone
    pub alpha: f64,
    /// relative importance of the heuristic
    pub betha: f64,
    /// pheromone deposited along every ant's path
    pub phe_dep: f64,
    /// fraction of pheromone evaporated per iteration
    pub evap_rate: f64,
    /// fraction of ants counted as elite
    pub elite_fraction: f64,
    /// extra pheromone deposited along elite paths
    pub elite_dep: f64,
}

/// Stopping criteria of one `optimize` invocation.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Schedule {
    pub max_iter: usize,
    /// iterations without improvement before stopping
    pub n_iter_no_change: usize,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            name: String::from("default"),
            seed: SEED,
            graph: GraphConfig::default(),
            colony: Parameters::default(),
            run: Schedule::default(),
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig { mode: Mode::Complete, init_pheromone: INIT_PHEROMONE }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            ants: ANTS,
            random_start: true,
            alpha: ALPHA,
            betha: BETHA,
            phe_dep: PHE_DEP,
            evap_rate: EVAP_RATE,
            elite_fraction: ELITE_FRACTION,
            elite_dep: ELITE_DEP,
        }
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Schedule { max_iter: MAX_ITER, n_iter_no_change: N_ITER_NO_CHANGE, verbose: true }
    }
}

impl Config {
    pub fn override_from_args(&mut self, args: &Arguments) {
        if let Some(seed) = args.seed {
            self.seed = seed;
        }
        if let Some(ants) = args.ants {
            self.colony.ants = ants;
        }
        if let Some(iterations) = args.iterations {
            self.run.max_iter = iterations;
        }
        if args.quiet {
            self.run.verbose = false;
        }
    }
}

impl Parameters {
    pub fn validate(&self) -> Result<()> {
        if self.ants == 0 {
            return Err(Error::NoAnts);
        }
        check_unit("evap_rate", self.evap_rate)?;
        check_unit("elite_fraction", self.elite_fraction)?;
        check_non_negative("alpha", self.alpha)?;
        check_non_negative("betha", self.betha)?;
        Ok(())
    }
}

fn check_unit(name: &'static str, value: f64) -> Result<()> {
    match (0.0..=1.0).contains(&value) {
        true  => Ok(()),
        false => Err(Error::OutOfUnitRange(name, value)),
    }
}

fn check_non_negative(name: &'static str, value: f64) -> Result<()> {
    match value >= 0.0 {
        true  => Ok(()),
        false => Err(Error::NegativeWeight(name, value)),
    }
}
