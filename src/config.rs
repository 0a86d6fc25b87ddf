use crate::{engine::Engine, error::Error, generation::Encoding};
use rand::{rngs::StdRng, SeedableRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_HEIGHT: usize = 64;
pub const DEFAULT_WIDTH: usize = 64;
pub const DEFAULT_DENSITY: f64 = 0.5;

/// Everything needed to build an [`Engine`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Config {
    pub height: usize,
    pub width: usize,
    pub encoding: Encoding,
    // Probability that a cell is alive after `Engine::init`.
    pub density: f64,
    // `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            encoding: Encoding::default(),
            density: DEFAULT_DENSITY,
            seed: None,
        }
    }
}

impl Config {
    pub fn new(height: usize, width: usize) -> Self {
        Config {
            height,
            width,
            ..Config::default()
        }
    }

    pub fn set_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn set_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn set_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Creates a new engine from the configuration.
    pub fn engine(&self) -> Result<Engine<StdRng>, Error> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Engine::with_rng(self, rng)
    }
}
