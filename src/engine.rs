use crate::{
    config::Config,
    error::Error,
    generation::{Encoding, Generation},
};
use log::debug;
use rand::{rngs::StdRng, Rng};
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

/// An observer called after the engine changes.
pub type Hook<R> = Box<dyn FnMut(&Engine<R>)>;

/// Conway's Game of Life on a torus.
///
/// The engine keeps two generations of the same size and encoding: the
/// current one, and a scratch buffer that [`tick`](Engine::tick) writes
/// into before the two are swapped.
pub struct Engine<R = StdRng> {
    height: usize,
    width: usize,
    density: f64,
    pub(crate) generation: u64,
    pub(crate) current: Generation,
    pub(crate) scratch: Generation,
    rng: R,
    pub(crate) on_init: Option<Hook<R>>,
    pub(crate) on_tick: Option<Hook<R>>,
}

impl Engine<StdRng> {
    pub fn new(height: usize, width: usize, encoding: Encoding) -> Result<Self, Error> {
        Config::new(height, width).set_encoding(encoding).engine()
    }
}

impl<R: Rng> Engine<R> {
    /// Creates an empty engine drawing its random states from `rng`.
    pub fn with_rng(config: &Config, rng: R) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&config.density) {
            return Err(Error::InvalidDensity(config.density));
        }
        let current = Generation::new(config.encoding, config.height, config.width)?;
        let scratch = Generation::new(config.encoding, config.height, config.width)?;
        debug!(
            "Created a {}x{} engine ({:?})",
            config.height, config.width, config.encoding
        );
        Ok(Engine {
            height: config.height,
            width: config.width,
            density: config.density,
            generation: 0,
            current,
            scratch,
            rng,
            on_init: None,
            on_tick: None,
        })
    }

    /// Fills the grid with random cells, then calls the `on_init` hook.
    pub fn init(&mut self) {
        self.current.randomize(&mut self.rng, self.density);
        self.generation = 0;
        debug!("Initialized with {} living cells", self.population());
        if let Some(mut hook) = self.on_init.take() {
            hook(self);
            self.on_init = Some(hook);
        }
    }
}

impl<R> Engine<R> {
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn encoding(&self) -> Encoding {
        self.current.encoding()
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    /// Number of ticks since the last [`init`](Engine::init) or [`clear`](Engine::clear).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.current.population()
    }

    /// Coordinates wrap around, so any pair of integers is valid.
    pub fn get_cell(&self, row: i64, col: i64) -> bool {
        self.current.get_cell(row, col)
    }

    pub fn set_cell(&mut self, row: i64, col: i64, state: bool) -> &mut Self {
        self.current.set_cell(row, col, state);
        self
    }

    /// Kills every cell and resets the generation counter.
    pub fn clear(&mut self) -> &mut Self {
        self.current.clear();
        self.generation = 0;
        self
    }

    pub fn set_on_init<F>(&mut self, hook: F) -> &mut Self
    where
        F: FnMut(&Engine<R>) + 'static,
    {
        self.on_init = Some(Box::new(hook));
        self
    }

    pub fn set_on_tick<F>(&mut self, hook: F) -> &mut Self
    where
        F: FnMut(&Engine<R>) + 'static,
    {
        self.on_tick = Some(Box::new(hook));
        self
    }

    pub fn clear_on_init(&mut self) -> &mut Self {
        self.on_init = None;
        self
    }

    pub fn clear_on_tick(&mut self) -> &mut Self {
        self.on_tick = None;
        self
    }
}

impl<R> Display for Engine<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.current, f)
    }
}

impl<R> Debug for Engine<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Engine")
            .field("height", &self.height)
            .field("width", &self.width)
            .field("encoding", &self.encoding())
            .field("generation", &self.generation)
            .field("population", &self.population())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DENSITY;
    use rand::SeedableRng;
    use std::{cell::Cell, rc::Rc};

    fn engine(encoding: Encoding) -> Engine {
        Engine::with_rng(
            &Config::new(8, 10).set_encoding(encoding),
            StdRng::seed_from_u64(7),
        )
        .unwrap()
    }

    #[test]
    fn test_get_set_cell() {
        for &encoding in &[Encoding::Dense, Encoding::BitPacked, Encoding::Sparse] {
            let mut engine = engine(encoding);
            engine.set_cell(-1, -1, true).set_cell(8, 13, true);
            assert_eq!(engine.get_cell(7, 9), true);
            assert_eq!(engine.get_cell(0, 3), true);
            assert_eq!(engine.get_cell(16, 23), true);
            assert_eq!(engine.population(), 2);
            engine.set_cell(-8, -7, false);
            assert_eq!(engine.get_cell(0, 3), false);
            assert_eq!(engine.population(), 1);
            engine.clear();
            assert_eq!(engine.population(), 0);
        }
    }

    #[test]
    fn test_init_hook() {
        let mut engine = engine(Encoding::Dense);
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        engine.set_on_init(move |engine| {
            assert_eq!(engine.generation(), 0);
            seen.set(seen.get() + 1);
        });
        engine.init();
        assert_eq!(calls.get(), 1);
        engine.init();
        assert_eq!(calls.get(), 2);
        engine.tick();
        assert_eq!(calls.get(), 2);
        engine.clear_on_init().init();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_no_hooks() {
        let mut engine = engine(Encoding::Sparse);
        engine.init();
        engine.tick();
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn test_display() {
        let mut engine = Engine::with_rng(&Config::new(2, 3), StdRng::seed_from_u64(0)).unwrap();
        engine.set_cell(0, 0, true).set_cell(1, 1, true);
        assert_eq!(engine.to_string(), "100\n010\n");
        assert_eq!(DEFAULT_DENSITY, engine.density());
    }
}
