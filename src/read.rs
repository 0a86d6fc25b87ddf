//! Loading RLE patterns, behind the `read-rle` feature.

use crate::{engine::Engine, error::Error};
use ca_formats::{rle::Rle, Input};
use ca_rules::{ParseLife, ParseRuleError};
use log::debug;
use std::str::FromStr;

// Only used to tell whether a rulestring means B3/S23.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct LifeRule {
    birth: Vec<u8>,
    survival: Vec<u8>,
}

impl LifeRule {
    pub(crate) fn is_conway(&self) -> bool {
        self.birth == [3] && self.survival == [2, 3]
    }
}

impl ParseLife for LifeRule {
    fn from_bs(mut b: Vec<u8>, mut s: Vec<u8>) -> Self {
        b.sort_unstable();
        b.dedup();
        s.sort_unstable();
        s.dedup();
        LifeRule {
            birth: b,
            survival: s,
        }
    }
}

impl FromStr for LifeRule {
    type Err = ParseRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LifeRule::parse_rule(s)
    }
}

impl<R> Engine<R> {
    /// Replaces the current generation with an RLE pattern.
    ///
    /// The cell at `(x, y)` of the pattern goes to row `y`, column `x`,
    /// wrapped around the torus. The generation counter is reset.
    ///
    /// If the header names a rule, it must be B3/S23. On error, the
    /// current generation is left untouched.
    pub fn load_rle<I: Input>(&mut self, rle: Rle<I>) -> Result<&mut Self, Error> {
        if let Some(rulestring) = rle.header_data().and_then(|header| header.rule.as_deref()) {
            let rule: LifeRule = rulestring.parse()?;
            if !rule.is_conway() {
                return Err(Error::UnsupportedRule(rulestring.to_string()));
            }
        }
        let mut cells = Vec::new();
        for cell in rle {
            cells.push(cell?.position);
        }
        self.current.clear();
        for (x, y) in cells {
            self.current.set_cell(y, x, true);
        }
        self.generation = 0;
        debug!("Loaded a pattern with {} living cells", self.population());
        Ok(self)
    }

    pub fn load_rle_str(&mut self, pattern: &str) -> Result<&mut Self, Error> {
        self.load_rle(Rle::new(pattern)?)
    }
}

#[cfg(test)]
mod tests {
    use super::LifeRule;
    use crate::{config::Config, error::Error, generation::Encoding};

    const GLIDER: &str = "x = 3, y = 3, rule = B3/S23\nbo$2bo$3o!";

    #[test]
    fn test_load_rle() {
        for &encoding in &[Encoding::Dense, Encoding::BitPacked, Encoding::Sparse] {
            let mut engine = Config::new(8, 8).set_encoding(encoding).engine().unwrap();
            engine.set_cell(5, 5, true);
            engine.load_rle_str(GLIDER).unwrap();
            let mut cells = engine.live_cells();
            cells.sort_unstable();
            assert_eq!(cells, vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
            assert_eq!(engine.generation(), 0);
        }
    }

    #[test]
    fn test_glider_wraps() {
        let mut engine = Config::new(8, 8).engine().unwrap();
        engine.load_rle_str(GLIDER).unwrap();
        // A glider moves one cell diagonally every 4 generations.
        for _ in 0..32 {
            engine.tick();
        }
        let mut cells = engine.live_cells();
        cells.sort_unstable();
        assert_eq!(cells, vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
    }

    #[test]
    fn parse_rule() {
        assert!("B3/S23".parse::<LifeRule>().unwrap().is_conway());
        assert!(!"B36/S23".parse::<LifeRule>().unwrap().is_conway());
        assert!(!"B3/S238".parse::<LifeRule>().unwrap().is_conway());
        assert!("B3/S23-a4".parse::<LifeRule>().is_err());
    }

    #[test]
    fn test_unsupported_rule() {
        let mut engine = Config::new(8, 8).engine().unwrap();
        engine.set_cell(5, 5, true);
        let result = engine.load_rle_str("x = 3, y = 3, rule = B36/S23\nbo$2bo$3o!");
        assert!(matches!(result, Err(Error::UnsupportedRule(_))));
        assert_eq!(engine.live_cells(), vec![(5, 5)]);
    }
}
