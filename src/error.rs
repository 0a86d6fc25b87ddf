use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// The grid has {cells} cells, but at most {max} are supported.
    CapacityExceeded { cells: usize, max: usize },
    /// Height and width should be positive.
    EmptyGrid,
    /// Density {0} is not a probability.
    InvalidDensity(f64),
    /// Invalid RLE pattern: {0}.
    #[cfg(feature = "read-rle")]
    Rle(#[from] ca_formats::rle::Error),
    /// Invalid rule: {0:?}.
    #[cfg(feature = "read-rle")]
    ParseRule(#[from] ca_rules::ParseRuleError),
    /// Only B3/S23 is supported, but the pattern uses {0}.
    #[cfg(feature = "read-rle")]
    UnsupportedRule(String),
}
