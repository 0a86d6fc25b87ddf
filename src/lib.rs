//! Conway's Game of Life on a fixed-size torus, with three interchangeable
//! ways to store a generation.

#![allow(clippy::bool_assert_comparison)]

mod bits;
mod config;
mod coord;
mod dense;
mod engine;
mod error;
mod evolve;
mod generation;
mod grid;
mod iter;
#[cfg(feature = "read-rle")]
mod read;
mod rule;
mod sparse;

pub use bits::{BitGrid, MAX_CELLS};
#[cfg(feature = "read-rle")]
pub use ca_formats;
pub use config::{Config, DEFAULT_DENSITY, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use coord::{pack, unpack, Coord};
pub use dense::DenseGrid;
pub use engine::{Engine, Hook};
pub use error::Error;
pub use generation::Encoding;
pub use grid::Grid;
pub use sparse::SparseGrid;
