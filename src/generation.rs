use crate::{
    bits::BitGrid,
    coord::Coord,
    dense::DenseGrid,
    error::Error,
    grid::Grid,
    sparse::SparseGrid,
};
use rand::Rng;
use std::fmt::{Display, Formatter, Result as FmtResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a generation is stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Encoding {
    Dense,
    /// One bit per cell. See [`BitGrid`].
    BitPacked,
    // Only the living cells.
    Sparse,
}

impl Default for Encoding {
    fn default() -> Self {
        Encoding::BitPacked
    }
}

/// A full snapshot of the grid, in one of the three encodings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Generation {
    Dense(DenseGrid),
    BitPacked(BitGrid),
    Sparse(SparseGrid),
}

impl Generation {
    pub(crate) fn new(encoding: Encoding, height: usize, width: usize) -> Result<Self, Error> {
        Ok(match encoding {
            Encoding::Dense => Generation::Dense(DenseGrid::new(height, width)?),
            Encoding::BitPacked => Generation::BitPacked(BitGrid::new(height, width)?),
            Encoding::Sparse => Generation::Sparse(SparseGrid::new(height, width)?),
        })
    }

    pub(crate) fn encoding(&self) -> Encoding {
        match self {
            Generation::Dense(_) => Encoding::Dense,
            Generation::BitPacked(_) => Encoding::BitPacked,
            Generation::Sparse(_) => Encoding::Sparse,
        }
    }

    pub(crate) fn get_cell(&self, row: i64, col: i64) -> bool {
        match self {
            Generation::Dense(grid) => grid.get_cell(row, col),
            Generation::BitPacked(grid) => grid.get_cell(row, col),
            Generation::Sparse(grid) => grid.get_cell(row, col),
        }
    }

    pub(crate) fn set_cell(&mut self, row: i64, col: i64, state: bool) {
        match self {
            Generation::Dense(grid) => grid.set_cell(row, col, state),
            Generation::BitPacked(grid) => grid.set_cell(row, col, state),
            Generation::Sparse(grid) => grid.set_cell(row, col, state),
        }
    }

    pub(crate) fn clear(&mut self) {
        match self {
            Generation::Dense(grid) => grid.clear(),
            Generation::BitPacked(grid) => grid.clear(),
            Generation::Sparse(grid) => grid.clear(),
        }
    }

    pub(crate) fn population(&self) -> usize {
        match self {
            Generation::Dense(grid) => grid.population(),
            Generation::BitPacked(grid) => grid.population(),
            Generation::Sparse(grid) => grid.population(),
        }
    }

    pub(crate) fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        match self {
            Generation::Dense(grid) => grid.randomize(rng, density),
            Generation::BitPacked(grid) => grid.randomize(rng, density),
            Generation::Sparse(grid) => grid.randomize(rng, density),
        }
    }

    pub(crate) fn for_living_cells<F>(&self, f: F)
    where
        F: FnMut(Coord),
    {
        match self {
            Generation::Dense(grid) => grid.for_living_cells(f),
            Generation::BitPacked(grid) => grid.for_living_cells(f),
            Generation::Sparse(grid) => grid.for_living_cells(f),
        }
    }
}

impl Display for Generation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Generation::Dense(grid) => Display::fmt(grid, f),
            Generation::BitPacked(grid) => Display::fmt(grid, f),
            Generation::Sparse(grid) => Display::fmt(grid, f),
        }
    }
}
