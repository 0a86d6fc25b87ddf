use crate::{
    coord::{index, unpack, Coord},
    error::Error,
    grid::{cell_count, fmt_grid, Grid},
};
use rustc_hash::FxHashSet;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// The set of living cells, stored as packed coordinates.
///
/// Dead cells are never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SparseGrid {
    height: usize,
    width: usize,
    pub(crate) cells: FxHashSet<usize>,
}

impl SparseGrid {
    pub fn new(height: usize, width: usize) -> Result<Self, Error> {
        cell_count(height, width, usize::MAX)?;
        Ok(SparseGrid {
            height,
            width,
            cells: FxHashSet::default(),
        })
    }

    /// Packed coordinates of the living cells.
    pub fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter().copied()
    }
}

impl Grid for SparseGrid {
    fn height(&self) -> usize {
        self.height
    }

    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn get(&self, coord: Coord) -> bool {
        self.cells.contains(&index(coord, self.height, self.width))
    }

    #[inline]
    fn set(&mut self, coord: Coord, state: bool) {
        let key = index(coord, self.height, self.width);
        if state {
            self.cells.insert(key);
        } else {
            self.cells.remove(&key);
        }
    }

    fn clear(&mut self) {
        self.cells.clear();
    }

    fn population(&self) -> usize {
        self.cells.len()
    }

    fn for_living_cells<F>(&self, mut f: F)
    where
        F: FnMut(Coord),
    {
        self.cells.iter().for_each(|&key| f(unpack(key, self.width)))
    }
}

impl Display for SparseGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        fmt_grid(self, f)
    }
}
