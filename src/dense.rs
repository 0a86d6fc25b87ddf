use crate::{
    coord::{index, unpack, Coord},
    error::Error,
    grid::{cell_count, fmt_grid, Grid},
};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// One byte per cell, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseGrid {
    height: usize,
    width: usize,
    cells: Vec<u8>,
}

impl DenseGrid {
    pub fn new(height: usize, width: usize) -> Result<Self, Error> {
        let max = isize::MAX as usize;
        let len = cell_count(height, width, max)?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| Error::CapacityExceeded { cells: len, max })?;
        cells.resize(len, 0);
        Ok(DenseGrid {
            height,
            width,
            cells,
        })
    }
}

impl Grid for DenseGrid {
    fn height(&self) -> usize {
        self.height
    }

    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn get(&self, coord: Coord) -> bool {
        self.cells[index(coord, self.height, self.width)] != 0
    }

    #[inline]
    fn set(&mut self, coord: Coord, state: bool) {
        self.cells[index(coord, self.height, self.width)] = state as u8;
    }

    fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = 0);
    }

    fn population(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != 0).count()
    }

    fn for_living_cells<F>(&self, mut f: F)
    where
        F: FnMut(Coord),
    {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell != 0)
            .for_each(|(i, _)| f(unpack(i, self.width)))
    }
}

impl Display for DenseGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        fmt_grid(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut grid = DenseGrid::new(4, 6).unwrap();
        assert_eq!(grid.cells.len(), 24);
        grid.set((1, 2), true);
        assert_eq!(grid.get((1, 2)), true);
        assert_eq!(grid.cells[8], 1);
        grid.set_cell(-1, 6, true);
        assert_eq!(grid.get((3, 0)), true);
        assert_eq!(grid.get_cell(7, -6), true);
        assert_eq!(grid.population(), 2);
        grid.set((1, 2), false);
        assert_eq!(grid.live_cells(), vec![(3, 0)]);
    }

    #[test]
    fn test_display() {
        let mut grid = DenseGrid::new(2, 3).unwrap();
        grid.set((0, 1), true);
        grid.set((1, 2), true);
        assert_eq!(grid.to_string(), "010\n001\n");
    }
}
