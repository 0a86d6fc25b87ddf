use crate::{
    coord::{index, unpack, Coord},
    error::Error,
    grid::{cell_count, fmt_grid, Grid},
};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// The largest number of cells a [`BitGrid`] may hold: one per pixel of a 320x240 display.
pub const MAX_CELLS: usize = 320 * 240;

/// One bit per cell, row-major.
///
/// Cell `idx = width * row + col` lives in bit `idx % 8` of byte `idx / 8`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitGrid {
    height: usize,
    width: usize,
    bits: Box<[u8]>,
}

impl BitGrid {
    // Nothing is allocated if the grid is too large.
    pub fn new(height: usize, width: usize) -> Result<Self, Error> {
        let len = cell_count(height, width, MAX_CELLS)?;
        Ok(BitGrid {
            height,
            width,
            bits: vec![0; (len + 7) / 8].into_boxed_slice(),
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }
}

impl Grid for BitGrid {
    fn height(&self) -> usize {
        self.height
    }

    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn get(&self, coord: Coord) -> bool {
        let idx = index(coord, self.height, self.width);
        (self.bits[idx / 8] >> (idx % 8)) & 1 != 0
    }

    #[inline]
    fn set(&mut self, coord: Coord, state: bool) {
        let idx = index(coord, self.height, self.width);
        let offset = idx % 8;
        let byte = &mut self.bits[idx / 8];
        *byte = (*byte & !(1 << offset)) | (state as u8) << offset;
    }

    fn clear(&mut self) {
        self.bits.iter_mut().for_each(|byte| *byte = 0);
    }

    fn population(&self) -> usize {
        self.bits.iter().map(|byte| byte.count_ones() as usize).sum()
    }

    fn for_living_cells<F>(&self, mut f: F)
    where
        F: FnMut(Coord),
    {
        for (i, &byte) in self.bits.iter().enumerate() {
            let mut byte = byte;
            while byte != 0 {
                let offset = byte.trailing_zeros() as usize;
                f(unpack(8 * i + offset, self.width));
                byte &= byte - 1;
            }
        }
    }
}

impl Display for BitGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        fmt_grid(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity() {
        assert!(BitGrid::new(240, 320).is_ok());
        assert!(BitGrid::new(320, 240).is_ok());
        assert!(matches!(
            BitGrid::new(241, 320),
            Err(Error::CapacityExceeded {
                cells: 77120,
                max: MAX_CELLS
            })
        ));
        assert!(matches!(BitGrid::new(64, 0), Err(Error::EmptyGrid)));
    }

    #[test]
    fn test_bit_layout() {
        let mut grid = BitGrid::new(3, 5).unwrap();
        assert_eq!(grid.as_bytes().len(), 2);
        grid.set((0, 3), true);
        grid.set((1, 4), true);
        grid.set((2, 0), true);
        assert_eq!(grid.as_bytes(), &[0b0000_1000, 0b0000_0110]);
        grid.set((1, 4), false);
        assert_eq!(grid.as_bytes(), &[0b0000_1000, 0b0000_0100]);
        assert_eq!(grid.get((0, 3)), true);
        assert_eq!(grid.get((1, 4)), false);
    }

    #[test]
    fn test_set_preserves_neighbors() {
        let mut grid = BitGrid::new(1, 8).unwrap();
        for col in 0..8 {
            grid.set((0, col), true);
        }
        grid.set((0, 5), false);
        assert_eq!(grid.as_bytes(), &[0b1101_1111]);
        grid.set((0, 5), true);
        assert_eq!(grid.as_bytes(), &[0b1111_1111]);
        assert_eq!(grid.population(), 8);
    }

    #[test]
    fn test_live_cells() {
        let mut grid = BitGrid::new(4, 3).unwrap();
        grid.set_cell(-1, -1, true);
        grid.set_cell(1, 4, true);
        assert_eq!(grid.live_cells(), vec![(1, 1), (3, 2)]);
    }
}
