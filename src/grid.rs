use crate::{
    coord::{wrap, Coord},
    error::Error,
};
use rand::Rng;
use std::fmt::{Formatter, Result as FmtResult, Write};

/// A `height` x `width` toroidal grid of live / dead cells.
///
/// Every coordinate is taken modulo the size of the grid before use.
pub trait Grid {
    fn height(&self) -> usize;

    fn width(&self) -> usize;

    fn get(&self, coord: Coord) -> bool;

    fn set(&mut self, coord: Coord, state: bool);

    fn clear(&mut self);

    fn population(&self) -> usize;

    // The order is unspecified, but stable while the grid is unchanged.
    fn for_living_cells<F>(&self, f: F)
    where
        F: FnMut(Coord);

    fn live_cells(&self) -> Vec<Coord> {
        let mut cells = Vec::with_capacity(self.population());
        self.for_living_cells(|coord| cells.push(coord));
        cells
    }

    fn get_cell(&self, row: i64, col: i64) -> bool {
        self.get(wrap(row, col, self.height(), self.width()))
    }

    fn set_cell(&mut self, row: i64, col: i64, state: bool) {
        let coord = wrap(row, col, self.height(), self.width());
        self.set(coord, state)
    }

    /// Clears the grid, then makes each cell alive with probability `density`.
    fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        self.clear();
        for row in 0..self.height() {
            for col in 0..self.width() {
                if rng.gen_bool(density) {
                    self.set((row, col), true);
                }
            }
        }
    }
}

// Each side must also fit in an `i64`, the type of wrapped coordinates.
pub(crate) fn cell_count(height: usize, width: usize, max: usize) -> Result<usize, Error> {
    if height == 0 || width == 0 {
        return Err(Error::EmptyGrid);
    }
    let side = i64::MAX as usize;
    height
        .checked_mul(width)
        .filter(|&cells| cells <= max && height <= side && width <= side)
        .ok_or(Error::CapacityExceeded {
            cells: height.saturating_mul(width),
            max,
        })
}

pub(crate) fn fmt_grid<G: Grid>(grid: &G, f: &mut Formatter<'_>) -> FmtResult {
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            f.write_char(if grid.get((row, col)) { '1' } else { '0' })?;
        }
        f.write_char('\n')?;
    }
    Ok(())
}
