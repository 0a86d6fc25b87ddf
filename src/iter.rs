use crate::{
    coord::{pack, Coord},
    engine::Engine,
};

impl<R> Engine<R> {
    /// Calls `f(row, col)` for each living cell of the current generation.
    ///
    /// Dense and bit-packed generations are scanned in row-major order;
    /// a sparse generation only visits its living cells, in no particular order.
    pub fn for_living_cells<F>(&self, f: F)
    where
        F: FnMut(usize, usize),
    {
        let mut f = f;
        self.current.for_living_cells(|(row, col)| f(row, col))
    }

    pub fn live_cells(&self) -> Vec<Coord> {
        let mut cells = Vec::with_capacity(self.population());
        self.for_living_cells(|row, col| cells.push((row, col)));
        cells
    }

    /// Snapshot of the living cells, as `row * width + col`.
    pub fn live_cells_packed(&self) -> Vec<usize> {
        let width = self.width();
        let mut cells = Vec::with_capacity(self.population());
        self.for_living_cells(|row, col| cells.push(pack((row, col), width)));
        cells
    }
}
