use crate::{
    coord::{neighbors, pack, unpack, Coord},
    engine::Engine,
    generation::Generation,
    grid::Grid,
    rule::next_state,
    sparse::SparseGrid,
};
use log::trace;
use rustc_hash::FxHashSet;
use std::mem;

impl<R> Engine<R> {
    /// Advances one generation, then calls the `on_tick` hook.
    pub fn tick(&mut self) {
        match (&self.current, &mut self.scratch) {
            (Generation::Dense(current), Generation::Dense(next)) => step_full(current, next),
            (Generation::BitPacked(current), Generation::BitPacked(next)) => {
                step_full(current, next)
            }
            (Generation::Sparse(current), Generation::Sparse(next)) => step_sparse(current, next),
            _ => unreachable!("Both generations must have the same encoding."),
        }
        mem::swap(&mut self.current, &mut self.scratch);
        self.generation += 1;
        trace!(
            "Generation {}: {} living cells",
            self.generation,
            self.population()
        );
        if let Some(mut hook) = self.on_tick.take() {
            hook(self);
            self.on_tick = Some(hook);
        }
    }
}

fn count_neighbors<G: Grid>(grid: &G, coord: Coord) -> u8 {
    neighbors(coord, grid.height(), grid.width())
        .iter()
        .filter(|&&neighbor| grid.get(neighbor))
        .count() as u8
}

fn step_full<G: Grid>(current: &G, next: &mut G) {
    for row in 0..current.height() {
        for col in 0..current.width() {
            let coord = (row, col);
            let state = next_state(current.get(coord), count_neighbors(current, coord));
            next.set(coord, state);
        }
    }
}

/// Only visits the living cells and their neighbors, as no other cell can be
/// alive in the next generation.
fn step_sparse(current: &SparseGrid, next: &mut SparseGrid) {
    let (height, width) = (current.height(), current.width());
    let mut candidates = FxHashSet::default();
    candidates.reserve(9 * current.population());
    for key in current.keys() {
        candidates.insert(key);
        candidates.extend(
            neighbors(unpack(key, width), height, width)
                .iter()
                .map(|&neighbor| pack(neighbor, width)),
        );
    }
    next.clear();
    next.cells.extend(candidates.into_iter().filter(|&key| {
        let coord = unpack(key, width);
        next_state(current.get(coord), count_neighbors(current, coord))
    }));
}
