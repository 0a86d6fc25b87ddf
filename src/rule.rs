/// The state of a cell in the next generation, under B3/S23.
#[inline]
pub(crate) const fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (_, 3) | (true, 2))
}
