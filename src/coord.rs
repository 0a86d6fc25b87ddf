/// The coordinates of a cell, `(row, col)`, both 0-indexed.
pub type Coord = (usize, usize);

/// Packs a cell into a single integer, `row * width + col`.
#[inline]
pub fn pack((row, col): Coord, width: usize) -> usize {
    row * width + col
}

#[inline]
pub fn unpack(key: usize, width: usize) -> Coord {
    (key / width, key % width)
}

// Flat index of a cell, wrapping both coordinates first.
#[inline]
pub(crate) fn index((row, col): Coord, height: usize, width: usize) -> usize {
    pack((row % height, col % width), width)
}

/// Wraps arbitrary coordinates onto a `height` x `width` torus.
pub(crate) fn wrap(row: i64, col: i64, height: usize, width: usize) -> Coord {
    (
        row.rem_euclid(height as i64) as usize,
        col.rem_euclid(width as i64) as usize,
    )
}

/// The 8 neighbors of an in-range cell, in the order
/// nw, n, ne, w, e, sw, s, se.
pub(crate) fn neighbors((row, col): Coord, height: usize, width: usize) -> [Coord; 8] {
    let up = if row == 0 { height - 1 } else { row - 1 };
    let down = if row == height - 1 { 0 } else { row + 1 };
    let left = if col == 0 { width - 1 } else { col - 1 };
    let right = if col == width - 1 { 0 } else { col + 1 };
    [
        (up, left),
        (up, col),
        (up, right),
        (row, left),
        (row, right),
        (down, left),
        (down, col),
        (down, right),
    ]
}
