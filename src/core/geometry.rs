//! Board geometry: which coordinates form the playable cross.
//!
//! A coordinate is playable when its row or its column lies in the middle
//! band of three lines, `[(n-1)/2 - 1, (n-1)/2 + 1]`. For the standard
//! 7×7 board that band is `[2, 4]`, which yields the 33-hole English cross.
//!
//! All functions are pure. Coordinates outside the grid are simply not
//! playable.

use std::ops::RangeInclusive;

use super::coord::Coord;

/// The middle band of row/column indices for a board of size `n`.
///
/// Returns `None` for boards too small to carry a band (`n < 3`).
#[must_use]
pub fn band(n: usize) -> Option<RangeInclusive<usize>> {
    if n < 3 {
        return None;
    }
    let mid = (n - 1) / 2;
    Some(mid - 1..=mid + 1)
}

fn in_grid(n: usize, row: i32, col: i32) -> Option<(usize, usize)> {
    let r = usize::try_from(row).ok()?;
    let c = usize::try_from(col).ok()?;
    (r < n && c < n).then_some((r, c))
}

/// True iff `(row, col)` is inside the cross for a board of size `n`.
#[must_use]
pub fn is_playable(n: usize, row: i32, col: i32) -> bool {
    let (Some(band), Some((r, c))) = (band(n), in_grid(n, row, col)) else {
        return false;
    };
    band.contains(&r) || band.contains(&c)
}

/// True only at the exact center, the one hole left empty at the start.
#[must_use]
pub fn is_center(n: usize, row: i32, col: i32) -> bool {
    if n % 2 == 0 {
        return false;
    }
    let mid = (n / 2) as i32;
    row == mid && col == mid && in_grid(n, row, col).is_some()
}

/// Iterate over every playable coordinate in row-major order.
pub fn playable_coords(n: usize) -> impl Iterator<Item = Coord> {
    let n_i = n as i32;
    (0..n_i)
        .flat_map(move |row| (0..n_i).map(move |col| Coord::new(row, col)))
        .filter(move |c| is_playable(n, c.row, c.col))
}

/// Number of playable holes: two crossing bands of width 3 minus their overlap.
#[must_use]
pub fn playable_count(n: usize) -> usize {
    if n < 3 {
        0
    } else {
        6 * n - 9
    }
}
