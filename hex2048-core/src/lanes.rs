//! Lane decomposition of the board for a movement direction
//!
//! A lane is the maximal straight line of cells parallel to a direction's
//! axis. Opposite directions share lanes; only the travel order flips.

use rustc_hash::FxHashMap;

use crate::board::{board_cells, Direction, Hex};

/// Lane membership key. Constant along the direction's axis:
/// q for n/s, r for ne/sw, the third cube coordinate -q-r for nw/se.
pub fn lane_key(cell: Hex, direction: Direction) -> i8 {
    match direction {
        Direction::N | Direction::S => cell.q,
        Direction::Ne | Direction::Sw => cell.r,
        Direction::Nw | Direction::Se => -cell.q - cell.r,
    }
}

/// Signed distance along the direction of travel. Strictly increasing
/// from back to front within a lane.
pub fn travel_distance(cell: Hex, direction: Direction) -> i8 {
    let d = direction.vector();
    cell.q * d.q + cell.r * d.r
}

/// Partition the board into lanes for the given direction. Each lane's
/// cells are ordered front-to-back: the cell nearest the wall the tiles
/// slide toward comes first. Lanes are ordered by key.
pub fn lanes(direction: Direction) -> Vec<Vec<Hex>> {
    let mut by_key: FxHashMap<i8, Vec<Hex>> = FxHashMap::default();
    for &cell in board_cells() {
        by_key.entry(lane_key(cell, direction)).or_default().push(cell);
    }

    let mut keys: Vec<i8> = by_key.keys().copied().collect();
    keys.sort_unstable();

    keys.into_iter()
        .filter_map(|key| by_key.remove(&key))
        .map(|mut cells| {
            cells.sort_unstable_by_key(|&c| std::cmp::Reverse(travel_distance(c, direction)));
            cells
        })
        .collect()
}
