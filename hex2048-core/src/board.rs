//! Hex board geometry with axial coordinates

use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Board radius (distance from center to edge)
pub const BOARD_RADIUS: i8 = 2;

/// Axial hex coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hex {
    pub q: i8,
    pub r: i8,
}

impl Hex {
    pub const fn new(q: i8, r: i8) -> Self {
        Self { q, r }
    }

    /// Check if this hex is on the board
    pub fn is_valid(&self) -> bool {
        self.q.abs() <= BOARD_RADIUS
            && self.r.abs() <= BOARD_RADIUS
            && (self.q + self.r).abs() <= BOARD_RADIUS
    }

    /// Distance from center (0,0)
    pub fn distance_to_center(&self) -> i8 {
        (self.q.abs() + self.r.abs() + (self.q + self.r).abs()) / 2
    }

    /// Get adjacent hex in the given direction
    pub fn neighbor(&self, direction: Direction) -> Hex {
        let d = direction.vector();
        Hex::new(self.q + d.q, self.r + d.r)
    }

    /// Planar position of the cell center for display.
    /// This is the accepted axial-to-planar mapping; lane ordering
    /// corresponds to it visually.
    pub fn to_pixel(&self, size: f32) -> (f32, f32) {
        let x = size * 1.5 * self.q as f32;
        let y = size * (0.8660254 * self.q as f32 + 1.7320508 * self.r as f32);
        (x, y)
    }
}

/// Direction vectors in axial coordinates (dq, dr)
/// Index: 0=N, 1=NE, 2=SE, 3=S, 4=SW, 5=NW
const DIRECTIONS: [Hex; 6] = [
    Hex::new(0, -1),  // N
    Hex::new(1, -1),  // NE
    Hex::new(1, 0),   // SE
    Hex::new(0, 1),   // S
    Hex::new(-1, 1),  // SW
    Hex::new(-1, 0),  // NW
];

/// The six admissible move directions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    N = 0,
    Ne = 1,
    Se = 2,
    S = 3,
    Sw = 4,
    Nw = 5,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::N,
        Direction::Ne,
        Direction::Se,
        Direction::S,
        Direction::Sw,
        Direction::Nw,
    ];

    /// Unit movement vector
    pub fn vector(self) -> Hex {
        DIRECTIONS[self as usize]
    }

    /// Direction pointing the opposite way; vector(d) == -vector(opposite(d))
    pub fn opposite(self) -> Direction {
        Direction::ALL[(self as usize + 3) % 6]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::N => "n",
            Direction::Ne => "ne",
            Direction::Se => "se",
            Direction::S => "s",
            Direction::Sw => "sw",
            Direction::Nw => "nw",
        }
    }
}

/// Unrecognized direction token
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction token: {0:?}")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "n" => Ok(Direction::N),
            "ne" => Ok(Direction::Ne),
            "se" => Ok(Direction::Se),
            "s" => Ok(Direction::S),
            "sw" => Ok(Direction::Sw),
            "nw" => Ok(Direction::Nw),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

/// Enumerate all cells of a hexagon with the given radius, in canonical
/// (q ascending, r ascending) order
pub fn all_cells(radius: i8) -> Vec<Hex> {
    let mut cells = Vec::new();
    for q in -radius..=radius {
        let r1 = (-radius).max(-q - radius);
        let r2 = radius.min(-q + radius);
        for r in r1..=r2 {
            cells.push(Hex::new(q, r));
        }
    }
    cells
}

/// The fixed cell set of the playing board, computed once per process
pub fn board_cells() -> &'static [Hex] {
    static CELLS: OnceLock<Vec<Hex>> = OnceLock::new();
    CELLS.get_or_init(|| all_cells(BOARD_RADIUS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_count() {
        // 3R^2 + 3R + 1
        assert_eq!(all_cells(1).len(), 7);
        assert_eq!(all_cells(2).len(), 19);
        assert_eq!(all_cells(3).len(), 37);
        assert_eq!(board_cells().len(), 19);
    }

    #[test]
    fn test_enumeration_matches_validity() {
        for &cell in board_cells() {
            assert!(cell.is_valid());
            assert!(cell.distance_to_center() <= BOARD_RADIUS);
        }
        assert!(!Hex::new(3, 0).is_valid());
        assert!(!Hex::new(2, 1).is_valid()); // q + r = 3 > 2
    }

    #[test]
    fn test_opposite_vectors_negate() {
        for d in Direction::ALL {
            let v = d.vector();
            let o = d.opposite().vector();
            assert_eq!(v.q, -o.q, "{:?}", d);
            assert_eq!(v.r, -o.r, "{:?}", d);
        }
    }

    #[test]
    fn test_neighbor() {
        assert_eq!(Hex::new(0, 0).neighbor(Direction::N), Hex::new(0, -1));
        assert_eq!(Hex::new(1, -1).neighbor(Direction::Sw), Hex::new(0, 0));
    }

    #[test]
    fn test_to_pixel() {
        let (x, y) = Hex::new(0, 0).to_pixel(10.0);
        assert_eq!((x, y), (0.0, 0.0));

        let (x, y) = Hex::new(1, 0).to_pixel(10.0);
        assert!((x - 15.0).abs() < 1e-4);
        assert!((y - 8.660254).abs() < 1e-4);

        let (x, y) = Hex::new(0, 1).to_pixel(10.0);
        assert!((x - 0.0).abs() < 1e-4);
        assert!((y - 17.320508).abs() < 1e-4);
    }

    #[test]
    fn test_direction_tokens() {
        for d in Direction::ALL {
            assert_eq!(d.as_str().parse::<Direction>(), Ok(d));
        }
        assert!("up".parse::<Direction>().is_err());
        assert!("N".parse::<Direction>().is_err());
    }
}
