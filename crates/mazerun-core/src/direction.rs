//! Movement and carving directions on the maze grid.

use std::fmt;

/// Cardinal direction on the grid.
///
/// Screen convention: `y` (and row index) grows downward, so `Up` means
/// row - 1 and `Down` means row + 1. The discriminant is the position of
/// the direction in a controller decision vector: `[up, down, left, right]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// Toward row - 1 (negative y).
    Up = 0,
    /// Toward row + 1 (positive y).
    Down = 1,
    /// Toward col - 1 (negative x).
    Left = 2,
    /// Toward col + 1 (positive x).
    Right = 3,
}

impl Direction {
    /// All directions in decision-vector order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Look up a direction by its decision-vector index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this direction in a decision vector.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the `(row_offset, col_offset)` for one grid step.
    pub fn grid_offset(self) -> (i64, i64) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Returns the unit `(dx, dy)` in pixel space.
    pub fn unit(self) -> (f64, f64) {
        let (dr, dc) = self.grid_offset();
        (dc as f64, dr as f64)
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_through_from_index() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_index(d.index()), Some(d));
        }
        assert_eq!(Direction::from_index(4), None);
    }

    #[test]
    fn decision_order_is_up_down_left_right() {
        assert_eq!(Direction::Up.index(), 0);
        assert_eq!(Direction::Down.index(), 1);
        assert_eq!(Direction::Left.index(), 2);
        assert_eq!(Direction::Right.index(), 3);
    }

    #[test]
    fn unit_vectors_follow_screen_coordinates() {
        assert_eq!(Direction::Up.unit(), (0.0, -1.0));
        assert_eq!(Direction::Down.unit(), (0.0, 1.0));
        assert_eq!(Direction::Left.unit(), (-1.0, 0.0));
        assert_eq!(Direction::Right.unit(), (1.0, 0.0));
    }

    #[test]
    fn opposite_is_involution() {
        for d in Direction::ALL {
            assert_ne!(d.opposite(), d);
            assert_eq!(d.opposite().opposite(), d);
            let (dr, dc) = d.grid_offset();
            assert_eq!(d.opposite().grid_offset(), (-dr, -dc));
        }
    }
}
