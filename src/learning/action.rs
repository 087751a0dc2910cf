use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// One of the four unit moves along the grid.
///
/// Declaration order is the canonical order used to break ties between
/// equally valued greedy moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Action {
    Right,
    Left,
    Up,
    Down,
}

impl Action {
    pub const fn all() -> [Self; 4] {
        [Self::Right, Self::Left, Self::Up, Self::Down]
    }
    /// Displacement of this move on a grid of resolution `step`.
    pub fn displacement(&self, step: Coordinate) -> Point {
        match self {
            Self::Right => Point::new(step, 0.0),
            Self::Left => Point::new(-step, 0.0),
            Self::Up => Point::new(0.0, step),
            Self::Down => Point::new(0.0, -step),
        }
    }
    /// Where this move takes `point`.
    pub fn apply(&self, point: Point, step: Coordinate) -> Point {
        point + self.displacement(step)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Right => write!(f, "→"),
            Self::Left => write!(f, "←"),
            Self::Up => write!(f, "↑"),
            Self::Down => write!(f, "↓"),
        }
    }
}
