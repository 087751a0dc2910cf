use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// A candidate solution: the two continuous decision variables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: Coordinate,
    y: Coordinate,
}

impl Point {
    pub const fn new(x: Coordinate, y: Coordinate) -> Self {
        Self { x, y }
    }
    /// Starting position of every episode.
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0)
    }
    pub fn x(&self) -> Coordinate {
        self.x
    }
    pub fn y(&self) -> Coordinate {
        self.y
    }
    /// Linear combination `a·x + b·y`.
    pub fn dot(&self, [a, b]: [Value; 2]) -> Value {
        a * self.x + b * self.y
    }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(Coordinate, Coordinate)> for Point {
    fn from((x, y): (Coordinate, Coordinate)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (Coordinate, Coordinate) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl std::ops::Add for Point {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_product() {
        let point = Point::new(3.6, 0.5);
        assert!((point.dot([10.0, 8.0]) - 40.0).abs() < 1e-12);
    }

    #[test]
    fn addition_accumulates_drift() {
        let step = Point::new(0.3, 0.0);
        let walked = (0..3).fold(Point::origin(), |p, _| p + step);
        assert!((walked.x() - 0.9).abs() < 1e-12);
        assert_eq!(walked.y(), 0.0);
    }
}
