use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Canonical discrete representation of a [`Point`].
///
/// Each coordinate is scaled by `10^precision` and rounded half away from
/// zero, then stored as an integer so that equality and hashing are exact.
/// Two points in the same rounding cell share a key; a shared key says
/// nothing about the unrounded coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateKey {
    x: i64,
    y: i64,
    precision: u32,
}

impl StateKey {
    pub fn new(point: &Point, precision: u32) -> Self {
        let scale = scale(precision);
        Self {
            x: (point.x() * scale).round() as i64,
            y: (point.y() * scale).round() as i64,
            precision,
        }
    }
    pub fn precision(&self) -> u32 {
        self.precision
    }
    /// The rounded coordinates this key stands for.
    pub fn point(&self) -> Point {
        let scale = scale(self.precision);
        Point::new(self.x as Coordinate / scale, self.y as Coordinate / scale)
    }
}

fn scale(precision: u32) -> Coordinate {
    (10 as Coordinate).powi(precision as i32)
}

impl From<StateKey> for Point {
    fn from(key: StateKey) -> Self {
        key.point()
    }
}

impl std::fmt::Display for StateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let point = self.point();
        let digits = self.precision as usize;
        write!(f, "({:.*}, {:.*})", digits, point.x(), digits, point.y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_cell_same_key() {
        let a = StateKey::new(&Point::new(0.30000000000000004, 1.2000000000000002), 1);
        let b = StateKey::new(&Point::new(0.3, 1.2), 1);
        let c = StateKey::new(&Point::new(0.27, 1.24), 1);
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn equal_rounding_implies_equal_keys() {
        let points = [
            (1.04, 1.0),
            (0.96, 0.95),
            (2.449, 3.1),
            (2.35, 3.05),
            (0.0, 0.0),
            (-0.04, 0.04),
        ];
        for (i, &(x1, y1)) in points.iter().enumerate() {
            for &(x2, y2) in points.iter().skip(i + 1) {
                let rounds_same = (x1 * 10.0_f64).round() == (x2 * 10.0_f64).round()
                    && (y1 * 10.0_f64).round() == (y2 * 10.0_f64).round();
                let same = StateKey::new(&Point::new(x1, y1), 1) == StateKey::new(&Point::new(x2, y2), 1);
                assert_eq!(rounds_same, same, "({x1}, {y1}) vs ({x2}, {y2})");
            }
        }
    }

    #[test]
    fn different_cells_differ() {
        let a = StateKey::new(&Point::new(0.3, 0.0), 1);
        let b = StateKey::new(&Point::new(0.6, 0.0), 1);
        assert_ne!(a, b);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(StateKey::new(&Point::new(0.25, -0.25), 1).point(), Point::new(0.3, -0.3));
        assert_eq!(StateKey::new(&Point::new(2.5, 3.5), 0).point(), Point::new(3.0, 4.0));
    }

    #[test]
    fn negative_zero_collapses() {
        let a = StateKey::new(&Point::new(-0.04, 0.0), 1);
        let b = StateKey::new(&Point::origin(), 1);
        assert_eq!(a, b);
    }

    #[test]
    fn precision_is_part_of_the_key() {
        let coarse = StateKey::new(&Point::new(1.0, 1.0), 1);
        let fine = StateKey::new(&Point::new(1.0, 1.0), 2);
        assert_ne!(coarse, fine);
        assert_eq!(coarse.point(), fine.point());
    }

    #[test]
    fn displays_at_precision() {
        assert_eq!(StateKey::new(&Point::new(3.6, 0.0), 1).to_string(), "(3.6, 0.0)");
        assert_eq!(StateKey::new(&Point::new(2.308, 3.23), 2).to_string(), "(2.31, 3.23)");
    }
}
