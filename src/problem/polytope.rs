use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// The feasible region: the non-negative quadrant intersected with a fixed
/// set of half-planes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polytope(Vec<Constraint>);

impl Polytope {
    pub fn constraints(&self) -> &[Constraint] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Largest `y` admitted at a given `x`, or `None` outside the region.
    /// Used to shade the region when rendering.
    pub fn ceiling(&self, x: Coordinate) -> Option<Coordinate> {
        if x < 0.0 {
            return None;
        }
        let mut ceiling = Coordinate::INFINITY;
        for constraint in self.0.iter() {
            let [a, b] = constraint.coefficients();
            let rest = constraint.bound() - a * x;
            match b {
                b if b > 0.0 => ceiling = ceiling.min(rest / b),
                b if b < 0.0 => continue,
                _ if rest < 0.0 => return None,
                _ => continue,
            }
        }
        (ceiling >= 0.0).then_some(ceiling)
    }
}

impl From<Vec<Constraint>> for Polytope {
    fn from(constraints: Vec<Constraint>) -> Self {
        Self(constraints)
    }
}

impl Feasibility for Polytope {
    fn feasible(&self, point: &Point) -> bool {
        point.is_finite() && point.x() >= 0.0 && point.y() >= 0.0 && self.0.iter().all(|c| c.holds(point))
    }
}
