use crate::*;

/// Pure membership predicate over candidate points.
///
/// Total over any real input: non-finite coordinates are simply infeasible.
pub trait Feasibility {
    fn feasible(&self, point: &Point) -> bool;
}
