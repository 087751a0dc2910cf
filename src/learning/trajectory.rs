use crate::*;
use serde::Serialize;

/// Every accepted position, in the order it was reached, across all
/// episodes of a run. Only reporters read it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Trajectory(Vec<Point>);

impl Trajectory {
    pub(crate) fn push(&mut self, point: Point) {
        self.0.push(point);
    }
    pub fn points(&self) -> &[Point] {
        &self.0
    }
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.0.iter()
    }
    pub fn last(&self) -> Option<&Point> {
        self.0.last()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
