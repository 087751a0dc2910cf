use crate::*;
use serde::Serialize;

/// Exact optimum of a linear program.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Optimum {
    point: Point,
    value: Value,
    iterations: usize,
}

impl Optimum {
    pub fn new(point: Point, value: Value, iterations: usize) -> Self {
        Self {
            point,
            value,
            iterations,
        }
    }
    pub fn point(&self) -> Point {
        self.point
    }
    pub fn value(&self) -> Value {
        self.value
    }
    /// Pivots performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

impl std::fmt::Display for Optimum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} f={:.4}", self.point, self.value)
    }
}
