use crate::*;
use serde::Serialize;

/// The engine's answer: the best-valued state after a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Learned {
    key: StateKey,
    point: Point,
    estimate: Value,
    objective: Value,
}

impl Learned {
    pub fn new(key: StateKey, estimate: Value, problem: &Problem) -> Self {
        let point = key.point();
        Self {
            key,
            point,
            estimate,
            objective: problem.evaluate(&point),
        }
    }
    pub fn key(&self) -> StateKey {
        self.key
    }
    /// The key reinterpreted as coordinates.
    pub fn point(&self) -> Point {
        self.point
    }
    /// Stored Q-value: the approximate optimal value.
    pub fn estimate(&self) -> Value {
        self.estimate
    }
    /// Objective evaluated at [`Learned::point`].
    pub fn objective(&self) -> Value {
        self.objective
    }
}

impl std::fmt::Display for Learned {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Q={:.4} f={:.4}",
            self.key, self.estimate, self.objective
        )
    }
}
