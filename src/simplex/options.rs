use crate::*;

/// Options for the simplex solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplexOptions {
    /// Magnitudes below this count as zero in pricing and ratio tests.
    pub tolerance: Value,
    /// Pivot budget.
    pub iterations: usize,
}

impl Default for SimplexOptions {
    fn default() -> Self {
        Self {
            tolerance: SIMPLEX_TOLERANCE,
            iterations: SIMPLEX_ITERATIONS,
        }
    }
}
