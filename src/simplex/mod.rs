//! Exact linear program solving for reference optima.

mod optimum;
mod options;
mod tableau;

pub use optimum::*;
pub use options::*;
pub use tableau::*;

use crate::*;

/// Exact solver for `max c·x` over a [`Problem`].
pub trait LinearSolver {
    fn solve(&self, problem: &Problem) -> anyhow::Result<Optimum>;
}

/// Two-phase primal simplex on a dense tableau with Bland's pivoting rule.
///
/// Programs whose origin is feasible start directly from the slack basis.
/// Negative right-hand sides first go through a phase that drives the
/// artificial variables to zero, or reports the program infeasible.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simplex {
    options: SimplexOptions,
}

impl Simplex {
    pub fn new(options: SimplexOptions) -> Self {
        Self { options }
    }
}

impl LinearSolver for Simplex {
    fn solve(&self, problem: &Problem) -> anyhow::Result<Optimum> {
        let mut tableau = Tableau::new(
            &problem.objective(),
            &problem.matrix(),
            &problem.bounds(),
        )?;
        let iterations = tableau.optimize(&self.options)?;
        let solution = tableau.solution();
        let point = Point::new(solution[0], solution[1]);
        log::debug!("simplex converged in {} pivots at {}", iterations, point);
        Ok(Optimum::new(point, tableau.value(), iterations))
    }
}
