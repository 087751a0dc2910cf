use crate::*;
use serde::Serialize;

/// Everything a reporter may show: the feasible region, the explored path,
/// and both solutions.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Summary<'a> {
    problem: &'a Problem,
    #[serde(skip)]
    trajectory: &'a Trajectory,
    learned: Option<Learned>,
    exact: Optimum,
    stats: Stats,
}

impl<'a> Summary<'a> {
    pub fn new(
        problem: &'a Problem,
        trajectory: &'a Trajectory,
        learned: Option<Learned>,
        exact: Optimum,
        stats: Stats,
    ) -> Self {
        Self {
            problem,
            trajectory,
            learned,
            exact,
            stats,
        }
    }
    /// Summarize a finished engine against an exact optimum.
    pub fn of<A>(engine: &'a Engine<A>, exact: Optimum) -> Self
    where
        A: Annealing,
    {
        Self::new(
            engine.problem(),
            engine.trajectory(),
            engine.solution(),
            exact,
            *engine.stats(),
        )
    }
    pub fn problem(&self) -> &'a Problem {
        self.problem
    }
    pub fn trajectory(&self) -> &'a Trajectory {
        self.trajectory
    }
    pub fn learned(&self) -> Option<Learned> {
        self.learned
    }
    pub fn exact(&self) -> Optimum {
        self.exact
    }
    pub fn stats(&self) -> Stats {
        self.stats
    }
    /// Exact optimum minus the objective at the learned point.
    pub fn gap(&self) -> Option<Value> {
        self.learned
            .map(|learned| self.exact.value() - learned.objective())
    }
}
