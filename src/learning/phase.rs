use crate::*;

/// Where the engine's episode loop currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Position about to be reset to the origin.
    EpisodeStart,
    /// Steps remain in the current episode's budget.
    StepInProgress,
    /// Budget exhausted; decides between another episode and completion.
    EpisodeEnd,
    /// Terminal. Advancing further changes nothing.
    RunComplete,
}

/// Outcome of a single step, carrying the candidate position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Feasible: recorded, rewarded, learned from, moved to.
    Accepted(Point),
    /// Infeasible: discarded, but the step still counts against the budget.
    Rejected(Point),
}

impl Step {
    pub fn candidate(&self) -> Point {
        match self {
            Self::Accepted(p) | Self::Rejected(p) => *p,
        }
    }
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}
