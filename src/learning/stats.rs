use serde::Serialize;
use std::time::Duration;

/// Counters accumulated over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Stats {
    pub episodes: usize,
    pub steps: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub states: usize,
    pub elapsed: Duration,
}

impl Stats {
    /// Fraction of steps whose candidate was feasible.
    pub fn acceptance(&self) -> f64 {
        self.accepted as f64 / self.steps.max(1) as f64
    }
    /// Aligned columns with step throughput.
    pub fn format(&self) -> String {
        let rate = self.steps as f64 / self.elapsed.as_secs_f64().max(1e-9);
        format!(
            "{:<18}{:<18}{:<18}{:<18}{:<18}",
            format!("episode {}", self.episodes),
            format!("steps {}", self.steps),
            format!("accept {:.1}%", 100.0 * self.acceptance()),
            format!("states {}", self.states),
            format!("S/sec {:.0}", rate),
        )
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}
