use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Every tunable of a Q-learning run. Defaults reproduce the reference run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hyperparameters {
    /// Exploration rate, in `[0, 1]`.
    pub epsilon: Probability,
    /// Learning rate, in `(0, 1]`.
    pub alpha: Value,
    /// Discount factor, in `[0, 1)`.
    pub gamma: Value,
    /// Grid resolution of every move.
    pub step: Coordinate,
    pub episodes: usize,
    /// Steps per episode.
    pub steps: usize,
    /// Decimal digits kept in state keys.
    pub precision: u32,
    pub seed: u64,
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            epsilon: EPSILON,
            alpha: ALPHA,
            gamma: GAMMA,
            step: GRID_STEP,
            episodes: EPISODES,
            steps: STEPS_PER_EPISODE,
            precision: PRECISION,
            seed: SEED,
        }
    }
}

impl Hyperparameters {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.epsilon),
            "epsilon {} outside [0, 1]",
            self.epsilon
        );
        anyhow::ensure!(
            self.alpha > 0.0 && self.alpha <= 1.0,
            "alpha {} outside (0, 1]",
            self.alpha
        );
        anyhow::ensure!(
            self.gamma >= 0.0 && self.gamma < 1.0,
            "gamma {} outside [0, 1)",
            self.gamma
        );
        anyhow::ensure!(
            self.step.is_finite() && self.step > 0.0,
            "grid step {} must be finite and positive",
            self.step
        );
        anyhow::ensure!(self.episodes > 0, "episode count must be positive");
        anyhow::ensure!(self.steps > 0, "steps per episode must be positive");
        anyhow::ensure!(
            self.precision <= MAX_PRECISION,
            "precision {} exceeds {}",
            self.precision,
            MAX_PRECISION
        );
        anyhow::ensure!(
            self.reach() < KEY_RANGE,
            "grid step {} over {} steps at precision {} overflows state keys",
            self.step,
            self.steps,
            self.precision
        );
        Ok(())
    }
    /// Largest scaled coordinate one episode can reach from the origin.
    fn reach(&self) -> Coordinate {
        self.step * self.steps as Coordinate * (10 as Coordinate).powi(self.precision as i32)
    }
    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }
}
