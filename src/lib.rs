//! Tabular Q-learning over a discretized feasible region.
//!
//! A two-variable linear program is explored by an epsilon-greedy agent that
//! walks a fixed grid from the origin, is rewarded with the objective value
//! only at the last step of each episode, and backs that value up through a
//! sparse Q-table. The best-valued state approximates the optimal vertex and
//! is compared against an exact simplex solve.
//!
//! # Module Structure
//!
//! - `problem` — Points, constraints, feasibility
//! - `learning` — Discretization, Q-table, policy, engine, seed sweeps
//! - `simplex` — Exact dense-tableau LP solver
//! - `report` — Rendering sinks for the final comparison

mod learning;
mod problem;
mod report;
mod simplex;

pub use learning::*;
pub use problem::*;
pub use report::*;
pub use simplex::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Continuous decision variable coordinates.
pub type Coordinate = f64;
/// Q-values, rewards, and objective values.
pub type Value = f64;
/// Exploration rates and uniform draws.
pub type Probability = f64;

// ============================================================================
// Q-LEARNING DEFAULTS
// Hyperparameters of the reference run. Epsilon never decays by default.
// ============================================================================
/// Exploration rate. 1.0 means every action is drawn uniformly at random.
pub const EPSILON: Probability = 1.0;
/// Learning rate (α) blending old and new estimates.
pub const ALPHA: Value = 0.9;
/// Discount factor (γ) on the successor state's estimate.
pub const GAMMA: Value = 0.9;
/// Grid resolution: length of every unit move.
pub const GRID_STEP: Coordinate = 0.3;
/// Number of episodes per run.
pub const EPISODES: usize = 500;
/// Step budget per episode. Rejected moves still consume a step.
pub const STEPS_PER_EPISODE: usize = 1000;
/// Decimal digits kept when discretizing a point into a state key.
pub const PRECISION: u32 = 1;
/// Largest supported precision. Keys are stored as scaled `i64`.
pub const MAX_PRECISION: u32 = 12;
/// Scaled coordinates at or beyond this magnitude no longer map to distinct
/// integer keys.
pub const KEY_RANGE: Coordinate = 9_007_199_254_740_992.0;
/// Default RNG seed.
pub const SEED: u64 = 0;

// ============================================================================
// EPSILON ANNEALING
// Opt-in improved variant. Never used unless explicitly selected.
// ============================================================================
/// Per-episode multiplicative decay of epsilon.
pub const EPSILON_DECAY: Probability = 0.99;
/// Epsilon never decays below this floor.
pub const EPSILON_FLOOR: Probability = 0.05;

// ============================================================================
// SIMPLEX
// ============================================================================
/// Pivot and ratio-test tolerance.
pub const SIMPLEX_TOLERANCE: Value = 1e-9;
/// Pivot budget before giving up.
pub const SIMPLEX_ITERATIONS: usize = 1000;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Episodes between progress log messages during a run.
pub const LOG_INTERVAL: usize = 100;

/// Initialize terminal logging. DEBUG when `verbose`, INFO otherwise.
#[cfg(feature = "cli")]
pub fn log(verbose: bool) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = match verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    };
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}
