//! Tabular Q-learning over the discretized feasible region.
//!
//! - `key`, `discretizer` — Continuous points to canonical grid keys
//! - `table` — Sparse value estimates
//! - `action`, `policy`, `annealing` — Epsilon-greedy move selection
//! - `engine`, `phase` — Episode state machine and update rule
//! - `trajectory`, `stats`, `learned` — What a run leaves behind
//! - `sweep` — Independent runs over several seeds

mod action;
mod annealing;
mod discretizer;
mod engine;
mod hyperparameters;
mod key;
mod learned;
mod phase;
mod policy;
mod stats;
mod sweep;
mod table;
mod trajectory;

pub use action::*;
pub use annealing::*;
pub use discretizer::*;
pub use engine::*;
pub use hyperparameters::*;
pub use key::*;
pub use learned::*;
pub use phase::*;
pub use policy::*;
pub use stats::*;
pub use sweep::*;
pub use table::*;
pub use trajectory::*;
