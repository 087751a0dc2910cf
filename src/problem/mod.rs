//! Decision space and constraint set of the linear program.

mod constraint;
mod feasibility;
mod point;
mod polytope;
mod problem;

pub use constraint::*;
pub use feasibility::*;
pub use point::*;
pub use polytope::*;
pub use problem::*;
