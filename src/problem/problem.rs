use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Maximize `c·(x, y)` over a [`Polytope`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    objective: [Value; 2],
    region: Polytope,
}

impl Problem {
    /// Build from the dense form `(c, A, b)` used by LP solvers, rejecting
    /// any shape that does not describe a two-variable program.
    pub fn new(objective: Vec<Value>, matrix: Vec<Vec<Value>>, bounds: Vec<Value>) -> anyhow::Result<Self> {
        anyhow::ensure!(
            objective.len() == 2,
            "objective has {} coefficients, expected 2",
            objective.len()
        );
        anyhow::ensure!(
            matrix.len() == bounds.len(),
            "constraint matrix has {} rows but {} bounds",
            matrix.len(),
            bounds.len()
        );
        let constraints = matrix
            .iter()
            .zip(bounds.iter())
            .enumerate()
            .map(|(i, (row, bound))| match row.as_slice() {
                [a, b] => Ok(Constraint::new(*a, *b, *bound)),
                _ => Err(anyhow::anyhow!(
                    "constraint row {} has {} coefficients, expected 2",
                    i,
                    row.len()
                )),
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Self::from_parts([objective[0], objective[1]], constraints)
    }
    pub fn from_parts(objective: [Value; 2], constraints: Vec<Constraint>) -> anyhow::Result<Self> {
        anyhow::ensure!(
            objective.iter().all(|c| c.is_finite()),
            "objective coefficients must be finite"
        );
        if let Some(bad) = constraints.iter().position(|c| !c.is_finite()) {
            anyhow::bail!("constraint {} has non-finite coefficients", bad);
        }
        Ok(Self {
            objective,
            region: Polytope::from(constraints),
        })
    }
    /// `max 10x + 8y` s.t. `x + 2y ≤ 10`, `x + 3y ≤ 12`, `5x + 2y ≤ 18`.
    pub fn sample() -> Self {
        Self {
            objective: [10.0, 8.0],
            region: Polytope::from(vec![
                Constraint::new(1.0, 2.0, 10.0),
                Constraint::new(1.0, 3.0, 12.0),
                Constraint::new(5.0, 2.0, 18.0),
            ]),
        }
    }
    pub fn objective(&self) -> [Value; 2] {
        self.objective
    }
    pub fn region(&self) -> &Polytope {
        &self.region
    }
    pub fn constraints(&self) -> &[Constraint] {
        self.region.constraints()
    }
    /// Objective value at `point`. This is the terminal reward.
    pub fn evaluate(&self, point: &Point) -> Value {
        point.dot(self.objective)
    }
    /// Dense `A` matrix, one row per constraint.
    pub fn matrix(&self) -> Vec<Vec<Value>> {
        self.constraints()
            .iter()
            .map(|c| c.coefficients().to_vec())
            .collect()
    }
    /// Right-hand sides `b`, aligned with [`Problem::matrix`].
    pub fn bounds(&self) -> Vec<Value> {
        self.constraints().iter().map(|c| c.bound()).collect()
    }
}

impl Default for Problem {
    fn default() -> Self {
        Self::sample()
    }
}

impl Feasibility for Problem {
    fn feasible(&self, point: &Point) -> bool {
        self.region.feasible(point)
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b] = self.objective;
        writeln!(f, "maximize {}x {:+}y", a, b)?;
        for constraint in self.constraints() {
            writeln!(f, "  {}", constraint)?;
        }
        write!(f, "  x, y ≥ 0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dense_form_round_trips_the_sample() {
        let sample = Problem::sample();
        let dense = Problem::new(sample.objective().to_vec(), sample.matrix(), sample.bounds()).unwrap();
        assert_eq!(dense, sample);
    }

    #[test]
    fn rejects_objective_of_wrong_length() {
        let err = Problem::new(vec![1.0, 2.0, 3.0], vec![], vec![]).unwrap_err();
        assert!(err.to_string().contains("objective"));
    }

    #[test]
    fn rejects_row_bound_mismatch() {
        let err = Problem::new(vec![1.0, 2.0], vec![vec![1.0, 1.0]], vec![]).unwrap_err();
        assert!(err.to_string().contains("rows"));
    }

    #[test]
    fn rejects_row_of_wrong_width() {
        let err = Problem::new(vec![1.0, 2.0], vec![vec![1.0, 1.0, 1.0]], vec![4.0]).unwrap_err();
        assert!(err.to_string().contains("row 0"));
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(Problem::new(vec![Value::NAN, 1.0], vec![], vec![]).is_err());
        assert!(Problem::new(vec![1.0, 1.0], vec![vec![1.0, 1.0]], vec![Value::INFINITY]).is_err());
    }

    #[test]
    fn evaluates_objective() {
        let problem = Problem::sample();
        assert!((problem.evaluate(&Point::new(3.6, 0.0)) - 36.0).abs() < 1e-9);
        assert!((problem.evaluate(&Point::new(3.3, 0.6)) - 37.8).abs() < 1e-9);
    }
}
