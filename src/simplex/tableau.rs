use crate::*;

/// Dense simplex tableau for `max c·x` s.t. `Ax ≤ b`, `x ≥ 0`.
///
/// Layout: one row per constraint `[A | ±I | R | b]` followed by the
/// objective row `[−c | 0 | 0 | z]`. Columns `0..n` are decision variables,
/// `n..n+m` slacks, then one artificial column per constraint with a
/// negative right-hand side, and the last column the right-hand side. Such
/// rows are negated so every right-hand side is non-negative, and their
/// artificials form the starting basis for phase one.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau {
    rows: Vec<Vec<Value>>,
    basis: Vec<usize>,
    variables: usize,
    height: usize,
    artificials: usize,
}

impl Tableau {
    pub fn new(objective: &[Value], matrix: &[Vec<Value>], bounds: &[Value]) -> anyhow::Result<Self> {
        let n = objective.len();
        let m = matrix.len();
        anyhow::ensure!(m == bounds.len(), "{} rows but {} bounds", m, bounds.len());
        if let Some(i) = matrix.iter().position(|row| row.len() != n) {
            anyhow::bail!("row {} has {} coefficients, expected {}", i, matrix[i].len(), n);
        }
        let artificials = bounds.iter().filter(|b| **b < 0.0).count();
        let width = n + m + artificials + 1;
        let mut basis = Vec::with_capacity(m);
        let mut rows = Vec::with_capacity(m + 2);
        let mut next = n + m;
        for (i, (coefficients, &bound)) in matrix.iter().zip(bounds.iter()).enumerate() {
            let sign = if bound < 0.0 { -1.0 } else { 1.0 };
            let mut row = vec![0.0; width];
            row[..n]
                .iter_mut()
                .zip(coefficients.iter())
                .for_each(|(v, c)| *v = sign * c);
            row[n + i] = sign;
            row[width - 1] = sign * bound;
            if bound < 0.0 {
                row[next] = 1.0;
                basis.push(next);
                next += 1;
            } else {
                basis.push(n + i);
            }
            rows.push(row);
        }
        let mut price = vec![0.0; width];
        for (j, c) in objective.iter().enumerate() {
            price[j] = -c;
        }
        rows.push(price);
        Ok(Self {
            rows,
            basis,
            variables: n,
            height: m,
            artificials,
        })
    }

    /// Pivot until optimal. Returns the number of pivots across both phases.
    pub fn optimize(&mut self, options: &SimplexOptions) -> anyhow::Result<usize> {
        let mut pivots = 0;
        let first = self.first_artificial();
        if self.artificials > 0 {
            let feasibility = self.feasibility();
            self.rows.push(feasibility);
            let phase = self.iterate(first + self.artificials, options.iterations, options.tolerance);
            let shortfall = -self.value();
            self.rows.pop();
            pivots += phase?;
            anyhow::ensure!(
                shortfall <= options.tolerance,
                "program is infeasible (constraint violation {:.3e})",
                shortfall
            );
            self.evict(options.tolerance);
            log::debug!("phase one reached a feasible vertex in {} pivots", pivots);
        }
        pivots += self.iterate(first, options.iterations - pivots, options.tolerance)?;
        Ok(pivots)
    }

    /// Phase one objective: maximize the negated sum of artificials, priced
    /// out against the rows where they start basic.
    fn feasibility(&self) -> Vec<Value> {
        let width = self.width();
        let first = self.first_artificial();
        let mut row = vec![0.0; width];
        row[first..width - 1].iter_mut().for_each(|v| *v = 1.0);
        for (i, &basic) in self.basis.iter().enumerate() {
            if basic >= first {
                row.iter_mut()
                    .zip(self.rows[i].iter())
                    .for_each(|(v, x)| *v -= x);
            }
        }
        row
    }

    /// Pivot artificials that stayed basic at zero out of the basis. Rows
    /// with no other non-zero entry are redundant and keep theirs.
    fn evict(&mut self, tolerance: Value) {
        let first = self.first_artificial();
        for row in 0..self.height {
            if self.basis[row] < first {
                continue;
            }
            if let Some(column) = (0..first).find(|&j| self.rows[row][j].abs() > tolerance) {
                self.pivot(row, column);
            }
        }
    }

    /// Pivot on the columns below `columns` until none prices negative.
    fn iterate(&mut self, columns: usize, budget: usize, tolerance: Value) -> anyhow::Result<usize> {
        for iteration in 0..=budget {
            let Some(column) = self.entering(columns, tolerance) else {
                return Ok(iteration);
            };
            if iteration == budget {
                break;
            }
            let Some(row) = self.leaving(column, tolerance) else {
                anyhow::bail!("program is unbounded along variable {}", column);
            };
            self.pivot(row, column);
        }
        anyhow::bail!("no optimum within {} pivots", budget)
    }

    /// Bland: lowest-index column with a negative reduced cost.
    fn entering(&self, columns: usize, tolerance: Value) -> Option<usize> {
        self.price()[..columns]
            .iter()
            .position(|&c| c < -tolerance)
    }

    /// Minimum ratio test; ties go to the lowest basic variable index.
    fn leaving(&self, column: usize, tolerance: Value) -> Option<usize> {
        let rhs = self.width() - 1;
        self.constraints()
            .iter()
            .enumerate()
            .filter(|(_, row)| row[column] > tolerance)
            .map(|(i, row)| (i, row[rhs] / row[column]))
            .fold(None, |best: Option<(usize, Value)>, (i, ratio)| match best {
                Some((j, min)) if ratio > min + tolerance => Some((j, min)),
                Some((j, min)) if ratio >= min - tolerance && self.basis[j] < self.basis[i] => Some((j, min)),
                _ => Some((i, ratio)),
            })
            .map(|(i, _)| i)
    }

    fn pivot(&mut self, row: usize, column: usize) {
        let scale = self.rows[row][column];
        self.rows[row].iter_mut().for_each(|v| *v /= scale);
        let pivot = self.rows[row].clone();
        for (i, other) in self.rows.iter_mut().enumerate() {
            let factor = other[column];
            if i == row || factor == 0.0 {
                continue;
            }
            other
                .iter_mut()
                .zip(pivot.iter())
                .for_each(|(v, p)| *v -= factor * p);
        }
        self.basis[row] = column;
    }

    /// Current values of the decision variables.
    pub fn solution(&self) -> Vec<Value> {
        let rhs = self.width() - 1;
        let mut solution = vec![0.0; self.variables];
        for (row, &basic) in self.basis.iter().enumerate() {
            if basic < self.variables {
                solution[basic] = self.rows[row][rhs];
            }
        }
        solution
    }

    /// Current objective value.
    pub fn value(&self) -> Value {
        self.price()[self.width() - 1]
    }

    fn price(&self) -> &[Value] {
        self.rows.last().map(Vec::as_slice).unwrap_or_default()
    }
    fn constraints(&self) -> &[Vec<Value>] {
        &self.rows[..self.height]
    }
    fn first_artificial(&self) -> usize {
        self.variables + self.height
    }
    fn width(&self) -> usize {
        self.price().len()
    }
}
