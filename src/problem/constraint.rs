use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// A single linear inequality `a·x + b·y ≤ rhs`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    coefficients: [Value; 2],
    bound: Value,
}

impl Constraint {
    pub const fn new(a: Value, b: Value, bound: Value) -> Self {
        Self {
            coefficients: [a, b],
            bound,
        }
    }
    pub fn coefficients(&self) -> [Value; 2] {
        self.coefficients
    }
    pub fn bound(&self) -> Value {
        self.bound
    }
    pub fn holds(&self, point: &Point) -> bool {
        point.dot(self.coefficients) <= self.bound
    }
    /// How far `point` sits inside the half-plane. Negative means violated.
    pub fn slack(&self, point: &Point) -> Value {
        self.bound - point.dot(self.coefficients)
    }
    pub fn is_finite(&self) -> bool {
        self.coefficients.iter().all(|c| c.is_finite()) && self.bound.is_finite()
    }
}

/// Parses `a,b,rhs` (whitespace tolerant), as accepted on the command line.
impl TryFrom<&str> for Constraint {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let values = s
            .split(',')
            .map(str::trim)
            .map(|v| v.parse::<Value>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("invalid constraint {:?}: {}", s, e))?;
        match values.as_slice() {
            [a, b, rhs] => Ok(Self::new(*a, *b, *rhs)),
            _ => Err(anyhow::anyhow!(
                "invalid constraint {:?}: expected a,b,rhs",
                s
            )),
        }
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b] = self.coefficients;
        write!(f, "{}x {:+}y ≤ {}", a, b, self.bound)
    }
}
