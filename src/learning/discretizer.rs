use crate::*;

/// Maps continuous coordinates onto the fixed decimal grid of [`StateKey`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discretizer {
    precision: u32,
}

impl Discretizer {
    pub const fn new(precision: u32) -> Self {
        Self { precision }
    }
    pub fn precision(&self) -> u32 {
        self.precision
    }
    pub fn key(&self, point: &Point) -> StateKey {
        StateKey::new(point, self.precision)
    }
}

impl Default for Discretizer {
    fn default() -> Self {
        Self::new(PRECISION)
    }
}
