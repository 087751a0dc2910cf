//! Exploration rate schedules.
use crate::*;

/// Exploration rate as a function of the episode index.
pub trait Annealing {
    fn epsilon(base: Probability, episode: usize) -> Probability;
}

/// The configured rate for every episode. Exploration never anneals.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstantEpsilon;

impl Annealing for ConstantEpsilon {
    fn epsilon(base: Probability, _: usize) -> Probability {
        base
    }
}

/// Improved variant, opt-in only.
///
/// Decays the rate geometrically by [`EPSILON_DECAY`] per episode down to
/// [`EPSILON_FLOOR`] (or `base`, if that is already lower).
#[derive(Debug, Clone, Copy, Default)]
pub struct DecayingEpsilon;

impl Annealing for DecayingEpsilon {
    fn epsilon(base: Probability, episode: usize) -> Probability {
        let floor = EPSILON_FLOOR.min(base);
        let decay = EPSILON_DECAY.powi(episode.min(i32::MAX as usize) as i32);
        (base * decay).max(floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_never_moves() {
        assert_eq!(ConstantEpsilon::epsilon(1.0, 0), 1.0);
        assert_eq!(ConstantEpsilon::epsilon(1.0, 10_000), 1.0);
    }

    #[test]
    fn decaying_is_monotone_and_floored() {
        let rates = (0..1000)
            .map(|e| DecayingEpsilon::epsilon(1.0, e))
            .collect::<Vec<_>>();
        assert_eq!(rates[0], 1.0);
        assert!(rates.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(rates[999], EPSILON_FLOOR);
    }

    #[test]
    fn decaying_respects_a_low_base() {
        assert_eq!(DecayingEpsilon::epsilon(0.0, 50), 0.0);
        assert_eq!(DecayingEpsilon::epsilon(0.01, 500), 0.01);
    }
}
