use crate::*;
use rand::Rng;

/// Chooses the next move from the current position.
pub trait Policy {
    /// `actions` must not be empty.
    fn select<R>(
        &self,
        rng: &mut R,
        point: &Point,
        table: &QTable,
        epsilon: Probability,
        actions: &[Action],
    ) -> Action
    where
        R: Rng;
}

/// Epsilon-greedy selection over successor-state values.
///
/// One uniform draw per call decides between exploring (a second draw picks
/// an action uniformly) and exploiting (the move into the highest valued
/// successor, first action on ties).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpsilonGreedy {
    discretizer: Discretizer,
    step: Coordinate,
}

impl EpsilonGreedy {
    pub fn new(discretizer: Discretizer, step: Coordinate) -> Self {
        Self { discretizer, step }
    }
    /// The exploiting choice alone.
    pub fn greedy(&self, point: &Point, table: &QTable, actions: &[Action]) -> Action {
        let candidates = actions
            .iter()
            .map(|action| action.apply(*point, self.step))
            .map(|next| self.discretizer.key(&next))
            .collect::<Vec<_>>();
        actions[table.argmax(&candidates)]
    }
}

impl Policy for EpsilonGreedy {
    fn select<R>(
        &self,
        rng: &mut R,
        point: &Point,
        table: &QTable,
        epsilon: Probability,
        actions: &[Action],
    ) -> Action
    where
        R: Rng,
    {
        if rng.random::<Probability>() < epsilon {
            actions[rng.random_range(0..actions.len())]
        } else {
            self.greedy(point, table, actions)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn policy() -> EpsilonGreedy {
        EpsilonGreedy::new(Discretizer::default(), GRID_STEP)
    }

    #[test]
    fn greedy_defaults_to_first_action() {
        let table = QTable::default();
        let ref mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..32 {
            let action = policy().select(rng, &Point::origin(), &table, 0.0, &Action::all());
            assert_eq!(action, Action::Right);
        }
    }

    #[test]
    fn greedy_follows_the_best_successor() {
        let mut table = QTable::default();
        let discretizer = Discretizer::default();
        table.set(discretizer.key(&Point::new(0.0, 0.3)), 4.0);
        table.set(discretizer.key(&Point::new(0.3, 0.0)), 2.0);
        let action = policy().greedy(&Point::origin(), &table, &Action::all());
        assert_eq!(action, Action::Up);
    }

    #[test]
    fn full_exploration_ignores_values() {
        let mut table = QTable::default();
        let discretizer = Discretizer::default();
        table.set(discretizer.key(&Point::new(0.3, 0.0)), 100.0);
        let ref mut rng = SmallRng::seed_from_u64(11);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..256 {
            seen.insert(policy().select(rng, &Point::origin(), &table, 1.0, &Action::all()));
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn same_seed_same_choices() {
        let table = QTable::default();
        let draw = |seed| {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            (0..64)
                .map(|_| policy().select(rng, &Point::origin(), &table, 0.5, &Action::all()))
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(3), draw(3));
    }
}
