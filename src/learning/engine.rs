//! Episode loop and value update.
//!
//! [`Engine`] owns everything a run mutates: the [`QTable`], the
//! [`Trajectory`], and a seeded [`SmallRng`]. Construction validates the
//! configuration; after that every operation is total.
//!
//! # Episode Loop
//!
//! Each call to [`Engine::advance`] performs exactly one transition:
//!
//! - `EpisodeStart` resets the position to the origin
//! - `StepInProgress` executes one step, then ends the episode once the
//!   step budget is spent
//! - `EpisodeEnd` starts the next episode or completes the run
//! - `RunComplete` does nothing
//!
//! # Update Rule
//!
//! For an accepted move from `s` to `s'` with reward `r`:
//!
//! ```text
//! Q[s] ← (1 − α)·Q[s] + α·(r + γ·Q[s'])
//! ```
//!
//! `r` is the objective at the new position on the last step of an episode
//! and zero otherwise. Rejected moves leave the table, the trajectory and the
//! position untouched but still spend a step.
use crate::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::marker::PhantomData;
use std::time::Instant;

/// Tabular Q-learning engine, generic over the exploration schedule.
pub struct Engine<A = ConstantEpsilon>
where
    A: Annealing,
{
    problem: Problem,
    params: Hyperparameters,
    discretizer: Discretizer,
    policy: EpsilonGreedy,
    table: QTable,
    trajectory: Trajectory,
    rng: SmallRng,
    phase: Phase,
    position: Point,
    episode: usize,
    step: usize,
    stats: Stats,
    started: Option<Instant>,
    phantom: PhantomData<fn() -> A>,
}

impl<A> Engine<A>
where
    A: Annealing,
{
    pub fn new(problem: Problem, params: Hyperparameters) -> anyhow::Result<Self> {
        params.validate()?;
        if !problem.feasible(&Point::origin()) {
            log::warn!("origin is infeasible, every episode starts outside the region");
        }
        let discretizer = Discretizer::new(params.precision);
        Ok(Self {
            policy: EpsilonGreedy::new(discretizer, params.step),
            rng: SmallRng::seed_from_u64(params.seed),
            discretizer,
            problem,
            params,
            table: QTable::default(),
            trajectory: Trajectory::default(),
            phase: Phase::EpisodeStart,
            position: Point::origin(),
            episode: 0,
            step: 0,
            stats: Stats::default(),
            started: None,
            phantom: PhantomData,
        })
    }

    /// Run every remaining episode.
    pub fn run(&mut self) {
        log::info!(
            "learning {} episodes x {} steps (ε={} α={} γ={} step={} seed={})",
            self.params.episodes,
            self.params.steps,
            self.params.epsilon,
            self.params.alpha,
            self.params.gamma,
            self.params.step,
            self.params.seed,
        );
        while self.phase != Phase::RunComplete {
            self.advance();
        }
        match self.solution() {
            Some(learned) => log::info!("learning complete, best state {}", learned),
            None => log::warn!("learning complete, no move was ever accepted"),
        }
    }

    /// Consuming form of [`Engine::run`].
    pub fn solve(mut self) -> Self {
        self.run();
        self
    }

    /// Perform one state-machine transition. Returns the step outcome when
    /// the transition executed a step.
    pub fn advance(&mut self) -> Option<Step> {
        self.started.get_or_insert_with(Instant::now);
        match self.phase {
            Phase::EpisodeStart => {
                self.position = Point::origin();
                self.step = 0;
                self.phase = Phase::StepInProgress;
                None
            }
            Phase::StepInProgress => {
                let outcome = self.explore();
                self.step += 1;
                if self.step >= self.params.steps {
                    self.phase = Phase::EpisodeEnd;
                }
                Some(outcome)
            }
            Phase::EpisodeEnd => {
                self.episode += 1;
                self.record();
                self.phase = match self.episode < self.params.episodes {
                    true => Phase::EpisodeStart,
                    false => Phase::RunComplete,
                };
                None
            }
            Phase::RunComplete => None,
        }
    }

    /// One step from the current position.
    fn explore(&mut self) -> Step {
        let ref state = self.discretizer.key(&self.position);
        let epsilon = self.epsilon();
        let action = self.policy.select(
            &mut self.rng,
            &self.position,
            &self.table,
            epsilon,
            &Action::all(),
        );
        let candidate = action.apply(self.position, self.params.step);
        self.stats.steps += 1;
        if !self.problem.feasible(&candidate) {
            self.stats.rejected += 1;
            return Step::Rejected(candidate);
        }
        self.stats.accepted += 1;
        self.trajectory.push(candidate);
        let reward = self.reward(&candidate);
        let ref next = self.discretizer.key(&candidate);
        self.update(state, next, reward);
        self.position = candidate;
        Step::Accepted(candidate)
    }

    /// Objective at `candidate` on the last step of the episode, zero before.
    fn reward(&self, candidate: &Point) -> Value {
        match self.step + 1 == self.params.steps {
            true => self.problem.evaluate(candidate),
            false => 0.0,
        }
    }

    fn update(&mut self, state: &StateKey, next: &StateKey, reward: Value) {
        let alpha = self.params.alpha;
        let gamma = self.params.gamma;
        let value = (1.0 - alpha) * self.table.get(state) + alpha * (reward + gamma * self.table.get(next));
        self.table.set(*state, value);
    }

    fn record(&mut self) {
        self.stats.episodes = self.episode;
        self.stats.states = self.table.len();
        self.stats.elapsed = self.started.map(|t| t.elapsed()).unwrap_or_default();
        log::debug!(
            "episode {:>6} ended at {} with {} states",
            self.episode,
            self.position,
            self.table.len()
        );
        if self.episode % LOG_INTERVAL == 0 {
            log::info!("{}", self.stats);
        }
    }

    /// Exploration rate for the current episode.
    pub fn epsilon(&self) -> Probability {
        A::epsilon(self.params.epsilon, self.episode)
    }

    /// Highest valued state, earliest inserted on ties. `None` when no move
    /// was ever accepted.
    pub fn solution(&self) -> Option<Learned> {
        self.table
            .best()
            .map(|(key, estimate)| Learned::new(key, estimate, &self.problem))
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }
    pub fn params(&self) -> &Hyperparameters {
        &self.params
    }
    pub fn table(&self) -> &QTable {
        &self.table
    }
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }
    pub fn stats(&self) -> &Stats {
        &self.stats
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn position(&self) -> Point {
        self.position
    }
    /// Completed episodes.
    pub fn episode(&self) -> usize {
        self.episode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(episodes: usize, steps: usize, epsilon: Probability) -> Hyperparameters {
        Hyperparameters {
            episodes,
            steps,
            epsilon,
            ..Hyperparameters::default()
        }
    }

    #[test]
    fn rejects_invalid_configuration() {
        let bad = Hyperparameters {
            alpha: 2.0,
            ..Hyperparameters::default()
        };
        assert!(Engine::<ConstantEpsilon>::new(Problem::sample(), bad).is_err());
    }

    #[test]
    fn walks_the_state_machine() {
        let mut engine = Engine::<ConstantEpsilon>::new(Problem::sample(), params(2, 2, 1.0)).unwrap();
        assert_eq!(engine.phase(), Phase::EpisodeStart);
        assert_eq!(engine.advance(), None);
        assert_eq!(engine.phase(), Phase::StepInProgress);
        assert!(engine.advance().is_some());
        assert_eq!(engine.phase(), Phase::StepInProgress);
        assert!(engine.advance().is_some());
        assert_eq!(engine.phase(), Phase::EpisodeEnd);
        assert_eq!(engine.advance(), None);
        assert_eq!(engine.phase(), Phase::EpisodeStart);
        assert_eq!(engine.episode(), 1);
        while engine.phase() != Phase::RunComplete {
            engine.advance();
        }
        assert_eq!(engine.episode(), 2);
        assert_eq!(engine.stats().steps, 4);
        let table = engine.table().clone();
        assert_eq!(engine.advance(), None);
        assert_eq!(engine.phase(), Phase::RunComplete);
        assert_eq!(engine.table(), &table);
    }

    #[test]
    fn every_episode_restarts_at_the_origin() {
        let mut engine = Engine::<ConstantEpsilon>::new(Problem::sample(), params(3, 5, 1.0)).unwrap();
        while engine.phase() != Phase::RunComplete {
            if engine.phase() == Phase::EpisodeStart {
                engine.advance();
                assert_eq!(engine.position(), Point::origin());
            } else {
                engine.advance();
            }
        }
    }

    #[test]
    fn greedy_single_step_episodes_learn_the_first_move() {
        // ε = 0 with an empty table always moves right to (step, 0); that
        // move is terminal, so Q[origin] converges to 10·step from below.
        let mut engine = Engine::<ConstantEpsilon>::new(Problem::sample(), params(1, 1, 0.0)).unwrap();
        engine.run();
        let origin = StateKey::new(&Point::origin(), PRECISION);
        assert!((engine.table().get(&origin) - ALPHA * 10.0 * GRID_STEP).abs() < 1e-9);
        assert_eq!(engine.trajectory().points(), &[Point::new(GRID_STEP, 0.0)]);
    }

    #[test]
    fn value_at_rewarded_state_never_decreases_with_more_episodes() {
        let origin = StateKey::new(&Point::origin(), PRECISION);
        let value = |episodes| {
            Engine::<ConstantEpsilon>::new(Problem::sample(), params(episodes, 1, 0.0))
                .unwrap()
                .solve()
                .table()
                .get(&origin)
        };
        let values = [1, 2, 4, 8, 16, 32].map(value);
        assert!(values.windows(2).all(|w| w[1] >= w[0]), "{:?}", values);
        assert!(values[5] <= 10.0 * GRID_STEP + 1e-9);
        assert!(values[5] > 0.99 * 10.0 * GRID_STEP);
    }

    #[test]
    fn only_the_last_step_of_an_episode_is_rewarded() {
        // Greedy over an empty table moves right twice: (0.3, 0) then (0.6, 0).
        let mut engine = Engine::<ConstantEpsilon>::new(Problem::sample(), params(1, 2, 0.0)).unwrap();
        let origin = StateKey::new(&Point::origin(), PRECISION);
        let first = StateKey::new(&Point::new(0.3, 0.0), PRECISION);
        engine.advance();
        assert_eq!(engine.advance(), Some(Step::Accepted(Point::new(0.3, 0.0))));
        assert!(engine.table().contains(&origin));
        assert_eq!(engine.table().get(&origin), 0.0);
        assert_eq!(engine.advance(), Some(Step::Accepted(Point::new(0.6, 0.0))));
        assert_eq!(engine.table().get(&origin), 0.0);
        assert!((engine.table().get(&first) - ALPHA * 10.0 * 0.6).abs() < 1e-9);
        assert_eq!(engine.table().len(), 2);
    }

    #[test]
    fn rejected_last_step_is_not_rewarded() {
        // x ≤ 0.4 admits the first move right but not the second.
        let problem = Problem::from_parts([10.0, 8.0], vec![Constraint::new(1.0, 0.0, 0.4)]).unwrap();
        let mut engine = Engine::<ConstantEpsilon>::new(problem, params(1, 2, 0.0)).unwrap();
        engine.advance();
        assert!(engine.advance().is_some_and(|step| step.is_accepted()));
        let table = engine.table().clone();
        assert_eq!(engine.advance(), Some(Step::Rejected(Point::new(0.6, 0.0))));
        assert_eq!(engine.table(), &table);
        assert_eq!(engine.table().len(), 1);
        assert_eq!(engine.table().get(&StateKey::new(&Point::origin(), PRECISION)), 0.0);
        assert!(!engine.table().contains(&StateKey::new(&Point::new(0.3, 0.0), PRECISION)));
    }

    #[test]
    fn rejected_moves_leave_no_trace() {
        // Greedy with an empty table always tries right, which x ≤ 0.1 forbids.
        let problem = Problem::from_parts([1.0, 1.0], vec![Constraint::new(1.0, 0.0, 0.1)]).unwrap();
        let mut engine = Engine::<ConstantEpsilon>::new(problem, params(4, 25, 0.0)).unwrap();
        engine.run();
        assert!(engine.table().is_empty());
        assert!(engine.trajectory().is_empty());
        assert_eq!(engine.stats().rejected, 100);
        assert_eq!(engine.stats().accepted, 0);
        assert_eq!(engine.stats().steps, 100);
        assert_eq!(engine.solution(), None);
    }

    #[test]
    fn rejected_steps_do_not_touch_table_or_trajectory() {
        let mut engine = Engine::<ConstantEpsilon>::new(Problem::sample(), params(20, 200, 1.0)).unwrap();
        while engine.phase() != Phase::RunComplete {
            let table = engine.table().clone();
            let length = engine.trajectory().len();
            let position = engine.position();
            match engine.advance() {
                Some(Step::Rejected(candidate)) => {
                    assert!(!engine.problem().feasible(&candidate));
                    assert_eq!(engine.table(), &table);
                    assert_eq!(engine.trajectory().len(), length);
                    assert_eq!(engine.position(), position);
                }
                Some(Step::Accepted(candidate)) => {
                    assert_eq!(engine.trajectory().last(), Some(&candidate));
                    assert_eq!(engine.position(), candidate);
                }
                None => {}
            }
        }
        assert!(engine.stats().rejected > 0);
        assert_eq!(
            engine.stats().accepted + engine.stats().rejected,
            engine.stats().steps
        );
        assert_eq!(engine.stats().accepted, engine.trajectory().len());
    }

    #[test]
    fn trajectory_stays_inside_the_sample_region() {
        let engine = Engine::<ConstantEpsilon>::new(Problem::sample(), params(50, 400, 1.0))
            .unwrap()
            .solve();
        assert!(!engine.trajectory().is_empty());
        for point in engine.trajectory() {
            assert!(point.x() >= -1e-9 && point.y() >= -1e-9, "{}", point);
            for constraint in engine.problem().constraints() {
                assert!(constraint.slack(point) >= -1e-9, "{} violates {}", point, constraint);
            }
        }
    }

    #[test]
    fn same_seed_reproduces_the_run() {
        let run = |seed| {
            Engine::<ConstantEpsilon>::new(Problem::sample(), params(20, 300, 0.7).with_seed(seed))
                .unwrap()
                .solve()
        };
        let a = run(42);
        let b = run(42);
        assert_eq!(a.table(), b.table());
        assert_eq!(a.trajectory(), b.trajectory());
        assert_eq!(a.solution(), b.solution());
    }

    #[test]
    fn different_seeds_diverge() {
        let run = |seed| {
            Engine::<ConstantEpsilon>::new(Problem::sample(), params(5, 100, 1.0).with_seed(seed))
                .unwrap()
                .solve()
        };
        assert_ne!(run(1).trajectory(), run(2).trajectory());
    }

    #[test]
    fn annealing_changes_epsilon_per_episode() {
        let mut engine = Engine::<DecayingEpsilon>::new(Problem::sample(), params(3, 1, 1.0)).unwrap();
        assert_eq!(engine.epsilon(), 1.0);
        engine.run();
        assert!(engine.epsilon() < 1.0);
        let constant = Engine::<ConstantEpsilon>::new(Problem::sample(), params(3, 1, 1.0))
            .unwrap()
            .solve();
        assert_eq!(constant.epsilon(), 1.0);
    }
}
