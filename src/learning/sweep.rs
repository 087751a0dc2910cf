use crate::*;

/// Independent runs of the same problem, one per seed.
///
/// Every run owns its own table, so runs never share mutable state. With the
/// `parallel` feature they execute on the rayon pool; the result order always
/// follows the seed order.
#[derive(Debug, Clone)]
pub struct Sweep {
    problem: Problem,
    params: Hyperparameters,
    seeds: Vec<u64>,
}

impl Sweep {
    pub fn new(problem: Problem, params: Hyperparameters, seeds: Vec<u64>) -> anyhow::Result<Self> {
        params.validate()?;
        anyhow::ensure!(!seeds.is_empty(), "sweep needs at least one seed");
        Ok(Self {
            problem,
            params,
            seeds,
        })
    }
    /// `count` consecutive seeds starting at the configured one.
    pub fn consecutive(problem: Problem, params: Hyperparameters, count: usize) -> anyhow::Result<Self> {
        let seeds = (0..count as u64)
            .map(|i| params.seed.wrapping_add(i))
            .collect();
        Self::new(problem, params, seeds)
    }
    pub fn seeds(&self) -> &[u64] {
        &self.seeds
    }

    #[cfg(feature = "parallel")]
    pub fn run<A>(&self) -> anyhow::Result<Vec<Engine<A>>>
    where
        A: Annealing,
    {
        use rayon::prelude::*;
        log::info!("sweeping {} seeds in parallel", self.seeds.len());
        self.seeds
            .par_iter()
            .map(|&seed| self.once::<A>(seed))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    pub fn run<A>(&self) -> anyhow::Result<Vec<Engine<A>>>
    where
        A: Annealing,
    {
        log::info!("sweeping {} seeds", self.seeds.len());
        self.seeds
            .iter()
            .map(|&seed| self.once::<A>(seed))
            .collect()
    }

    fn once<A>(&self, seed: u64) -> anyhow::Result<Engine<A>>
    where
        A: Annealing,
    {
        Engine::<A>::new(self.problem.clone(), self.params.with_seed(seed)).map(Engine::solve)
    }

    /// Run with the highest estimate; the earliest seed wins ties. Runs that
    /// never accepted a move are skipped.
    pub fn best<A>(runs: &[Engine<A>]) -> Option<&Engine<A>>
    where
        A: Annealing,
    {
        let mut best: Option<(&Engine<A>, Value)> = None;
        for engine in runs.iter() {
            let Some(learned) = engine.solution() else {
                continue;
            };
            match best {
                Some((_, max)) if learned.estimate() <= max => continue,
                _ => best = Some((engine, learned.estimate())),
            }
        }
        best.map(|(engine, _)| engine)
    }
}
