//! Q-learning vs Simplex on a two-variable linear program.
//!
//! Runs the learning engine (optionally over several seeds), solves the same
//! program exactly, and prints the comparison.

use clap::Parser;
use qlp::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Exploration rate in [0, 1]
    #[arg(long, default_value_t = EPSILON)]
    epsilon: Probability,
    /// Learning rate in (0, 1]
    #[arg(long, default_value_t = ALPHA)]
    alpha: Value,
    /// Discount factor in [0, 1)
    #[arg(long, default_value_t = GAMMA)]
    gamma: Value,
    /// Grid resolution of every move
    #[arg(long, default_value_t = GRID_STEP)]
    step: Coordinate,
    #[arg(long, default_value_t = EPISODES)]
    episodes: usize,
    /// Steps per episode
    #[arg(long, default_value_t = STEPS_PER_EPISODE)]
    steps: usize,
    /// Decimal digits kept in state keys
    #[arg(long, default_value_t = PRECISION)]
    precision: u32,
    #[arg(long, default_value_t = SEED)]
    seed: u64,
    /// Independent runs on consecutive seeds; the best one is reported
    #[arg(long, default_value_t = 1)]
    seeds: usize,
    /// Objective coefficients `a,b` of `max a·x + b·y`
    #[arg(long, allow_hyphen_values = true)]
    objective: Option<String>,
    /// Constraint `a,b,rhs` meaning `a·x + b·y ≤ rhs` (repeatable)
    #[arg(long = "constraint", allow_hyphen_values = true)]
    constraints: Vec<String>,
    /// Decay epsilon per episode instead of holding it fixed
    #[arg(long)]
    anneal: bool,
    /// Print a JSON document instead of the table and plot
    #[arg(long)]
    json: bool,
    /// Skip the character plot
    #[arg(long)]
    no_plot: bool,
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn params(&self) -> Hyperparameters {
        Hyperparameters {
            epsilon: self.epsilon,
            alpha: self.alpha,
            gamma: self.gamma,
            step: self.step,
            episodes: self.episodes,
            steps: self.steps,
            precision: self.precision,
            seed: self.seed,
        }
    }
    fn problem(&self) -> anyhow::Result<Problem> {
        let sample = Problem::sample();
        let objective = match self.objective.as_deref() {
            None => sample.objective(),
            Some(text) => {
                let values = text
                    .split(',')
                    .map(str::trim)
                    .map(str::parse::<Value>)
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|e| anyhow::anyhow!("invalid objective {:?}: {}", text, e))?;
                match values.as_slice() {
                    [a, b] => [*a, *b],
                    _ => anyhow::bail!("invalid objective {:?}: expected a,b", text),
                }
            }
        };
        let constraints = match self.constraints.is_empty() {
            true => sample.constraints().to_vec(),
            false => self
                .constraints
                .iter()
                .map(|c| Constraint::try_from(c.as_str()))
                .collect::<anyhow::Result<Vec<_>>>()?,
        };
        Problem::from_parts(objective, constraints)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    qlp::log(args.verbose)?;
    let problem = args.problem()?;
    let params = args.params();
    params.validate()?;
    log::info!("problem\n{}", problem);
    let exact = Simplex::default().solve(&problem)?;
    log::info!("simplex optimum {}", exact);
    match args.anneal {
        true => report::<DecayingEpsilon>(&args, problem, params, exact),
        false => report::<ConstantEpsilon>(&args, problem, params, exact),
    }
}

fn report<A>(args: &Args, problem: Problem, params: Hyperparameters, exact: Optimum) -> anyhow::Result<()>
where
    A: Annealing,
{
    let runs = Sweep::consecutive(problem, params, args.seeds.max(1))?.run::<A>()?;
    let best = Sweep::best(&runs).unwrap_or(&runs[0]);
    if runs.len() > 1 {
        for engine in runs.iter() {
            match engine.solution() {
                Some(learned) => log::info!("seed {:>4} {}", engine.params().seed, learned),
                None => log::info!("seed {:>4} no accepted move", engine.params().seed),
            }
        }
        log::info!("reporting seed {}", best.params().seed);
    }
    let ref summary = Summary::of(best, exact);
    if args.json {
        return Json::pretty().emit(summary);
    }
    Table.emit(summary)?;
    if !args.no_plot {
        Canvas::default().emit(summary)?;
    }
    Ok(())
}
