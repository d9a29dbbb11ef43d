use std::collections::BTreeMap;

use anyhow::{Result, bail};
use clap::Parser;
use log::warn;
use micromouse::{Maze, MazeSize, RunOutcome, Simulator};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tools::Strategy;

#[derive(Parser)]
#[command(author, version, about = "Run a strategy across many generated mazes", long_about = None)]
struct Args {
    /// Seed for the sequence of maze seeds
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Mazes to generate per size
    #[arg(short, long, default_value_t = 100)]
    runs: u32,
    #[arg(long, value_delimiter = ',', default_values_t = [4, 8, 16])]
    sizes: Vec<usize>,
    #[arg(long, value_enum, default_value_t = Strategy::Floodfill)]
    strategy: Strategy,
    #[arg(long, default_value_t = 100_000)]
    max_steps: u32,
}

fn outcome_label(outcome: RunOutcome) -> &'static str {
    match outcome {
        RunOutcome::ReachedGoal { .. } => "reached goal",
        RunOutcome::GaveUp { .. } => "gave up",
        RunOutcome::Crashed { .. } => "crashed",
        RunOutcome::BudgetExhausted => "budget exhausted",
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!(
        "Sweeping {:?} over sizes {:?}, {} mazes each, seed {}...",
        args.strategy, args.sizes, args.runs, args.seed
    );
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut stalled = Vec::new();

    for &side in &args.sizes {
        let size = MazeSize::new(side)?;
        let mut counts: BTreeMap<&'static str, u32> = BTreeMap::new();
        let mut total_steps = 0_u64;

        for _ in 0..args.runs {
            let maze_seed = rng.next_u64();
            let mut finder = args.strategy.pathfinder(size);
            let report = Simulator::new(Maze::generate(size, maze_seed))
                .with_seed(maze_seed)
                .run(finder.as_mut(), args.max_steps);

            total_steps += u64::from(report.steps);
            *counts.entry(outcome_label(report.outcome)).or_default() += 1;
            match report.outcome {
                RunOutcome::BudgetExhausted => stalled.push((side, maze_seed)),
                RunOutcome::Crashed { cell, heading, movement } => {
                    warn!("{side}x{side} seed {maze_seed}: {movement:?} into a wall at {cell} facing {heading:?}");
                }
                RunOutcome::ReachedGoal { .. } | RunOutcome::GaveUp { .. } => {}
            }
        }

        let average = total_steps / u64::from(args.runs.max(1));
        println!("{side}x{side}: {counts:?}, {average} steps on average");
    }

    if !stalled.is_empty() {
        bail!("Invariant failed: runs exhausted the step budget: {stalled:?}");
    }
    println!("Sweep completed successfully.");
    Ok(())
}
