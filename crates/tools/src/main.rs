use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use micromouse::{RobotController, RunTrace, Simulator, WallFollower, render};
use tools::{SimConfig, Strategy};

#[derive(Parser)]
#[command(author, version, about = "Run a micromouse strategy through a simulated maze", long_about = None)]
struct Args {
    /// TOML run configuration; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Side length of the generated maze
    #[arg(long)]
    size: Option<usize>,
    #[arg(short, long)]
    seed: Option<u64>,
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,
    #[arg(long)]
    max_steps: Option<u32>,
    /// JSON maze file to run instead of a generated maze
    #[arg(short, long)]
    maze: Option<PathBuf>,
    /// Write the run trace to this path
    #[arg(short, long)]
    trace: Option<PathBuf>,
    /// Print the maze after every step
    #[arg(long)]
    render: bool,
    /// Wait for enter between steps
    #[arg(long)]
    pause: bool,
}

impl Args {
    fn apply(self, config: &mut SimConfig) {
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(max_steps) = self.max_steps {
            config.max_steps = max_steps;
        }
        if self.maze.is_some() {
            config.maze = self.maze;
        }
        if self.trace.is_some() {
            config.trace = self.trace;
        }
        config.render |= self.render;
        config.pause |= self.pause;
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = SimConfig::load_or_default(args.config.as_deref())?;
    args.apply(&mut config);

    let maze = config.build_maze()?;
    let size = maze.size();
    let mut sim = Simulator::new(maze);
    if let Some(seed) = config.trace_seed() {
        sim = sim.with_seed(seed);
    }
    info!("running {:?} on a {size} maze", config.strategy);

    let report = match config.strategy {
        Strategy::Floodfill => {
            let mut robot = RobotController::new(size);
            let show = |robot: &RobotController| {
                Some(render::knowledge(robot.walls(), robot.field(), None))
            };
            sim.run_with(&mut robot, config.max_steps, observer(&config, show))
        }
        Strategy::WallFollower => {
            let mut mouse = WallFollower::new(size);
            sim.run_with(&mut mouse, config.max_steps, observer(&config, |_: &WallFollower| None))
        }
    };

    println!("Run complete.");
    println!("Steps: {}", report.steps);
    println!("Outcome: {:?}", report.outcome);
    println!("Trace Hash: {:016x}", report.trace.stable_hash());

    if let Some(path) = &config.trace {
        write_trace(&report.trace, path)?;
        println!("Trace written to {}", path.display());
    }
    Ok(())
}

/// Per-step hook that draws the maze and, when the strategy keeps one, its map.
/// Stops pausing if stdin can no longer be read.
fn observer<'a, F: 'a>(
    config: &'a SimConfig,
    knowledge: impl Fn(&F) -> Option<String> + 'a,
) -> impl FnMut(&Simulator, &F) + 'a {
    let mut pause = config.pause;
    move |sim: &Simulator, finder: &F| {
        if config.render {
            println!("step {}", sim.steps());
            println!("{}", render::maze(sim.maze(), Some((sim.cell(), sim.heading()))));
            if let Some(drawing) = knowledge(finder) {
                println!("{drawing}");
            }
        }
        if pause && let Err(err) = wait_for_enter() {
            warn!("no longer pausing: {err:#}");
            pause = false;
        }
    }
}

fn wait_for_enter() -> Result<()> {
    print!("Hit enter to continue...");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).context("Failed to read from stdin")?;
    Ok(())
}

fn write_trace(trace: &RunTrace, path: &Path) -> Result<()> {
    trace
        .write_atomic(path)
        .with_context(|| format!("Failed to write trace file: {}", path.display()))
}
