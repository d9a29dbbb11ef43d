use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use micromouse::{Maze, MazeSize, PathFinder, RobotController, WallFollower};
use serde::{Deserialize, Serialize};

/// Which pathfinding strategy drives the mouse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    #[default]
    Floodfill,
    WallFollower,
}

impl Strategy {
    pub fn pathfinder(self, size: MazeSize) -> Box<dyn PathFinder> {
        match self {
            Strategy::Floodfill => Box::new(RobotController::new(size)),
            Strategy::WallFollower => Box::new(WallFollower::new(size)),
        }
    }
}

/// TOML schema for a simulator run.
///
/// Every key is optional; missing keys take the defaults below. Command-line
/// flags are applied on top of whatever the file sets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Side length of a generated maze. Ignored when `maze` names a file.
    pub size: usize,
    pub seed: u64,
    pub strategy: Strategy,
    pub max_steps: u32,
    /// Wait for enter between steps.
    pub pause: bool,
    /// Print the maze and the mouse's knowledge after every step.
    pub render: bool,
    /// JSON maze file to run instead of a generated maze.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maze: Option<PathBuf>,
    /// Where to write the run trace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            size: MazeSize::CLASSIC.side(),
            seed: 42,
            strategy: Strategy::Floodfill,
            max_steps: 10_000,
            pause: false,
            render: false,
            maze: None,
            trace: None,
        }
    }
}

impl SimConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads `path` when given, otherwise starts from the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// The configured maze file, or a maze generated from `size` and `seed`.
    pub fn build_maze(&self) -> Result<Maze> {
        if let Some(path) = &self.maze {
            return Maze::load(path)
                .with_context(|| format!("Failed to load maze file: {}", path.display()));
        }
        let size = MazeSize::new(self.size).context("Invalid maze size in config")?;
        Ok(Maze::generate(size, self.seed))
    }

    /// Seed to tag traces with; file mazes are not generated from one.
    pub fn trace_seed(&self) -> Option<u64> {
        self.maze.is_none().then_some(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use micromouse::{Cell, Heading};
    use tempfile::tempdir;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: SimConfig = toml::from_str("seed = 7\nstrategy = \"wall-follower\"\n")
            .expect("parse config");
        assert_eq!(config.seed, 7);
        assert_eq!(config.strategy, Strategy::WallFollower);
        assert_eq!(config.size, 16);
        assert_eq!(config.max_steps, 10_000);
        assert!(!config.pause);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let parsed: Result<SimConfig, _> = toml::from_str("speed = 3\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn config_file_is_loaded_from_disk() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("run.toml");
        fs::write(&path, "size = 8\nrender = true\ntrace = \"out/trace.json\"\n")
            .expect("write config");

        let config = SimConfig::load_or_default(Some(&path)).expect("load");
        assert_eq!(config.size, 8);
        assert!(config.render);
        assert_eq!(config.trace, Some(PathBuf::from("out/trace.json")));
        assert_eq!(config.trace_seed(), Some(42));
    }

    #[test]
    fn missing_config_file_names_the_path() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("absent.toml");
        let err = SimConfig::load(&path).expect_err("missing file");
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn maze_file_takes_precedence_over_generation() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("maze.json");
        let mut maze = Maze::open(MazeSize::new(3).expect("valid size"));
        maze.add_wall(Cell::new(1, 1), Heading::North);
        fs::write(&path, maze.to_json().expect("serialize maze")).expect("write maze");

        let config = SimConfig { maze: Some(path), size: 12, ..SimConfig::default() };
        let loaded = config.build_maze().expect("build maze");
        assert_eq!(loaded, maze);
        assert_eq!(config.trace_seed(), None);
    }

    #[test]
    fn zero_size_is_an_error() {
        let config = SimConfig { size: 0, ..SimConfig::default() };
        assert!(config.build_maze().is_err());
    }
}
