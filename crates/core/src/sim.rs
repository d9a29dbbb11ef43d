//! Maze environment the strategies are driven through.
//! This module exists to stand in for the physical maze and the mouse's motors and sensors.
//! It does not own any navigation decisions.

mod maze;
mod simulator;

pub use maze::{Maze, MazeFile, WallSpec};
pub use simulator::{MouseView, RunOutcome, RunReport, Simulator};
