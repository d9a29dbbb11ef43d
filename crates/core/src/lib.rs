pub mod controller;
pub mod distance;
pub mod error;
pub mod goal;
pub mod navigator;
pub mod pathfinder;
pub mod render;
pub mod sim;
pub mod trace;
pub mod types;
pub mod wall_follower;
pub mod walls;

pub use controller::{ControllerState, FailureReason, RobotController};
pub use distance::{DistanceField, NeighborFloor, RepairStats};
pub use error::MazeError;
pub use goal::GoalRegion;
pub use navigator::{Decision, Navigator};
pub use pathfinder::{PathFinder, SensorView};
pub use sim::{Maze, RunOutcome, RunReport, Simulator};
pub use trace::{RunTrace, TraceStep};
pub use types::*;
pub use wall_follower::WallFollower;
pub use walls::WallKnowledge;
