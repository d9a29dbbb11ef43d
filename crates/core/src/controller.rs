//! Per-step orchestration of sensing, termination checks, and floodfill navigation.
//! This module exists to own the mouse's belief state for the whole run.
//! It does not own the maze ground truth or how commands are executed.

use log::{debug, info};

use crate::distance::DistanceField;
use crate::navigator::{Decision, Navigator};
use crate::pathfinder::{PathFinder, SensorView};
use crate::types::{Cell, Heading, MazeSize, Movement, SensorReading};
use crate::walls::WallKnowledge;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureReason {
    /// The mouse arrived back at the start cell without finding the goal.
    StartRevisited,
    /// Known walls cut the current cell off from the goal.
    Sealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerState {
    Exploring,
    FinishedSuccess,
    FinishedFailure(FailureReason),
}

impl ControllerState {
    pub fn is_finished(self) -> bool {
        self != ControllerState::Exploring
    }
}

/// Floodfill robot: owns what it has learned about the maze and turns each sensor
/// reading into one [`Movement`].
#[derive(Clone, Debug)]
pub struct RobotController {
    heading: Heading,
    visited_start: bool,
    previous: Option<Cell>,
    state: ControllerState,
    walls: WallKnowledge,
    field: DistanceField,
    navigator: Navigator,
}

impl RobotController {
    pub fn new(size: MazeSize) -> Self {
        Self {
            heading: Heading::North,
            visited_start: false,
            previous: None,
            state: ControllerState::Exploring,
            walls: WallKnowledge::new(size),
            field: DistanceField::goal_centered(size),
            navigator: Navigator::new(size),
        }
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn walls(&self) -> &WallKnowledge {
        &self.walls
    }

    pub fn field(&self) -> &DistanceField {
        &self.field
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn step(&mut self, cell: Cell, reading: SensorReading) -> Movement {
        if self.state.is_finished() {
            return Movement::Finish;
        }

        let learned = self.walls.record_sensed_walls(cell, self.heading, reading);
        // Turning in place re-queries the same cell; only arrivals count as visits.
        let arrived = self.previous != Some(cell);
        self.previous = Some(cell);
        debug!(
            "at {cell} facing {:?}: distance {}, {learned} new walls",
            self.heading,
            self.field.distance(cell)
        );

        if self.navigator.is_goal(cell) {
            return self.finish(cell, ControllerState::FinishedSuccess);
        }

        if cell == Cell::ORIGIN && arrived {
            if self.visited_start {
                return self.finish(
                    cell,
                    ControllerState::FinishedFailure(FailureReason::StartRevisited),
                );
            }
            self.visited_start = true;
        }

        let movement = match self.decide(cell, reading) {
            Decision::Move(movement) => movement,
            Decision::NoImprovement => {
                self.field.repair(cell, &self.walls, self.navigator.goal());
                match self.decide(cell, reading) {
                    Decision::Move(movement) => movement,
                    Decision::NoImprovement if self.field.is_unreachable(cell) => {
                        return self.finish(
                            cell,
                            ControllerState::FinishedFailure(FailureReason::Sealed),
                        );
                    }
                    Decision::NoImprovement => Movement::Wait,
                }
            }
        };

        self.heading = movement.apply_to(self.heading);
        movement
    }

    fn decide(&self, cell: Cell, reading: SensorReading) -> Decision {
        self.navigator.decide(cell, self.heading, reading, &self.field)
    }

    fn finish(&mut self, cell: Cell, state: ControllerState) -> Movement {
        info!("finished at {cell}: {state:?}");
        self.state = state;
        Movement::Finish
    }
}

impl PathFinder for RobotController {
    fn next_movement(&mut self, cell: Cell, view: &dyn SensorView) -> Movement {
        self.step(cell, view.reading())
    }
}
