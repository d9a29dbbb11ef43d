//! Left-hand wall following, a map-free alternative to the floodfill robot.

use crate::goal::GoalRegion;
use crate::pathfinder::{PathFinder, SensorView};
use crate::types::{Cell, MazeSize, Movement, SensorReading};

#[derive(Clone, Debug)]
pub struct WallFollower {
    goal: GoalRegion,
    turned_left: bool,
    previous: Option<Cell>,
    visited_start: bool,
    finished: bool,
}

impl WallFollower {
    pub fn new(size: MazeSize) -> Self {
        Self {
            goal: GoalRegion::centered(size),
            turned_left: false,
            previous: None,
            visited_start: false,
            finished: false,
        }
    }

    pub fn step(&mut self, cell: Cell, reading: SensorReading) -> Movement {
        if self.finished {
            return Movement::Finish;
        }
        let arrived = self.previous != Some(cell);
        self.previous = Some(cell);

        if self.goal.contains(cell) {
            self.finished = true;
            return Movement::Finish;
        }
        if cell == Cell::ORIGIN && arrived {
            if self.visited_start {
                self.finished = true;
                return Movement::Finish;
            }
            self.visited_start = true;
        }

        // After turning toward an open left side, step through it before checking left again.
        let movement = if self.turned_left && !reading.front {
            Movement::MoveForward
        } else if !reading.left {
            Movement::TurnCounterClockwise
        } else if !reading.front {
            Movement::MoveForward
        } else {
            Movement::TurnClockwise
        };
        self.turned_left = movement == Movement::TurnCounterClockwise;
        movement
    }
}

impl PathFinder for WallFollower {
    fn next_movement(&mut self, cell: Cell, view: &dyn SensorView) -> Movement {
        self.step(cell, view.reading())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn follower() -> WallFollower {
        WallFollower::new(MazeSize::new(4).expect("valid size"))
    }

    #[test]
    fn open_left_side_is_taken_over_two_steps() {
        let mut mouse = follower();
        let cell = Cell::new(0, 1);
        let clear = SensorReading::default();
        assert_eq!(mouse.step(cell, clear), Movement::TurnCounterClockwise);
        assert_eq!(mouse.step(cell, clear), Movement::MoveForward);
    }

    #[test]
    fn dead_end_turns_around_clockwise() {
        let mut mouse = follower();
        let cell = Cell::new(0, 2);
        let boxed = SensorReading { front: true, left: true, right: true };
        assert_eq!(mouse.step(cell, boxed), Movement::TurnClockwise);
        assert_eq!(mouse.step(cell, boxed), Movement::TurnClockwise);
        let facing_exit = SensorReading { front: false, left: true, right: true };
        assert_eq!(mouse.step(cell, facing_exit), Movement::MoveForward);
    }

    #[test]
    fn stops_in_the_goal() {
        let mut mouse = follower();
        assert_eq!(mouse.step(Cell::new(2, 2), SensorReading::default()), Movement::Finish);
        assert_eq!(mouse.step(Cell::new(2, 1), SensorReading::default()), Movement::Finish);
    }
}
