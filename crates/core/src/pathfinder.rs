use crate::types::{Cell, Movement, SensorReading};

/// Wall sensors evaluated at the mouse's current cell, relative to its heading.
pub trait SensorView {
    fn wall_in_front(&self) -> bool;
    fn wall_on_left(&self) -> bool;
    fn wall_on_right(&self) -> bool;

    fn reading(&self) -> SensorReading {
        SensorReading {
            front: self.wall_in_front(),
            left: self.wall_on_left(),
            right: self.wall_on_right(),
        }
    }
}

impl SensorView for SensorReading {
    fn wall_in_front(&self) -> bool {
        self.front
    }

    fn wall_on_left(&self) -> bool {
        self.left
    }

    fn wall_on_right(&self) -> bool {
        self.right
    }
}

/// A navigation strategy driven one step at a time by the maze environment.
pub trait PathFinder {
    fn next_movement(&mut self, cell: Cell, view: &dyn SensorView) -> Movement;
}
