//! Move selection from the distance field.
//! This module exists so the per-step choice of command is a pure function of the mouse's belief.
//! It does not own wall bookkeeping, floodfill repair, or run termination state.

use crate::distance::DistanceField;
use crate::goal::GoalRegion;
use crate::types::{Cell, Heading, MazeSize, Movement, SensorReading};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Move(Movement),
    /// Every eligible neighbor is as far from the goal as the current cell or farther.
    NoImprovement,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigator {
    size: MazeSize,
    goal: GoalRegion,
}

impl Navigator {
    pub fn new(size: MazeSize) -> Self {
        Self { size, goal: GoalRegion::centered(size) }
    }

    pub fn goal(&self) -> &GoalRegion {
        &self.goal
    }

    pub fn is_goal(&self, cell: Cell) -> bool {
        self.goal.contains(cell)
    }

    /// Picks the first strictly-closer neighbor in the order front, right, left, back.
    ///
    /// Side and front candidates need a clear sensor reading. There is no sensor
    /// behind the mouse, so the rear is assumed traversable whenever it is in bounds.
    /// Turns only rotate in place; the advance happens on a later step.
    pub fn decide(
        &self,
        cell: Cell,
        heading: Heading,
        reading: SensorReading,
        field: &DistanceField,
    ) -> Decision {
        let here = field.distance(cell);
        let candidates = [
            (!reading.front, heading, Movement::MoveForward),
            (!reading.right, heading.clockwise(), Movement::TurnClockwise),
            (!reading.left, heading.counter_clockwise(), Movement::TurnCounterClockwise),
            (true, heading.opposite(), Movement::MoveBackward),
        ];

        candidates
            .into_iter()
            .filter(|(clear, _, _)| *clear)
            .find(|(_, toward, _)| {
                cell.neighbor(*toward, self.size).is_some_and(|next| field.distance(next) < here)
            })
            .map_or(Decision::NoImprovement, |(_, _, movement)| Decision::Move(movement))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAR: SensorReading = SensorReading { front: false, left: false, right: false };

    fn fixture(side: usize) -> (Navigator, DistanceField) {
        let size = MazeSize::new(side).expect("valid size");
        (Navigator::new(size), DistanceField::goal_centered(size))
    }

    #[test]
    fn forward_wins_when_it_improves() {
        let (navigator, field) = fixture(4);
        let decision = navigator.decide(Cell::ORIGIN, Heading::North, CLEAR, &field);
        assert_eq!(decision, Decision::Move(Movement::MoveForward));
    }

    #[test]
    fn right_beats_left_when_forward_does_not_improve() {
        let (navigator, field) = fixture(5);
        // (2, 1) has distance 1; north is the goal, so face west with the goal on the right.
        let decision = navigator.decide(Cell::new(2, 1), Heading::West, CLEAR, &field);
        assert_eq!(decision, Decision::Move(Movement::TurnClockwise));
    }

    #[test]
    fn left_is_used_when_right_is_walled() {
        let (navigator, field) = fixture(5);
        let reading = SensorReading { right: true, ..CLEAR };
        let decision = navigator.decide(Cell::new(2, 1), Heading::East, reading, &field);
        assert_eq!(decision, Decision::Move(Movement::TurnCounterClockwise));
    }

    #[test]
    fn reverses_when_only_the_rear_improves() {
        let (navigator, field) = fixture(5);
        // Boxed in on three sensed sides; the goal at (2, 2) lies behind.
        let reading = SensorReading { front: true, left: true, right: true };
        let decision = navigator.decide(Cell::new(2, 1), Heading::South, reading, &field);
        assert_eq!(decision, Decision::Move(Movement::MoveBackward));
    }

    #[test]
    fn rear_off_the_grid_is_not_a_candidate() {
        let (navigator, mut field) = fixture(4);
        // Facing north from the origin the rear leads off the grid; nothing else improves.
        field.set(Cell::new(0, 1), 5);
        field.set(Cell::new(1, 0), 5);
        let decision = navigator.decide(Cell::ORIGIN, Heading::North, CLEAR, &field);
        assert_eq!(decision, Decision::NoImprovement);
    }

    #[test]
    fn ties_do_not_count_as_improvement() {
        let (navigator, field) = fixture(4);
        // (0, 1) faces north to (0, 2), an equal distance; east is walled.
        let reading = SensorReading { right: true, ..CLEAR };
        let decision = navigator.decide(Cell::new(0, 1), Heading::North, reading, &field);
        assert_eq!(decision, Decision::NoImprovement);
    }

    #[test]
    fn candidates_off_the_grid_are_ignored() {
        let (navigator, field) = fixture(4);
        // Facing south from the origin, front and right both lead off the grid.
        let decision = navigator.decide(Cell::ORIGIN, Heading::South, CLEAR, &field);
        assert_eq!(decision, Decision::Move(Movement::TurnCounterClockwise));
    }
}
