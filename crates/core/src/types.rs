use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MazeError;

/// Validated side length of a square maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct MazeSize(usize);

impl MazeSize {
    /// Largest supported side length. Keeps `N²` comfortably inside `u32`.
    pub const MAX: usize = 256;

    /// The classic competition maze.
    pub const CLASSIC: MazeSize = MazeSize(16);

    pub fn new(side: usize) -> Result<Self, MazeError> {
        if side == 0 || side > Self::MAX {
            return Err(MazeError::InvalidSize { side, max: Self::MAX });
        }
        Ok(Self(side))
    }

    pub fn side(self) -> usize {
        self.0
    }

    pub fn cell_count(self) -> usize {
        self.0 * self.0
    }

    pub fn contains(self, cell: Cell) -> bool {
        cell.x < self.0 && cell.y < self.0
    }

    /// All cells in row-major order starting at the origin.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let side = self.0;
        (0..side).flat_map(move |y| (0..side).map(move |x| Cell { x, y }))
    }

    pub(crate) fn assert_contains(self, cell: Cell) {
        assert!(
            self.contains(cell),
            "cell ({}, {}) is outside the {}x{} maze",
            cell.x,
            cell.y,
            self.0,
            self.0
        );
    }
}

impl TryFrom<usize> for MazeSize {
    type Error = MazeError;

    fn try_from(side: usize) -> Result<Self, Self::Error> {
        Self::new(side)
    }
}

impl From<MazeSize> for usize {
    fn from(size: MazeSize) -> Self {
        size.0
    }
}

impl fmt::Display for MazeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// Grid cell. `x` grows to the east, `y` grows to the north.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { x: 0, y: 0 };

    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The adjacent cell in `heading`, or `None` when it would leave the maze.
    pub fn neighbor(self, heading: Heading, size: MazeSize) -> Option<Cell> {
        let next = match heading {
            Heading::North => Cell { x: self.x, y: self.y + 1 },
            Heading::East => Cell { x: self.x + 1, y: self.y },
            Heading::South => Cell { x: self.x, y: self.y.checked_sub(1)? },
            Heading::West => Cell { x: self.x.checked_sub(1)?, y: self.y },
        };
        size.contains(next).then_some(next)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    pub fn clockwise(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    pub fn counter_clockwise(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    pub fn opposite(self) -> Self {
        self.clockwise().clockwise()
    }

    pub fn glyph(self) -> char {
        match self {
            Heading::North => '^',
            Heading::East => '>',
            Heading::South => 'v',
            Heading::West => '<',
        }
    }
}

/// One discrete command issued to the mouse per simulated step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Movement {
    MoveForward,
    MoveBackward,
    TurnClockwise,
    TurnCounterClockwise,
    Wait,
    Finish,
}

impl Movement {
    /// Heading after executing this command from `heading`.
    pub fn apply_to(self, heading: Heading) -> Heading {
        match self {
            Movement::TurnClockwise => heading.clockwise(),
            Movement::TurnCounterClockwise => heading.counter_clockwise(),
            _ => heading,
        }
    }
}

/// Wall flags reported by the side and front sensors, relative to the current heading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SensorReading {
    pub front: bool,
    pub left: bool,
    pub right: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maze_size_rejects_zero_and_oversized_sides() {
        assert!(MazeSize::new(0).is_err());
        assert!(MazeSize::new(MazeSize::MAX + 1).is_err());
        assert_eq!(MazeSize::new(16).expect("valid size"), MazeSize::CLASSIC);
    }

    #[test]
    fn neighbor_stays_inside_the_grid() {
        let size = MazeSize::new(4).expect("valid size");
        assert_eq!(Cell::ORIGIN.neighbor(Heading::South, size), None);
        assert_eq!(Cell::ORIGIN.neighbor(Heading::West, size), None);
        assert_eq!(Cell::ORIGIN.neighbor(Heading::North, size), Some(Cell::new(0, 1)));
        assert_eq!(Cell::new(3, 3).neighbor(Heading::East, size), None);
        assert_eq!(Cell::new(3, 3).neighbor(Heading::North, size), None);
    }

    #[test]
    fn opposite_is_two_quarter_turns() {
        for heading in Heading::ALL {
            assert_eq!(heading.opposite().opposite(), heading);
            assert_eq!(heading.opposite(), heading.counter_clockwise().counter_clockwise());
        }
    }

    #[test]
    fn only_turns_change_heading() {
        assert_eq!(Movement::TurnClockwise.apply_to(Heading::West), Heading::North);
        assert_eq!(Movement::TurnCounterClockwise.apply_to(Heading::North), Heading::West);
        assert_eq!(Movement::MoveBackward.apply_to(Heading::East), Heading::East);
        assert_eq!(Movement::Wait.apply_to(Heading::South), Heading::South);
    }

    #[test]
    fn cells_iterates_every_cell_once() {
        let size = MazeSize::new(3).expect("valid size");
        let cells: Vec<Cell> = size.cells().collect();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], Cell::ORIGIN);
        assert_eq!(cells[8], Cell::new(2, 2));
    }
}
