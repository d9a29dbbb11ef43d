//! Wall segment storage and the mouse's incrementally sensed wall knowledge.
//! This module exists so both the ground-truth maze and the mouse's belief share one segment layout.
//! It does not own distance estimates or movement policy.

use crate::types::{Cell, Heading, MazeSize, SensorReading};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Segment {
    /// Index into the `(N+1) x N` grid of segments west of column `x`.
    Vertical(usize),
    /// Index into the `N x (N+1)` grid of segments south of row `y`.
    Horizontal(usize),
}

/// Vertical and horizontal segment grids with the outer boundary closed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct WallGrid {
    size: MazeSize,
    vertical: Vec<bool>,
    horizontal: Vec<bool>,
}

impl WallGrid {
    pub(crate) fn bounded(size: MazeSize) -> Self {
        let n = size.side();
        let mut vertical = vec![false; (n + 1) * n];
        let mut horizontal = vec![false; n * (n + 1)];
        for i in 0..n {
            vertical[i] = true;
            vertical[n * n + i] = true;
            horizontal[i * (n + 1)] = true;
            horizontal[i * (n + 1) + n] = true;
        }
        Self { size, vertical, horizontal }
    }

    pub(crate) fn size(&self) -> MazeSize {
        self.size
    }

    pub(crate) fn is_wall(&self, cell: Cell, heading: Heading) -> bool {
        match self.segment(cell, heading) {
            Segment::Vertical(idx) => self.vertical[idx],
            Segment::Horizontal(idx) => self.horizontal[idx],
        }
    }

    /// Returns whether the stored value changed.
    pub(crate) fn set_wall(&mut self, cell: Cell, heading: Heading, wall: bool) -> bool {
        let slot = match self.segment(cell, heading) {
            Segment::Vertical(idx) => &mut self.vertical[idx],
            Segment::Horizontal(idx) => &mut self.horizontal[idx],
        };
        let changed = *slot != wall;
        *slot = wall;
        changed
    }

    pub(crate) fn is_boundary(&self, cell: Cell, heading: Heading) -> bool {
        cell.neighbor(heading, self.size).is_none()
    }

    pub(crate) fn wall_count(&self) -> usize {
        self.vertical.iter().chain(&self.horizontal).filter(|wall| **wall).count()
    }

    fn segment(&self, cell: Cell, heading: Heading) -> Segment {
        self.size.assert_contains(cell);
        let n = self.size.side();
        match heading {
            Heading::West => Segment::Vertical(cell.x * n + cell.y),
            Heading::East => Segment::Vertical((cell.x + 1) * n + cell.y),
            Heading::South => Segment::Horizontal(cell.x * (n + 1) + cell.y),
            Heading::North => Segment::Horizontal(cell.x * (n + 1) + cell.y + 1),
        }
    }
}

/// Which wall segments the mouse has seen so far.
///
/// Boundary segments are known from the start. Interior segments begin open and
/// only ever flip to walls as sensors report them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallKnowledge {
    grid: WallGrid,
}

impl WallKnowledge {
    pub fn new(size: MazeSize) -> Self {
        Self { grid: WallGrid::bounded(size) }
    }

    pub fn size(&self) -> MazeSize {
        self.grid.size()
    }

    /// Records the walls reported relative to `heading` while standing in `cell`.
    /// Returns how many segments were newly learned.
    pub fn record_sensed_walls(
        &mut self,
        cell: Cell,
        heading: Heading,
        reading: SensorReading,
    ) -> usize {
        let sensed = [
            (reading.front, heading),
            (reading.left, heading.counter_clockwise()),
            (reading.right, heading.clockwise()),
        ];
        sensed
            .into_iter()
            .filter(|(wall, _)| *wall)
            .filter(|(_, absolute)| self.add_wall(cell, *absolute))
            .count()
    }

    /// Marks the segment on the `heading` side of `cell` as a wall.
    /// Returns `false` when it was already known.
    pub fn add_wall(&mut self, cell: Cell, heading: Heading) -> bool {
        self.grid.set_wall(cell, heading, true)
    }

    /// Unknown segments count as open.
    pub fn is_open(&self, cell: Cell, heading: Heading) -> bool {
        !self.grid.is_wall(cell, heading)
    }

    pub fn is_wall(&self, cell: Cell, heading: Heading) -> bool {
        self.grid.is_wall(cell, heading)
    }

    pub fn known_wall_count(&self) -> usize {
        self.grid.wall_count()
    }
}
