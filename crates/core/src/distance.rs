//! Distance-to-goal estimates and the floodfill repair that keeps them consistent.
//! This module exists so the descent invariant is maintained in one place as walls are discovered.
//! It does not own sensing or move selection.

use log::{debug, trace};

use crate::goal::GoalRegion;
use crate::types::{Cell, Heading, MazeSize};
use crate::walls::WallKnowledge;

/// Lowest distance among the neighbors reachable through known-open segments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeighborFloor {
    /// Minimum neighbor distance, or `distance + 2` when nothing is traversable.
    pub floor: u32,
    traversable: [Option<Cell>; 4],
}

impl NeighborFloor {
    pub fn traversable(&self) -> impl Iterator<Item = Cell> + '_ {
        self.traversable.iter().flatten().copied()
    }

    pub fn has_traversable(&self) -> bool {
        self.traversable.iter().any(Option::is_some)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RepairStats {
    /// Cells whose distance was raised.
    pub raised: usize,
    /// Raised cells that hit the unreachable ceiling.
    pub sealed: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceField {
    size: MazeSize,
    distances: Vec<u32>,
}

impl DistanceField {
    /// Manhattan distance to the center region, filled one quadrant at a time and mirrored.
    pub fn goal_centered(size: MazeSize) -> Self {
        let n = size.side();
        let last = n - 1;
        let mid = last / 2;
        let mut field = Self { size, distances: vec![0; n * n] };
        for x in 0..=mid {
            for y in 0..=mid {
                let d = (mid.abs_diff(x) + mid.abs_diff(y)) as u32;
                field.set(Cell { x, y }, d);
                field.set(Cell { x, y: last - y }, d);
                field.set(Cell { x: last - x, y }, d);
                field.set(Cell { x: last - x, y: last - y }, d);
            }
        }
        field
    }

    pub fn size(&self) -> MazeSize {
        self.size
    }

    pub fn distance(&self, cell: Cell) -> u32 {
        self.distances[self.index(cell)]
    }

    pub fn set(&mut self, cell: Cell, distance: u32) {
        let idx = self.index(cell);
        self.distances[idx] = distance;
    }

    /// Value at which a cell is considered cut off from the goal. No cell that can
    /// still reach the goal through open segments ever climbs this high.
    pub fn ceiling(&self) -> u32 {
        self.size.cell_count() as u32
    }

    pub fn is_unreachable(&self, cell: Cell) -> bool {
        self.distance(cell) >= self.ceiling()
    }

    pub fn neighbor_floor(&self, cell: Cell, walls: &WallKnowledge) -> NeighborFloor {
        let mut floor = self.distance(cell).saturating_add(2);
        let mut traversable = [None; 4];
        for (slot, heading) in traversable.iter_mut().zip(Heading::ALL) {
            if !walls.is_open(cell, heading) {
                continue;
            }
            let Some(next) = cell.neighbor(heading, self.size) else {
                continue;
            };
            *slot = Some(next);
            floor = floor.min(self.distance(next));
        }
        NeighborFloor { floor, traversable }
    }

    /// True when some traversable neighbor is strictly closer to the goal.
    pub fn is_settled(&self, cell: Cell, walls: &WallKnowledge) -> bool {
        let own = self.distance(cell);
        Heading::ALL.into_iter().any(|heading| {
            walls.is_open(cell, heading)
                && cell.neighbor(heading, self.size).is_some_and(|next| self.distance(next) < own)
        })
    }

    /// Restores the descent invariant outward from `cell` after new walls were learned.
    ///
    /// `cell` itself is always re-derived from its best open neighbor. Every neighbor
    /// left unsettled by that change is raised the same way and its own neighbors are
    /// queued for re-checking. Goal cells are fixed points, and a cell that reaches
    /// [`ceiling`](Self::ceiling) is left there, which bounds the work.
    pub fn repair(&mut self, cell: Cell, walls: &WallKnowledge, goal: &GoalRegion) -> RepairStats {
        let mut stats = RepairStats::default();
        if goal.contains(cell) {
            return stats;
        }

        let mut pending: Vec<Cell> =
            self.relax(cell, walls, &mut stats).into_iter().flatten().collect();
        while let Some(current) = pending.pop() {
            if goal.contains(current)
                || self.is_unreachable(current)
                || self.is_settled(current, walls)
            {
                continue;
            }
            pending.extend(self.relax(current, walls, &mut stats).into_iter().flatten());
        }

        debug!("repair from {cell} raised {} cells ({} sealed)", stats.raised, stats.sealed);
        stats
    }

    /// Sets `cell` to one more than its best open neighbor and returns those neighbors.
    fn relax(
        &mut self,
        cell: Cell,
        walls: &WallKnowledge,
        stats: &mut RepairStats,
    ) -> [Option<Cell>; 4] {
        let ceiling = self.ceiling();
        let neighbors = self.neighbor_floor(cell, walls);
        let raised = neighbors.floor.saturating_add(1).min(ceiling);
        trace!("repair {cell}: {} -> {raised}", self.distance(cell));
        self.set(cell, raised);
        stats.raised += 1;
        if raised == ceiling {
            stats.sealed += 1;
        }
        neighbors.traversable
    }

    fn index(&self, cell: Cell) -> usize {
        self.size.assert_contains(cell);
        cell.y * self.size.side() + cell.x
    }
}
