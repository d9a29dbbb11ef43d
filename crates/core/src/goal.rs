use crate::types::{Cell, MazeSize};

/// The one (odd side) or four (even side) cells nearest the maze center.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GoalRegion {
    low: usize,
    high: usize,
}

impl GoalRegion {
    pub fn centered(size: MazeSize) -> Self {
        let side = size.side();
        let mid = side / 2;
        if side % 2 != 0 { Self { low: mid, high: mid } } else { Self { low: mid - 1, high: mid } }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (self.low..=self.high).contains(&cell.x) && (self.low..=self.high).contains(&cell.y)
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (self.low..=self.high).flat_map(move |y| (self.low..=self.high).map(move |x| Cell { x, y }))
    }
}
