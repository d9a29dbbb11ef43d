//! Ground-truth maze walls plus generation and file loading.

use std::collections::{BTreeSet, VecDeque};
use std::fs;
use std::path::Path;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::MazeError;
use crate::types::{Cell, Heading, MazeSize};
use crate::walls::WallGrid;

/// One interior wall segment as stored in a maze file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallSpec {
    pub x: usize,
    pub y: usize,
    pub side: Heading,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeFile {
    pub size: MazeSize,
    pub walls: Vec<WallSpec>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    walls: WallGrid,
}

impl Maze {
    /// Only the outer boundary is walled.
    pub fn open(size: MazeSize) -> Self {
        Self { walls: WallGrid::bounded(size) }
    }

    /// Every segment is walled.
    pub fn enclosed(size: MazeSize) -> Self {
        let mut maze = Self::open(size);
        for cell in size.cells() {
            maze.walls.set_wall(cell, Heading::North, true);
            maze.walls.set_wall(cell, Heading::East, true);
        }
        maze
    }

    /// A perfect maze carved by a seeded depth-first walk from the origin.
    pub fn generate(size: MazeSize, seed: u64) -> Self {
        let mut maze = Self::enclosed(size);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut visited = BTreeSet::from([Cell::ORIGIN]);
        let mut stack = vec![Cell::ORIGIN];

        while let Some(&current) = stack.last() {
            let options: Vec<(Heading, Cell)> = Heading::ALL
                .into_iter()
                .filter_map(|heading| current.neighbor(heading, size).map(|next| (heading, next)))
                .filter(|(_, next)| !visited.contains(next))
                .collect();
            if options.is_empty() {
                stack.pop();
                continue;
            }
            let (heading, next) = options[rng.next_u64() as usize % options.len()];
            maze.remove_wall(current, heading);
            visited.insert(next);
            stack.push(next);
        }
        maze
    }

    pub fn from_file(file: &MazeFile) -> Result<Self, MazeError> {
        let mut maze = Self::open(file.size);
        for wall in &file.walls {
            maze.try_add_wall(Cell::new(wall.x, wall.y), wall.side)?;
        }
        Ok(maze)
    }

    pub fn to_file(&self) -> MazeFile {
        let size = self.size();
        let walls = size
            .cells()
            .flat_map(|cell| [Heading::North, Heading::East].map(|side| (cell, side)))
            .filter(|(cell, side)| {
                self.has_wall(*cell, *side) && !self.walls.is_boundary(*cell, *side)
            })
            .map(|(cell, side)| WallSpec { x: cell.x, y: cell.y, side })
            .collect();
        MazeFile { size, walls }
    }

    pub fn from_json(json: &str) -> Result<Self, MazeError> {
        let file: MazeFile = serde_json::from_str(json)?;
        Self::from_file(&file)
    }

    pub fn to_json(&self) -> Result<String, MazeError> {
        Ok(serde_json::to_string_pretty(&self.to_file())?)
    }

    pub fn load(path: &Path) -> Result<Self, MazeError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn size(&self) -> MazeSize {
        self.walls.size()
    }

    pub fn has_wall(&self, cell: Cell, heading: Heading) -> bool {
        self.walls.is_wall(cell, heading)
    }

    pub fn add_wall(&mut self, cell: Cell, heading: Heading) {
        self.walls.set_wall(cell, heading, true);
    }

    pub fn try_add_wall(&mut self, cell: Cell, heading: Heading) -> Result<(), MazeError> {
        if !self.size().contains(cell) {
            return Err(MazeError::WallOutOfBounds { cell, heading, side: self.size().side() });
        }
        self.add_wall(cell, heading);
        Ok(())
    }

    /// Boundary segments cannot be removed; returns whether a wall was taken down.
    pub fn remove_wall(&mut self, cell: Cell, heading: Heading) -> bool {
        if self.walls.is_boundary(cell, heading) {
            return false;
        }
        self.walls.set_wall(cell, heading, false)
    }

    pub fn reachable_cells(&self, start: Cell) -> BTreeSet<Cell> {
        let size = self.size();
        let mut visited = BTreeSet::from([start]);
        let mut queue = VecDeque::from([start]);

        while let Some(current) = queue.pop_front() {
            for heading in Heading::ALL {
                if self.has_wall(current, heading) {
                    continue;
                }
                if let Some(next) = current.neighbor(heading, size)
                    && visited.insert(next)
                {
                    queue.push_back(next);
                }
            }
        }

        visited
    }
}
