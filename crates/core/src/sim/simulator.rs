//! Step-driven execution of a [`PathFinder`] against a ground-truth maze.

use log::{info, warn};

use super::maze::Maze;
use crate::goal::GoalRegion;
use crate::pathfinder::{PathFinder, SensorView};
use crate::trace::RunTrace;
use crate::types::{Cell, Heading, Movement};

/// Sensor answers for a mouse standing in `cell` facing `heading`.
#[derive(Clone, Copy, Debug)]
pub struct MouseView<'a> {
    maze: &'a Maze,
    cell: Cell,
    heading: Heading,
}

impl<'a> MouseView<'a> {
    pub fn new(maze: &'a Maze, cell: Cell, heading: Heading) -> Self {
        Self { maze, cell, heading }
    }
}

impl SensorView for MouseView<'_> {
    fn wall_in_front(&self) -> bool {
        self.maze.has_wall(self.cell, self.heading)
    }

    fn wall_on_left(&self) -> bool {
        self.maze.has_wall(self.cell, self.heading.counter_clockwise())
    }

    fn wall_on_right(&self) -> bool {
        self.maze.has_wall(self.cell, self.heading.clockwise())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    ReachedGoal { cell: Cell },
    /// The strategy finished outside the goal region.
    GaveUp { cell: Cell },
    /// The strategy drove the mouse into a wall.
    Crashed { cell: Cell, heading: Heading, movement: Movement },
    BudgetExhausted,
}

#[derive(Clone, Debug)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub steps: u32,
    pub trace: RunTrace,
}

pub struct Simulator {
    maze: Maze,
    goal: GoalRegion,
    cell: Cell,
    heading: Heading,
    steps: u32,
    outcome: Option<RunOutcome>,
    trace: RunTrace,
}

impl Simulator {
    /// Places the mouse on the origin facing north.
    pub fn new(maze: Maze) -> Self {
        let size = maze.size();
        Self {
            goal: GoalRegion::centered(size),
            maze,
            cell: Cell::ORIGIN,
            heading: Heading::North,
            steps: 0,
            outcome: None,
            trace: RunTrace::new(size, None),
        }
    }

    /// Tags the recorded trace with the seed the maze was generated from.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.trace.seed = Some(seed);
        self
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        self.outcome
    }

    pub fn trace(&self) -> &RunTrace {
        &self.trace
    }

    /// Asks `finder` for one movement and applies it. Returns the outcome once the run ends.
    pub fn step<F: PathFinder + ?Sized>(&mut self, finder: &mut F) -> Option<RunOutcome> {
        if self.outcome.is_some() {
            return self.outcome;
        }

        let view = MouseView::new(&self.maze, self.cell, self.heading);
        let movement = finder.next_movement(self.cell, &view);
        self.trace.push(self.cell, self.heading, movement);
        self.steps += 1;

        match movement {
            Movement::MoveForward => self.advance(self.heading, movement),
            Movement::MoveBackward => self.advance(self.heading.opposite(), movement),
            Movement::TurnClockwise | Movement::TurnCounterClockwise => {
                self.heading = movement.apply_to(self.heading);
            }
            Movement::Wait => {}
            Movement::Finish => {
                let outcome = if self.goal.contains(self.cell) {
                    RunOutcome::ReachedGoal { cell: self.cell }
                } else {
                    RunOutcome::GaveUp { cell: self.cell }
                };
                info!("run ended after {} steps: {outcome:?}", self.steps);
                self.outcome = Some(outcome);
            }
        }
        self.outcome
    }

    pub fn run(self, finder: &mut dyn PathFinder, max_steps: u32) -> RunReport {
        self.run_with(finder, max_steps, |_, _| {})
    }

    /// Like [`run`](Self::run), calling `observe` after every step that leaves the run going.
    pub fn run_with<F, O>(mut self, finder: &mut F, max_steps: u32, mut observe: O) -> RunReport
    where
        F: PathFinder + ?Sized,
        O: FnMut(&Self, &F),
    {
        let outcome = loop {
            if let Some(outcome) = self.step(finder) {
                break outcome;
            }
            observe(&self, finder);
            if self.steps >= max_steps {
                warn!("step budget of {max_steps} exhausted at {}", self.cell);
                break RunOutcome::BudgetExhausted;
            }
        };
        RunReport { outcome, steps: self.steps, trace: self.trace }
    }

    fn advance(&mut self, toward: Heading, movement: Movement) {
        let next = if self.maze.has_wall(self.cell, toward) {
            None
        } else {
            self.cell.neighbor(toward, self.maze.size())
        };
        match next {
            Some(next) => self.cell = next,
            None => {
                warn!("mouse hit a wall at {} moving {toward:?}", self.cell);
                self.outcome =
                    Some(RunOutcome::Crashed { cell: self.cell, heading: self.heading, movement });
            }
        }
    }
}
