//! ASCII drawings of the ground-truth maze and of what the mouse believes.
//! This module exists for console viewing only; nothing here feeds back into decisions.

use std::iter;

use crate::distance::DistanceField;
use crate::sim::Maze;
use crate::types::{Cell, Heading, MazeSize};
use crate::walls::WallKnowledge;

/// Mouse position and heading to overlay on a drawing.
pub type Mouse = (Cell, Heading);

pub fn maze(maze: &Maze, mouse: Option<Mouse>) -> String {
    draw(maze.size(), |cell, heading| maze.has_wall(cell, heading), |_| String::new(), mouse)
}

/// Known walls with each cell's current distance estimate.
pub fn knowledge(walls: &WallKnowledge, field: &DistanceField, mouse: Option<Mouse>) -> String {
    draw(
        walls.size(),
        |cell, heading| walls.is_wall(cell, heading),
        |cell| field.distance(cell).to_string(),
        mouse,
    )
}

fn draw<W, L>(size: MazeSize, is_wall: W, label: L, mouse: Option<Mouse>) -> String
where
    W: Fn(Cell, Heading) -> bool,
    L: Fn(Cell) -> String,
{
    let n = size.side();
    let texts: Vec<String> = size
        .cells()
        .map(|cell| match mouse {
            Some((at, heading)) if at == cell => heading.glyph().to_string(),
            _ => label(cell),
        })
        .collect();
    // Cells stay at least three columns wide and grow to fit the longest label.
    let width = texts.iter().map(|text| text.chars().count()).max().unwrap_or(0).max(3);
    let mut out = String::new();

    for y in (0..n).rev() {
        horizontal_line(&mut out, n, width, |x| is_wall(Cell { x, y }, Heading::North));
        for x in 0..n {
            let cell = Cell { x, y };
            out.push(if is_wall(cell, Heading::West) { '|' } else { ' ' });
            out.push_str(&format!("{:^width$}", texts[y * n + x]));
        }
        out.push(if is_wall(Cell { x: n - 1, y }, Heading::East) { '|' } else { ' ' });
        out.push('\n');
    }
    horizontal_line(&mut out, n, width, |x| is_wall(Cell { x, y: 0 }, Heading::South));
    out
}

fn horizontal_line(out: &mut String, n: usize, width: usize, is_wall: impl Fn(usize) -> bool) {
    for x in 0..n {
        out.push('+');
        let fill = if is_wall(x) { '-' } else { ' ' };
        out.extend(iter::repeat_n(fill, width));
    }
    out.push_str("+\n");
}
