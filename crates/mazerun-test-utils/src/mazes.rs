//! Hand-built mazes with known wall layouts.
//!
//! All fixtures use 40 px cells so agents get the reference radius 10 and
//! speed 5.

use mazerun_core::Direction;
use mazerun_engine::EpisodeConfig;
use mazerun_space::{Grid, Maze, MazeConfig};

/// Cell size shared by every fixture.
pub const CELL: u32 = 40;

/// One row of `cols` cells with every interior wall carved.
///
/// Start at `(20, 20)`, goal at `(40 * cols - 20, 20)`.
pub fn corridor(cols: usize) -> Maze {
    let mut grid = Grid::new(1, cols).expect("cols > 0");
    for col in 0..cols.saturating_sub(1) {
        grid.carve(0, col, Direction::Right).expect("in bounds");
    }
    Maze::from_grid(config(1, cols), grid).expect("dimensions match")
}

/// A single 40x40 cell. Start and goal coincide.
pub fn closed_cell() -> Maze {
    let grid = Grid::new(1, 1).expect("non-empty");
    Maze::from_grid(config(1, 1), grid).expect("dimensions match")
}

/// Episode parameters matching `maze`, with `population` agents and a
/// `max_steps` budget; everything else at defaults.
pub fn episode_config(maze: &Maze, population: usize, max_steps: u32) -> EpisodeConfig {
    EpisodeConfig {
        maze: maze.config(),
        population,
        max_steps,
        ..EpisodeConfig::default()
    }
}

fn config(rows: usize, cols: usize) -> MazeConfig {
    MazeConfig {
        width: cols as u32 * CELL,
        height: rows as u32 * CELL,
        cell_size: CELL,
    }
}
