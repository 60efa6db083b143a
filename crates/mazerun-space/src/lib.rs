//! Grid maze generation and collision queries for Mazerun.
//!
//! [`Grid`] owns the wall flags and carves them into a spanning tree by
//! randomized depth-first search. [`Maze`] places that grid in pixel space
//! and answers the geometric questions agents and sensors ask: is a point
//! inside the maze, does a circle touch a wall, where are start and goal.
//!
//! # Wall ownership
//!
//! Each [`Cell`] stores only its right and bottom walls. Left and top walls
//! are read from the neighbour that owns them, so every query resolves the
//! owning cell first. [`Grid::has_wall`] is the single place that mapping
//! lives for cell-level queries.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod maze;

pub use grid::{Cell, Grid};
pub use maze::{Maze, MazeConfig, WallSegment};
