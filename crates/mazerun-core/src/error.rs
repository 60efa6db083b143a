//! Error types shared across the workspace.
//!
//! Organized by failure source: maze construction (bad parameters from the
//! caller that builds the environment) and decision vectors (contract
//! violations by the external controller).

use crate::direction::Direction;
use std::error::Error;
use std::fmt;

/// Errors from maze construction and grid editing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeError {
    /// Cell size is zero.
    ZeroCellSize,
    /// The pixel area holds no whole cell on at least one axis.
    EmptyGrid {
        /// Pixel width requested.
        width: u32,
        /// Pixel height requested.
        height: u32,
        /// Cell edge length in pixels.
        cell_size: u32,
    },
    /// A grid coordinate lies outside the grid.
    CellOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Row count of the grid.
        rows: usize,
        /// Column count of the grid.
        cols: usize,
    },
    /// Carving toward a neighbour that does not exist (grid edge).
    NoNeighbour {
        /// Row of the source cell.
        row: usize,
        /// Column of the source cell.
        col: usize,
        /// Direction that leaves the grid.
        direction: Direction,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCellSize => write!(f, "cell_size must be at least 1"),
            Self::EmptyGrid {
                width,
                height,
                cell_size,
            } => write!(
                f,
                "{width}x{height} px holds no whole {cell_size} px cell on some axis"
            ),
            Self::CellOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(f, "cell ({row}, {col}) outside [0, {rows}) x [0, {cols})"),
            Self::NoNeighbour {
                row,
                col,
                direction,
            } => write!(f, "cell ({row}, {col}) has no neighbour {direction}"),
        }
    }
}

impl Error for MazeError {}

/// A controller returned a decision vector the agent refuses to act on.
#[derive(Clone, Debug, PartialEq)]
pub enum DecisionError {
    /// The vector does not hold exactly one score per direction.
    WrongLength {
        /// Required length.
        expected: usize,
        /// Length received.
        got: usize,
    },
    /// A score is NaN or infinite.
    NonFinite {
        /// Position of the offending score.
        index: usize,
        /// The offending score.
        value: f64,
    },
}

impl fmt::Display for DecisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, got } => {
                write!(f, "decision vector has {got} scores, expected {expected}")
            }
            Self::NonFinite { index, value } => {
                write!(f, "decision score {index} is not finite: {value}")
            }
        }
    }
}

impl Error for DecisionError {}
