//! Cell wall flags and randomized depth-first carving.

use mazerun_core::{Direction, MazeError};
use rand::Rng;
use smallvec::SmallVec;
use std::collections::VecDeque;

/// One grid cell.
///
/// A cell owns only its right and bottom walls. Its left wall is the left
/// neighbour's `wall_right`, its top wall the upper neighbour's
/// `wall_below`. Cells on the last column/row keep those flags set forever;
/// they double as the maze's right and bottom boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Wall between this cell and the cell at `col + 1`.
    pub wall_right: bool,
    /// Wall between this cell and the cell at `row + 1`.
    pub wall_below: bool,
}

impl Cell {
    /// A cell with both owned walls present.
    pub const CLOSED: Cell = Cell {
        wall_right: true,
        wall_below: true,
    };
}

impl Default for Cell {
    fn default() -> Self {
        Self::CLOSED
    }
}

/// Row-major grid of [`Cell`]s indexed `(row, col)`.
///
/// Adjacency is never stored; it is recomputed from coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every wall present.
    ///
    /// Returns `Err(MazeError::EmptyGrid)` if either dimension is 0.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::EmptyGrid {
                width: cols as u32,
                height: rows as u32,
                cell_size: 1,
            });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::CLOSED; rows * cols],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total cell count.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The cell at `(row, col)`, or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(&self.cells[self.idx(row, col)])
    }

    /// Iterate `((row, col), cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i / cols, i % cols), cell))
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check(&self, row: usize, col: usize) -> Result<(), MazeError> {
        if row >= self.rows || col >= self.cols {
            return Err(MazeError::CellOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// The in-grid neighbour of `(row, col)` in `direction`, if any.
    pub fn neighbour(&self, row: usize, col: usize, direction: Direction) -> Option<(usize, usize)> {
        let (dr, dc) = direction.grid_offset();
        let nr = row.checked_add_signed(dr as isize)?;
        let nc = col.checked_add_signed(dc as isize)?;
        if nr >= self.rows || nc >= self.cols {
            return None;
        }
        Some((nr, nc))
    }

    /// Whether a wall separates `(row, col)` from its neighbour in `direction`.
    ///
    /// Reads the owning cell: up/left consult the neighbour's `wall_below` /
    /// `wall_right`, down/right consult this cell's. Grid edges always count
    /// as walls, as does any coordinate outside the grid.
    pub fn has_wall(&self, row: usize, col: usize, direction: Direction) -> bool {
        let Some((nr, nc)) = self
            .cell(row, col)
            .and_then(|_| self.neighbour(row, col, direction))
        else {
            return true;
        };
        match direction {
            Direction::Up => self.cells[self.idx(nr, nc)].wall_below,
            Direction::Left => self.cells[self.idx(nr, nc)].wall_right,
            Direction::Down => self.cells[self.idx(row, col)].wall_below,
            Direction::Right => self.cells[self.idx(row, col)].wall_right,
        }
    }

    /// Whether `(row, col)` connects to its neighbour in `direction`.
    pub fn is_open(&self, row: usize, col: usize, direction: Direction) -> bool {
        !self.has_wall(row, col, direction)
    }

    /// Remove the wall between `(row, col)` and its neighbour in `direction`.
    ///
    /// Carving up clears the neighbour's bottom wall, down clears this
    /// cell's bottom wall, left clears the neighbour's right wall, right
    /// clears this cell's right wall.
    pub fn carve(&mut self, row: usize, col: usize, direction: Direction) -> Result<(), MazeError> {
        self.check(row, col)?;
        let (nr, nc) = self
            .neighbour(row, col, direction)
            .ok_or(MazeError::NoNeighbour {
                row,
                col,
                direction,
            })?;
        match direction {
            Direction::Up => {
                let i = self.idx(nr, nc);
                self.cells[i].wall_below = false;
            }
            Direction::Down => {
                let i = self.idx(row, col);
                self.cells[i].wall_below = false;
            }
            Direction::Left => {
                let i = self.idx(nr, nc);
                self.cells[i].wall_right = false;
            }
            Direction::Right => {
                let i = self.idx(row, col);
                self.cells[i].wall_right = false;
            }
        }
        Ok(())
    }

    /// Restore every wall.
    pub fn close_all(&mut self) {
        self.cells.fill(Cell::CLOSED);
    }

    /// Carve a spanning-tree maze by randomized depth-first search from `(0, 0)`.
    ///
    /// Starts from a fully closed grid. Keeps an explicit stack: the top
    /// cell either carves into a uniformly chosen unvisited neighbour (which
    /// is then pushed) or, with none left, is popped. Every cell ends up
    /// reachable from `(0, 0)` along exactly one path.
    ///
    /// Returns the number of passages carved, always `cell_count() - 1`.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        self.close_all();
        let mut visited = vec![false; self.cells.len()];
        let mut stack: Vec<(usize, usize)> = Vec::with_capacity(self.cells.len());
        let mut carved = 0;

        visited[0] = true;
        stack.push((0, 0));

        while let Some(&(row, col)) = stack.last() {
            let candidates: SmallVec<[(Direction, (usize, usize)); 4]> = Direction::ALL
                .into_iter()
                .filter_map(|d| self.neighbour(row, col, d).map(|n| (d, n)))
                .filter(|&(_, (nr, nc))| !visited[self.idx(nr, nc)])
                .collect();

            if candidates.is_empty() {
                stack.pop();
                continue;
            }

            let (direction, (nr, nc)) = candidates[rng.random_range(0..candidates.len())];
            // Neighbour came from `self.neighbour`, so carving cannot fail.
            if self.carve(row, col, direction).is_ok() {
                carved += 1;
            }
            let i = self.idx(nr, nc);
            visited[i] = true;
            stack.push((nr, nc));
        }

        carved
    }

    /// Number of cleared walls between in-grid cell pairs.
    pub fn passage_count(&self) -> usize {
        self.iter()
            .map(|((row, col), cell)| {
                let right = !cell.wall_right && col + 1 < self.cols;
                let below = !cell.wall_below && row + 1 < self.rows;
                usize::from(right) + usize::from(below)
            })
            .sum()
    }

    /// Number of cells reachable from `(row, col)` through cleared walls.
    ///
    /// Returns 0 for a start outside the grid.
    pub fn reachable_from(&self, row: usize, col: usize) -> usize {
        if self.cell(row, col).is_none() {
            return 0;
        }
        let mut seen = vec![false; self.cells.len()];
        let mut queue = VecDeque::new();
        seen[self.idx(row, col)] = true;
        queue.push_back((row, col));
        let mut count = 0;

        while let Some((r, c)) = queue.pop_front() {
            count += 1;
            for d in Direction::ALL {
                if self.has_wall(r, c, d) {
                    continue;
                }
                if let Some((nr, nc)) = self.neighbour(r, c, d) {
                    let i = self.idx(nr, nc);
                    if !seen[i] {
                        seen[i] = true;
                        queue.push_back((nr, nc));
                    }
                }
            }
        }
        count
    }

    /// Whether a move from cell `from` to cell `to` passes through a wall.
    ///
    /// Same cell: never blocked. Orthogonal neighbours: blocked by the
    /// shared wall. Diagonal neighbours: blocked unless one of the two
    /// L-shaped routes through the side cells is fully open. Anything
    /// further apart, or outside the grid, is blocked.
    pub fn passage_blocked(&self, from: (usize, usize), to: (usize, usize)) -> bool {
        if self.cell(from.0, from.1).is_none() || self.cell(to.0, to.1).is_none() {
            return true;
        }
        let vertical = match to.0 as i64 - from.0 as i64 {
            -1 => Some(Direction::Up),
            0 => None,
            1 => Some(Direction::Down),
            _ => return true,
        };
        let horizontal = match to.1 as i64 - from.1 as i64 {
            -1 => Some(Direction::Left),
            0 => None,
            1 => Some(Direction::Right),
            _ => return true,
        };
        match (vertical, horizontal) {
            (None, None) => false,
            (Some(d), None) | (None, Some(d)) => self.has_wall(from.0, from.1, d),
            (Some(v), Some(h)) => {
                let via = |first: Direction, second: Direction| {
                    if self.has_wall(from.0, from.1, first) {
                        return false;
                    }
                    match self.neighbour(from.0, from.1, first) {
                        Some((r, c)) => self.is_open(r, c, second),
                        None => false,
                    }
                };
                !(via(v, h) || via(h, v))
            }
        }
    }
}
