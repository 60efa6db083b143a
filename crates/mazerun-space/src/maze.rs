//! Pixel-space maze: geometry, bounds and collision queries over a [`Grid`].

use crate::grid::{Cell, Grid};
use mazerun_core::MazeError;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Construction parameters for a [`Maze`].
///
/// The grid has `width / cell_size` columns and `height / cell_size` rows
/// (floor division). Pixels past the last whole cell are dead space: every
/// collision query there reports a hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeConfig {
    /// Pixel width. Default: 800.
    pub width: u32,
    /// Pixel height. Default: 600.
    pub height: u32,
    /// Cell edge length in pixels. Default: 40.
    pub cell_size: u32,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            cell_size: 40,
        }
    }
}

impl MazeConfig {
    /// Number of whole cells across.
    pub fn cols(&self) -> usize {
        self.width.checked_div(self.cell_size).unwrap_or(0) as usize
    }

    /// Number of whole cells down.
    pub fn rows(&self) -> usize {
        self.height.checked_div(self.cell_size).unwrap_or(0) as usize
    }

    /// Refuse parameters that produce a degenerate maze.
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.cell_size == 0 {
            return Err(MazeError::ZeroCellSize);
        }
        if self.rows() == 0 || self.cols() == 0 {
            return Err(MazeError::EmptyGrid {
                width: self.width,
                height: self.height,
                cell_size: self.cell_size,
            });
        }
        Ok(())
    }
}

/// A straight wall line in pixel coordinates, for renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallSegment {
    /// `(x, y)` of one end.
    pub start: (u32, u32),
    /// `(x, y)` of the other end.
    pub end: (u32, u32),
}

/// A generated maze in pixel space.
///
/// Immutable once built: nothing hands out `&mut` access to the grid, so a
/// `&Maze` can be shared by every agent of an episode. A new episode builds
/// a new maze.
#[derive(Clone, Debug)]
pub struct Maze {
    grid: Grid,
    width: u32,
    height: u32,
    cell_size: u32,
}

impl Maze {
    /// Generate a spanning-tree maze using `rng` as the randomness source.
    pub fn generate<R: Rng + ?Sized>(config: MazeConfig, rng: &mut R) -> Result<Self, MazeError> {
        config.validate()?;
        let mut grid = Grid::new(config.rows(), config.cols())?;
        let passages = grid.generate(rng);
        tracing::debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            cell_size = config.cell_size,
            passages,
            "maze generated"
        );
        Self::from_grid(config, grid)
    }

    /// Generate a maze from a ChaCha8 stream seeded with `seed`.
    ///
    /// Identical `(config, seed)` pairs always produce identical layouts.
    pub fn generate_seeded(config: MazeConfig, seed: u64) -> Result<Self, MazeError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::generate(config, &mut rng)
    }

    /// Wrap a hand-built grid.
    ///
    /// The grid's dimensions must match what `config` implies.
    pub fn from_grid(config: MazeConfig, grid: Grid) -> Result<Self, MazeError> {
        config.validate()?;
        if grid.rows() != config.rows() || grid.cols() != config.cols() {
            return Err(MazeError::CellOutOfBounds {
                row: grid.rows(),
                col: grid.cols(),
                rows: config.rows(),
                cols: config.cols(),
            });
        }
        Ok(Self {
            grid,
            width: config.width,
            height: config.height,
            cell_size: config.cell_size,
        })
    }

    /// The parameters this maze was built from.
    pub fn config(&self) -> MazeConfig {
        MazeConfig {
            width: self.width,
            height: self.height,
            cell_size: self.cell_size,
        }
    }

    /// Read-only wall flags.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Pixel width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Pixel height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Cell edge length in pixels.
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Whether `(x, y)` lies in `[0, width) x [0, height)`.
    pub fn in_bounds(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && x < self.width as f64 && y >= 0.0 && y < self.height as f64
    }

    /// The `(row, col)` of the cell containing `(x, y)`, or `None` outside
    /// the grid (including the dead-space remainder).
    pub fn cell_at(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        if !(x.is_finite() && y.is_finite()) {
            return None;
        }
        let cs = self.cell_size as f64;
        let col = (x / cs).floor();
        let row = (y / cs).floor();
        if col < 0.0 || row < 0.0 || col >= self.cols() as f64 || row >= self.rows() as f64 {
            return None;
        }
        Some((row as usize, col as usize))
    }

    /// Whether a circle of `radius` centred at `(x, y)` touches a wall.
    ///
    /// `radius = 0.0` tests a bare point. A centre outside the grid always
    /// collides. Otherwise each wall plane around the occupying cell is
    /// tested against the inflated point, in this order: own bottom wall,
    /// own right wall, left neighbour's right wall, upper neighbour's bottom
    /// wall. Touching counts as crossing. Finally, reaching any of the four
    /// maze edges collides regardless of wall flags.
    pub fn collides(&self, x: f64, y: f64, radius: f64) -> bool {
        let Some((row, col)) = self.cell_at(x, y) else {
            return true;
        };
        let cs = self.cell_size as f64;
        let left = col as f64 * cs;
        let top = row as f64 * cs;
        let right = left + cs;
        let bottom = top + cs;
        let grid = &self.grid;
        let cell = grid_cell(grid, row, col);

        if cell.wall_below && y + radius >= bottom {
            return true;
        }
        if cell.wall_right && x + radius >= right {
            return true;
        }
        if col > 0 && grid_cell(grid, row, col - 1).wall_right && x - radius <= left {
            return true;
        }
        if row > 0 && grid_cell(grid, row - 1, col).wall_below && y - radius <= top {
            return true;
        }

        x - radius <= 0.0
            || x + radius >= self.width as f64
            || y - radius <= 0.0
            || y + radius >= self.height as f64
    }

    /// Pixel position an agent spawns at: the centre of cell `(0, 0)`.
    pub fn start_position(&self) -> (f64, f64) {
        self.cell_center(0, 0)
    }

    /// Pixel position of the goal: the centre of the last cell.
    pub fn goal_position(&self) -> (f64, f64) {
        self.cell_center(self.rows() - 1, self.cols() - 1)
    }

    /// Centre of cell `(row, col)`, using an integer half-cell offset so
    /// that positions stay on whole pixels.
    pub fn cell_center(&self, row: usize, col: usize) -> (f64, f64) {
        let cs = self.cell_size as u64;
        let half = cs / 2;
        (
            (col as u64 * cs + half) as f64,
            (row as u64 * cs + half) as f64,
        )
    }

    /// Drawing radius of the goal marker. Unrelated to the win test.
    pub fn goal_marker_radius(&self) -> f64 {
        (self.cell_size / 4) as f64
    }

    /// Lines a renderer draws: every present right/bottom wall plus the
    /// outer top and left edges.
    pub fn wall_segments(&self) -> Vec<WallSegment> {
        let cs = self.cell_size;
        let mut out = vec![
            WallSegment {
                start: (0, 0),
                end: (self.width, 0),
            },
            WallSegment {
                start: (0, 0),
                end: (0, self.height),
            },
        ];
        for ((row, col), cell) in self.grid.iter() {
            let x = col as u32 * cs;
            let y = row as u32 * cs;
            if cell.wall_right {
                out.push(WallSegment {
                    start: (x + cs, y),
                    end: (x + cs, y + cs),
                });
            }
            if cell.wall_below {
                out.push(WallSegment {
                    start: (x, y + cs),
                    end: (x + cs, y + cs),
                });
            }
        }
        out
    }
}

fn grid_cell(grid: &Grid, row: usize, col: usize) -> Cell {
    grid.cell(row, col).copied().unwrap_or(Cell::CLOSED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazerun_core::Direction;
    use proptest::prelude::*;

    fn config(width: u32, height: u32, cell_size: u32) -> MazeConfig {
        MazeConfig {
            width,
            height,
            cell_size,
        }
    }

    /// 3x3 grid of 40 px cells with the middle row opened left to right.
    fn corridor() -> Maze {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.carve(1, 0, Direction::Right).unwrap();
        grid.carve(1, 1, Direction::Right).unwrap();
        Maze::from_grid(config(120, 120, 40), grid).unwrap()
    }

    #[test]
    fn default_config_is_20_by_15() {
        let c = MazeConfig::default();
        assert_eq!(c.cols(), 20);
        assert_eq!(c.rows(), 15);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn degenerate_configs_refused() {
        assert_eq!(config(800, 600, 0).validate(), Err(MazeError::ZeroCellSize));
        assert!(matches!(
            config(39, 600, 40).validate(),
            Err(MazeError::EmptyGrid { .. })
        ));
        assert!(matches!(
            Maze::generate_seeded(config(800, 0, 40), 1),
            Err(MazeError::EmptyGrid { .. })
        ));
    }

    #[test]
    fn from_grid_rejects_mismatched_dimensions() {
        let grid = Grid::new(2, 2).unwrap();
        assert!(Maze::from_grid(config(120, 80, 40), grid).is_err());
    }

    #[test]
    fn start_and_goal_are_cell_centres() {
        let maze = Maze::generate_seeded(MazeConfig::default(), 5).unwrap();
        assert_eq!(maze.start_position(), (20.0, 20.0));
        assert_eq!(maze.goal_position(), (780.0, 580.0));
        assert_eq!(maze.goal_marker_radius(), 10.0);
    }

    #[test]
    fn odd_cell_size_uses_floor_half() {
        let maze = Maze::from_grid(config(15, 15, 5), Grid::new(3, 3).unwrap()).unwrap();
        assert_eq!(maze.start_position(), (2.0, 2.0));
        assert_eq!(maze.goal_position(), (12.0, 12.0));
    }

    #[test]
    fn in_bounds_is_half_open() {
        let maze = corridor();
        assert!(maze.in_bounds(0.0, 0.0));
        assert!(maze.in_bounds(119.9, 119.9));
        assert!(!maze.in_bounds(120.0, 60.0));
        assert!(!maze.in_bounds(60.0, -0.1));
        assert!(!maze.in_bounds(f64::NAN, 10.0));
    }

    #[test]
    fn remainder_pixels_are_dead_space() {
        // 130 px wide with 40 px cells: columns 0..3, pixels 120..130 unusable.
        let maze = Maze::from_grid(config(130, 40, 40), Grid::new(1, 3).unwrap()).unwrap();
        assert!(maze.in_bounds(125.0, 20.0));
        assert!(maze.collides(125.0, 20.0, 0.0));
    }

    #[test]
    fn cell_centres_are_clear() {
        let maze = corridor();
        for row in 0..3 {
            for col in 0..3 {
                let (x, y) = maze.cell_center(row, col);
                assert!(!maze.collides(x, y, 10.0), "centre of ({row},{col}) collides");
            }
        }
    }

    #[test]
    fn own_walls_detected_by_inflated_point() {
        let maze = corridor();
        // Cell (0,0): right wall at x=40, bottom wall at y=40.
        assert!(maze.collides(31.0, 20.0, 10.0));
        assert!(!maze.collides(29.0, 20.0, 10.0));
        assert!(maze.collides(20.0, 30.0, 10.0));
        assert!(!maze.collides(20.0, 29.0, 10.0));
    }

    #[test]
    fn neighbour_walls_detected_from_the_other_side() {
        let maze = corridor();
        // Cell (0,1): left wall is (0,0).wall_right at x=40.
        assert!(maze.collides(50.0, 20.0, 10.0));
        assert!(!maze.collides(51.0, 20.0, 10.0));
        // Cell (2,1): top wall is (1,1).wall_below at y=80.
        assert!(maze.collides(60.0, 90.0, 10.0));
        assert!(!maze.collides(60.0, 91.0, 10.0));
    }

    #[test]
    fn cleared_wall_lets_circle_straddle() {
        let maze = corridor();
        // Boundary between (1,0) and (1,1) is open.
        assert!(!maze.collides(40.0, 60.0, 10.0));
        assert!(!maze.collides(36.0, 60.0, 10.0));
        assert!(!maze.collides(44.0, 60.0, 10.0));
        // Boundary between (0,0) and (0,1) is closed.
        assert!(maze.collides(40.0, 20.0, 10.0));
    }

    #[test]
    fn maze_edges_always_collide() {
        let maze = corridor();
        assert!(maze.collides(5.0, 60.0, 10.0));
        assert!(maze.collides(0.0, 60.0, 0.0));
        assert!(maze.collides(60.0, 0.0, 0.0));
        assert!(!maze.collides(1.0, 60.0, 0.0));
    }

    #[test]
    fn non_finite_points_collide() {
        let maze = corridor();
        assert!(maze.collides(f64::NAN, 60.0, 0.0));
        assert!(maze.collides(60.0, f64::INFINITY, 0.0));
    }

    #[test]
    fn wall_segments_cover_present_walls() {
        let maze = corridor();
        let segments = maze.wall_segments();
        // 2 outer edges + 9 bottom walls + (9 - 2) right walls.
        assert_eq!(segments.len(), 2 + 9 + 7);
        assert!(segments.contains(&WallSegment {
            start: (0, 0),
            end: (120, 0)
        }));
        assert!(segments.contains(&WallSegment {
            start: (40, 0),
            end: (40, 40)
        }));
        assert!(!segments.contains(&WallSegment {
            start: (40, 40),
            end: (40, 80)
        }));
    }

    proptest! {
        #[test]
        fn outside_points_always_collide(
            seed in any::<u64>(),
            radius in 0.0f64..30.0,
            along in 0.0f64..600.0,
            beyond in 0.0f64..500.0,
            side in 0u8..4,
        ) {
            let maze = Maze::generate_seeded(MazeConfig::default(), seed).unwrap();
            let (w, h) = (maze.width() as f64, maze.height() as f64);
            let (x, y) = match side {
                0 => (-beyond - 1e-9, along),
                1 => (w + beyond, along),
                2 => (along, -beyond - 1e-9),
                _ => (along, h + beyond),
            };
            prop_assert!(maze.collides(x, y, radius));
        }

        #[test]
        fn straddling_interior_boundary_matches_wall_flag(
            seed in any::<u64>(),
            row in 1usize..14,
            col in 1usize..18,
        ) {
            let maze = Maze::generate_seeded(MazeConfig::default(), seed).unwrap();
            let radius = (maze.cell_size() / 4) as f64;
            let (cx, cy) = maze.cell_center(row, col);
            let boundary_x = cx + (maze.cell_size() / 2) as f64;
            let wall = maze.grid().cell(row, col).unwrap().wall_right;
            prop_assert_eq!(maze.collides(boundary_x, cy, radius), wall);
        }
    }
}
