//! Mazerun: a maze environment for evolving sensor-driven agents.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Mazerun sub-crates. For most users, adding `mazerun` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use mazerun::prelude::*;
//! use mazerun::space::MazeConfig;
//!
//! let config = EpisodeConfig {
//!     maze: MazeConfig { width: 200, height: 160, cell_size: 40 },
//!     population: 4,
//!     max_steps: 50,
//!     seed: 42,
//!     ..EpisodeConfig::default()
//! };
//!
//! // Head for whichever way the longest cardinal ray points.
//! let mut controller = from_fn(|_id: AgentId, r: &SensorReading| {
//!     vec![r[6] as f64, r[2] as f64, r[4] as f64, r[0] as f64]
//! });
//! let report = run_generation(&config, GenerationId(0), &mut controller).unwrap();
//! assert_eq!(report.fitness().len(), 4);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `mazerun-core` | IDs, directions, sensor readings, errors |
//! | [`space`] | `mazerun-space` | Wall grid, maze generation, collision |
//! | [`obs`] | `mazerun-obs` | Eight-ray distance sensor |
//! | [`agent`] | `mazerun-agent` | Agent movement, sensing, goal test |
//! | [`engine`] | `mazerun-engine` | Episode loop, controllers, scoring |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, IDs, and errors (`mazerun-core`).
pub use mazerun_core as types;

/// Wall grid and maze generation (`mazerun-space`).
///
/// [`space::Maze::generate_seeded`] builds a perfect maze;
/// [`space::Maze::collides`] is the circle-vs-wall test agents move by.
pub use mazerun_space as space;

/// Eight-ray distance sensor (`mazerun-obs`).
pub use mazerun_obs as obs;

/// Agent movement and goal test (`mazerun-agent`).
pub use mazerun_agent as agent;

/// Episode loop (`mazerun-engine`).
///
/// [`engine::Episode`] for tick-by-tick control,
/// [`engine::run_generation`] for one whole generation at a time.
pub use mazerun_engine as engine;

/// Common imports for typical Mazerun usage.
///
/// ```rust
/// use mazerun::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use mazerun_core::{AgentId, Direction, GenerationId, SensorReading, TickId};

    // Errors
    pub use mazerun_core::{DecisionError, MazeError};

    // Space
    pub use mazerun_space::{Maze, MazeConfig};

    // Sensing
    pub use mazerun_obs::SensorCaster;

    // Agent
    pub use mazerun_agent::{Agent, AgentConfig, Movement};

    // Engine
    pub use mazerun_engine::{
        from_fn, run_generation, ConfigError, Controller, Episode, EpisodeConfig, EpisodeError,
        EpisodeReport, Outcome, TickReport,
    };
}
