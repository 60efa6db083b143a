//! Core types and errors for the Mazerun maze environment.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate in the workspace: identifiers,
//! movement directions, the sensor reading percept, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod id;
pub mod sensor;

pub use direction::Direction;
pub use error::{DecisionError, MazeError};
pub use id::{AgentId, GenerationId, TickId};
pub use sensor::{SensorReading, SENSOR_COUNT};
