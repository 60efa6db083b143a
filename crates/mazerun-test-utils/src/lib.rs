//! Test utilities for Mazerun development.
//!
//! Provides scripted `Controller` implementations in [`fixtures`] and
//! hand-built mazes with known wall layouts in [`mazes`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod mazes;

pub use fixtures::{
    one_hot, ConstController, FailingController, OpenRayController, ScriptedController,
};
pub use mazes::{closed_cell, corridor, episode_config, CELL};
