//! The eight-ray distance percept handed to controllers.

use std::ops::Index;

/// Number of rays in a [`SensorReading`].
pub const SENSOR_COUNT: usize = 8;

/// Distances to the nearest obstruction along eight fixed rays.
///
/// Element `i` is the ray at `45° * i`, measured from east and rotating
/// toward +y (screen-down). On screen that is clockwise:
///
/// | index | 0 | 1  | 2 | 3  | 4 | 5  | 6 | 7  |
/// |-------|---|----|---|----|---|----|---|----|
/// | ray   | E | SE | S | SW | W | NW | N | NE |
///
/// Each value is the number of unit pixel steps marched before the ray left
/// the maze or hit a wall. Controllers rely on this ordering positionally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SensorReading([u32; SENSOR_COUNT]);

impl SensorReading {
    /// Wrap raw distances, already in ray order.
    pub fn new(distances: [u32; SENSOR_COUNT]) -> Self {
        Self(distances)
    }

    /// Distances in ray order.
    pub fn distances(&self) -> &[u32; SENSOR_COUNT] {
        &self.0
    }

    /// Distance for ray `index`, or `None` past the last ray.
    pub fn get(&self, index: usize) -> Option<u32> {
        self.0.get(index).copied()
    }

    /// Iterate distances in ray order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    /// Smallest distance across all rays.
    pub fn min(&self) -> u32 {
        self.0.iter().copied().min().unwrap_or(0)
    }

    /// Distances as `f64`, the usual input layout for a network controller.
    pub fn to_inputs(&self) -> Vec<f64> {
        self.0.iter().map(|&d| d as f64).collect()
    }
}

impl Index<usize> for SensorReading {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.0[index]
    }
}

impl From<[u32; SENSOR_COUNT]> for SensorReading {
    fn from(distances: [u32; SENSOR_COUNT]) -> Self {
        Self(distances)
    }
}
