//! Heliotrack - sun-tracking panel orientation and ambient lighting core
//!
//! Drives the orientation of a tiltable solar panel toward the apparent
//! position of the sun for a geographic location and time, and derives the
//! matching scene lighting. A render surface (meshes, camera, controls)
//! consumes the outputs declaratively; it is not part of this crate.

pub mod core;
pub mod solar;
pub mod geo;
pub mod tracker;
pub mod lighting;
pub mod scene;
pub mod session;
