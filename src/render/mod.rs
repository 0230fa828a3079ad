//! Render layer: geometry, text metrics, and the row renderer.

pub mod color;
pub mod elide;
pub mod geometry;
pub mod metrics;
pub mod ops;
pub mod palette;
pub mod row;
