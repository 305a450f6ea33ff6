//! Bounds module — axis-aligned bounding boxes and plane classification.

mod aabb;

pub use aabb::{AABB, PlaneTest};

#[cfg(test)]
pub(crate) use aabb::take_corner_tests;
