//! BVH module — dynamic AABB tree with masked frustum culling.
//!
//! Usage per frame:
//! 1. `reset()` the tree
//! 2. `insert()` every object's world-space AABB with its payload
//! 3. `for_each_visible()` with the camera frustum

mod node;
mod bvh;
mod culling;
mod debug;

pub use bvh::{Bvh, BvhConfig};
pub use debug::DebugBox;
