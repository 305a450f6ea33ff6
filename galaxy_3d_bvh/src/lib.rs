/*!
# Galaxy 3D BVH

Dynamic bounding volume hierarchy and frustum culling for the Galaxy 3D
engine.

The index is rebuilt from scratch every frame: the caller resets the tree,
inserts one world-space AABB per object with an opaque payload (typically an
entity or instance key) and then runs one culling traversal per view.

## Architecture

- **AABB**: validated axis-aligned box (union, surface area, transform,
  plane classification)
- **Frustum**: six planes extracted from a view-projection matrix
- **Bvh**: arena-backed binary tree with surface-area-heuristic insertion
  and plane-masked culling traversal
- **log**: swappable logger used for diagnostics
*/

// Internal modules
mod error;
pub mod log;
pub mod bounds;
pub mod camera;
pub mod bvh;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Core types
    pub use crate::bounds::{AABB, PlaneTest};
    pub use crate::camera::{Frustum, FrustumTest, PlaneMask};
    pub use crate::bvh::{Bvh, BvhConfig, DebugBox};

    // Logging sub-module (types and logger slot, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, set_min_severity, min_severity, log,
        };
    }

    // Camera sub-module with plane constants
    pub mod camera {
        pub use crate::camera::*;
    }
}

// Re-export math library at crate root
pub use glam;
