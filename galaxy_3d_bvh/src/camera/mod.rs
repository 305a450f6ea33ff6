//! Camera module — frustum planes and the plane mask used while culling.
//!
//! The frustum is a snapshot: the caller builds one from its current
//! view-projection matrix once per traversal.

mod frustum;
mod plane_mask;

pub use frustum::{
    Frustum, FrustumTest,
    PLANE_LEFT, PLANE_RIGHT, PLANE_TOP, PLANE_BOTTOM, PLANE_NEAR, PLANE_FAR, PLANE_COUNT,
};
pub use plane_mask::PlaneMask;
