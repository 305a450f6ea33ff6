/// Frustum — six clipping planes for visibility culling.
///
/// Each plane is represented as a Vec4 (A, B, C, D) where:
/// - (A, B, C) is the inward-pointing unit normal
/// - D is the signed distance
/// - A point P is inside the frustum if dot(plane, P_homogeneous) >= 0 for all planes
///
/// Built from a projection * view matrix with a [0, 1] clip depth range
/// (the range produced by `Mat4::perspective_rh` / `orthographic_rh`).

use glam::{Mat4, Vec3, Vec4};
use crate::bounds::{AABB, PlaneTest};

/// Result of a 3-way frustum/AABB classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    /// AABB is entirely outside at least one plane
    Outside,
    /// AABB is entirely inside all six planes
    Inside,
    /// AABB straddles at least one plane and is outside none
    Partial,
}

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_TOP: usize = 2;
pub const PLANE_BOTTOM: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Number of frustum planes
pub const PLANE_COUNT: usize = 6;

/// Six frustum planes for culling.
///
/// Immutable once built. Works with both perspective and orthographic
/// projections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Frustum planes: left, right, top, bottom, near, far
    planes: [Vec4; PLANE_COUNT],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Gribb & Hartmann extraction on the matrix rows:
    /// left = r3 + r0, right = r3 - r0, top = r3 - r1, bottom = r3 + r1,
    /// near = r2, far = r3 - r2.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let r0 = vp.row(0);
        let r1 = vp.row(1);
        let r2 = vp.row(2);
        let r3 = vp.row(3);

        let mut planes = [
            r3 + r0, // left
            r3 - r0, // right
            r3 - r1, // top
            r3 + r1, // bottom
            r2,      // near
            r3 - r2, // far
        ];

        // Positive scaling keeps every sign, so containment is unchanged
        for plane in &mut planes {
            let normal_len = plane.truncate().length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// All six planes, indexed by the `PLANE_*` constants.
    pub fn planes(&self) -> &[Vec4; PLANE_COUNT] {
        &self.planes
    }

    /// A single plane by `PLANE_*` index.
    pub fn plane(&self, index: usize) -> &Vec4 {
        &self.planes[index]
    }

    /// True iff the point is on the positive side of all six planes.
    pub fn contains_point(&self, point: Vec3) -> bool {
        let p = point.extend(1.0);
        self.planes.iter().all(|plane| plane.dot(p) >= 0.0)
    }

    /// Conservative sphere test. May report spheres just outside a frustum
    /// corner as intersecting.
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        let c = center.extend(1.0);
        self.planes.iter().all(|plane| plane.dot(c) >= -radius)
    }

    /// Test if an AABB intersects this frustum.
    ///
    /// Uses the "positive vertex" test: for each plane, find the AABB corner
    /// most in the direction of the plane normal. If that corner is outside,
    /// the AABB is fully outside.
    ///
    /// Returns `true` if the AABB is (potentially) inside or intersecting.
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        let (min, max) = (aabb.min(), aabb.max());
        for plane in &self.planes {
            let p_vertex = Vec3::new(
                if plane.x >= 0.0 { max.x } else { min.x },
                if plane.y >= 0.0 { max.y } else { min.y },
                if plane.z >= 0.0 { max.z } else { min.z },
            );

            if plane.dot(p_vertex.extend(1.0)) < 0.0 {
                return false;
            }
        }

        true
    }

    /// Classify an AABB against the frustum (3-way test) using the
    /// per-plane corner classification.
    pub fn classify_aabb(&self, aabb: &AABB) -> FrustumTest {
        let mut all_inside = true;

        for plane in &self.planes {
            match aabb.test_plane(plane) {
                PlaneTest::Outside => return FrustumTest::Outside,
                PlaneTest::Intersecting => all_inside = false,
                PlaneTest::Inside => {}
            }
        }

        if all_inside { FrustumTest::Inside } else { FrustumTest::Partial }
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
