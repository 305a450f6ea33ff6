/// AABB — axis-aligned bounding box.
///
/// The box is validated once, at construction: `min <= max` on every axis
/// and all components finite. Operations that can break it (`transformed`)
/// go back through `new`; the others preserve it, so the rest of the crate
/// never re-checks it.

use glam::{Mat4, Vec3, Vec4};
use crate::error::{log_and_return_error, Error, Result};

const LOG_SOURCE: &str = "galaxy3d::AABB";

/// Result of classifying a box against a single plane.
///
/// The positive side of a plane `(a, b, c, d)` is `a*x + b*y + c*z + d >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneTest {
    /// All 8 corners are on the positive side
    Inside,
    /// All 8 corners are on the negative side
    Outside,
    /// Corners on both sides
    Intersecting,
}

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    min: Vec3,
    max: Vec3,
}

impl AABB {
    /// Create a box from its min and max corners.
    ///
    /// # Errors
    ///
    /// - `Error::NonFiniteBounds` if any component is NaN or infinite
    /// - `Error::InvertedBounds` if `min > max` on any axis
    pub fn new(min: Vec3, max: Vec3) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(log_and_return_error(
                LOG_SOURCE,
                Error::NonFiniteBounds(format!("min = {}, max = {}", min, max)),
            ));
        }

        for axis in 0..3 {
            if min[axis] > max[axis] {
                return Err(log_and_return_error(
                    LOG_SOURCE,
                    Error::InvertedBounds(format!(
                        "min[{}] = {} > max[{}] = {}",
                        axis, min[axis], axis, max[axis]
                    )),
                ));
            }
        }

        Ok(Self { min, max })
    }

    /// Degenerate box around a single point.
    ///
    /// # Errors
    ///
    /// `Error::NonFiniteBounds` if the point is not finite.
    pub fn from_point(point: Vec3) -> Result<Self> {
        Self::new(point, point)
    }

    /// Smallest box containing every point.
    ///
    /// # Errors
    ///
    /// - `Error::EmptyPointSet` if `points` is empty
    /// - `Error::NonFiniteBounds` if any point is not finite
    pub fn from_points(points: &[Vec3]) -> Result<Self> {
        let (first, rest) = points
            .split_first()
            .ok_or_else(|| log_and_return_error(LOG_SOURCE, Error::EmptyPointSet))?;

        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));

        Self::new(min, max)
    }

    /// Minimum corner
    #[inline]
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Maximum corner
    #[inline]
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// Center point
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Size along each axis (`max - min`, never negative)
    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }

    /// Union of two boxes: component-wise min of mins, max of maxes.
    #[inline]
    pub fn union(&self, other: &AABB) -> AABB {
        AABB {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// `2 * (dx*dy + dy*dz + dz*dx)`.
    ///
    /// Only meaningful as a relative cost when comparing boxes.
    #[inline]
    pub fn surface_area(&self) -> f32 {
        let d = self.max - self.min;
        2.0 * (d.x * d.y + d.y * d.z + d.z * d.x)
    }

    /// The 8 corners. Index bit 0 selects max.x, bit 1 max.y, bit 2 max.z,
    /// so corner 0 is `min` and corner 7 is `max`.
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// Transform the box by a matrix, returning a new box.
    ///
    /// All 8 corners go through the matrix and the result is the box around
    /// them. For rotations this is larger than the tightest box around the
    /// transformed contents; it always contains them.
    ///
    /// Corners are divided by their `w` only when `w != 0`, so a projective
    /// matrix never produces infinities from points on its eye plane.
    ///
    /// # Errors
    ///
    /// `Error::NonFiniteBounds` if a transformed corner is still not finite
    /// (overflow, or a matrix with NaN/infinite entries).
    pub fn transformed(&self, matrix: &Mat4) -> Result<AABB> {
        let project = |corner: Vec3| -> Vec3 {
            let p = *matrix * corner.extend(1.0);
            let w = if p.w != 0.0 { p.w } else { 1.0 };
            p.truncate() / w
        };

        let corners = self.corners();
        let first = project(corners[0]);
        let (min, max) = corners[1..].iter().fold((first, first), |(min, max), corner| {
            let p = project(*corner);
            (min.min(p), max.max(p))
        });

        Self::new(min, max)
    }

    /// Test if this AABB fully contains another AABB.
    pub fn contains(&self, other: &AABB) -> bool {
        self.min.x <= other.min.x && self.max.x >= other.max.x
        && self.min.y <= other.min.y && self.max.y >= other.max.y
        && self.min.z <= other.min.z && self.max.z >= other.max.z
    }

    /// Test if this AABB intersects (overlaps or touches) another AABB.
    pub fn intersects(&self, other: &AABB) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x
        && self.min.y <= other.max.y && self.max.y >= other.min.y
        && self.min.z <= other.max.z && self.max.z >= other.min.z
    }

    /// Test if a point lies inside or on the boundary.
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Point of the box closest to `point` (the point itself when inside).
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }

    /// Sphere overlap test against a squared radius.
    ///
    /// Touching at exactly `radius` does not count as overlap.
    pub fn intersects_sphere(&self, center: Vec3, radius_sq: f32) -> bool {
        self.closest_point(center).distance_squared(center) < radius_sq
    }

    /// Classify the box against a plane `(a, b, c, d)`.
    ///
    /// A corner with `dot >= 0` is on the positive side. The min and max
    /// corners are evaluated first and the test stops as soon as two corners
    /// disagree, so a straddling box usually costs two dot products.
    pub fn test_plane(&self, plane: &Vec4) -> PlaneTest {
        let positive = |p: Vec3| -> bool {
            #[cfg(test)]
            CORNER_TESTS.with(|count| count.set(count.get() + 1));
            plane.x * p.x + plane.y * p.y + plane.z * p.z + plane.w >= 0.0
        };

        let corners = self.corners();
        let first = positive(corners[0]);
        if positive(corners[7]) != first {
            return PlaneTest::Intersecting;
        }

        for corner in &corners[1..7] {
            if positive(*corner) != first {
                return PlaneTest::Intersecting;
            }
        }

        if first {
            PlaneTest::Inside
        } else {
            PlaneTest::Outside
        }
    }
}

#[cfg(test)]
thread_local! {
    /// Corner evaluations done by `test_plane` on this thread.
    pub(crate) static CORNER_TESTS: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
}

#[cfg(test)]
pub(crate) fn take_corner_tests() -> usize {
    CORNER_TESTS.with(|count| count.replace(0))
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
