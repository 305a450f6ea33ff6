use glam::{Mat4, Vec3};
use crate::bounds::AABB;
use super::*;

fn make_aabb(min: Vec3, max: Vec3) -> AABB {
    AABB::new(min, max).unwrap()
}

/// Camera at the origin looking down -Z, 90° FOV, near 1, far 10.
fn origin_frustum() -> Frustum {
    let projection = Mat4::perspective_rh(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 10.0);
    let view = Mat4::look_at_rh(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);
    Frustum::from_view_projection(&(projection * view))
}

// ============================================================================
// Frustum::from_view_projection
// ============================================================================

#[test]
fn test_frustum_from_identity_matrix() {
    let frustum = Frustum::from_view_projection(&Mat4::IDENTITY);

    // Identity VP → clip cube: x,y in [-1, 1], z in [0, 1]
    for plane in frustum.planes() {
        let normal_len = plane.truncate().length();
        assert!((normal_len - 1.0).abs() < 1e-5, "plane normal should be unit length");
    }

    assert!(frustum.contains_point(Vec3::new(0.0, 0.0, 0.5)));
    assert!(frustum.contains_point(Vec3::new(1.0, -1.0, 0.0)));
    assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, -0.1)));
    assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 1.1)));
    assert!(!frustum.contains_point(Vec3::new(1.1, 0.0, 0.5)));
    assert!(!frustum.contains_point(Vec3::new(0.0, -1.1, 0.5)));
}

#[test]
fn test_identity_plane_normals_point_inward() {
    let frustum = Frustum::from_view_projection(&Mat4::IDENTITY);

    assert_eq!(frustum.plane(PLANE_LEFT).truncate(), Vec3::X);
    assert_eq!(frustum.plane(PLANE_RIGHT).truncate(), Vec3::NEG_X);
    assert_eq!(frustum.plane(PLANE_TOP).truncate(), Vec3::NEG_Y);
    assert_eq!(frustum.plane(PLANE_BOTTOM).truncate(), Vec3::Y);
    assert_eq!(frustum.plane(PLANE_NEAR).truncate(), Vec3::Z);
    assert_eq!(frustum.plane(PLANE_FAR).truncate(), Vec3::NEG_Z);
}

#[test]
fn test_frustum_from_orthographic_projection() {
    let projection = Mat4::orthographic_rh(-10.0, 10.0, -10.0, 10.0, 0.1, 100.0);
    let frustum = Frustum::from_view_projection(&projection);

    for plane in frustum.planes() {
        let normal_len = plane.truncate().length();
        assert!((normal_len - 1.0).abs() < 1e-4, "plane normal should be unit length");
    }

    assert!(frustum.contains_point(Vec3::new(9.0, -9.0, -50.0)));
    assert!(!frustum.contains_point(Vec3::new(11.0, 0.0, -50.0)));
    assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, -101.0)));
}

// ============================================================================
// Frustum::contains_point
// ============================================================================

#[test]
fn test_contains_point_center() {
    assert!(origin_frustum().contains_point(Vec3::new(0.0, 0.0, -5.0)));
}

#[test]
fn test_contains_point_past_far_plane() {
    assert!(!origin_frustum().contains_point(Vec3::new(0.0, 0.0, -10.5)));
}

#[test]
fn test_contains_point_before_near_plane() {
    let frustum = origin_frustum();
    // Between the eye and the near plane
    assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, -0.5)));
    // Behind the eye
    assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 1.0)));
}

#[test]
fn test_contains_point_side_planes() {
    let frustum = origin_frustum();
    // 90° FOV: at depth 5 the half-width is 5
    assert!(frustum.contains_point(Vec3::new(4.9, 0.0, -5.0)));
    assert!(!frustum.contains_point(Vec3::new(5.1, 0.0, -5.0)));
    assert!(!frustum.contains_point(Vec3::new(-5.1, 0.0, -5.0)));
    assert!(!frustum.contains_point(Vec3::new(0.0, 5.1, -5.0)));
    assert!(!frustum.contains_point(Vec3::new(0.0, -5.1, -5.0)));
}

// ============================================================================
// Frustum::intersects_sphere
// ============================================================================

#[test]
fn test_intersects_sphere() {
    let frustum = origin_frustum();
    assert!(frustum.intersects_sphere(Vec3::new(0.0, 0.0, -5.0), 1.0));
    // Center past far plane but radius reaches back in
    assert!(frustum.intersects_sphere(Vec3::new(0.0, 0.0, -10.5), 1.0));
    assert!(!frustum.intersects_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0));
}

// ============================================================================
// Frustum::intersects_aabb / classify_aabb
// ============================================================================

#[test]
fn test_aabb_inside_frustum() {
    let frustum = origin_frustum();
    let aabb = make_aabb(Vec3::new(-1.0, -1.0, -6.0), Vec3::new(1.0, 1.0, -4.0));

    assert!(frustum.intersects_aabb(&aabb));
    assert_eq!(frustum.classify_aabb(&aabb), FrustumTest::Inside);
}

#[test]
fn test_aabb_outside_frustum() {
    let frustum = origin_frustum();
    let aabb = make_aabb(Vec3::splat(100.0), Vec3::splat(101.0));

    assert!(!frustum.intersects_aabb(&aabb));
    assert_eq!(frustum.classify_aabb(&aabb), FrustumTest::Outside);
}

#[test]
fn test_aabb_behind_camera() {
    let frustum = origin_frustum();
    let aabb = make_aabb(Vec3::new(-1.0, -1.0, 2.0), Vec3::new(1.0, 1.0, 4.0));

    assert!(!frustum.intersects_aabb(&aabb));
    assert_eq!(frustum.classify_aabb(&aabb), FrustumTest::Outside);
}

#[test]
fn test_aabb_beyond_far_plane() {
    let frustum = origin_frustum();
    let aabb = make_aabb(Vec3::new(-1.0, -1.0, -20.0), Vec3::new(1.0, 1.0, -18.0));

    assert!(!frustum.intersects_aabb(&aabb));
    assert_eq!(frustum.classify_aabb(&aabb), FrustumTest::Outside);
}

#[test]
fn test_aabb_straddling_frustum_boundary() {
    let projection = Mat4::orthographic_rh(-5.0, 5.0, -5.0, 5.0, 0.1, 100.0);
    let frustum = Frustum::from_view_projection(&projection);

    // Straddles the right boundary at x=5
    let aabb = make_aabb(Vec3::new(4.0, 0.0, -10.0), Vec3::new(6.0, 1.0, -5.0));

    assert!(frustum.intersects_aabb(&aabb));
    assert_eq!(frustum.classify_aabb(&aabb), FrustumTest::Partial);
}

// ============================================================================
// Plane constants
// ============================================================================

#[test]
fn test_plane_constants() {
    assert_eq!(PLANE_LEFT, 0);
    assert_eq!(PLANE_RIGHT, 1);
    assert_eq!(PLANE_TOP, 2);
    assert_eq!(PLANE_BOTTOM, 3);
    assert_eq!(PLANE_NEAR, 4);
    assert_eq!(PLANE_FAR, 5);
    assert_eq!(PLANE_COUNT, 6);
}
