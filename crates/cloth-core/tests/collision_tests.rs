use glam::Vec3;
use cloth_core::collider::{Collider, Plane, Sphere};
use cloth_core::constraints::collision::{resolve_collider, resolve_plane, resolve_sphere, resolve_world};
use cloth_core::error::ClothError;
use cloth_core::world::World;

// ---------------------------------------------------------------------------
// primitives
// ---------------------------------------------------------------------------

#[test]
fn test_plane_new_normalizes() {
    let plane = Plane::new(Vec3::new(0.0, 2.0, 0.0), 0.5).unwrap();
    assert_eq!(plane.n, Vec3::Y);
    assert_eq!(plane.d, 0.5);
    assert_eq!(plane.equation(Vec3::new(3.0, 1.0, -2.0)), 1.5);
}

#[test]
fn test_plane_from_triangle_faces_up() {
    // Floor at y = -0.9 wound counter-clockwise seen from above.
    let plane = Plane::from_triangle(
        Vec3::new(0.0, -0.9, 0.0),
        Vec3::new(0.0, -0.9, 1.0),
        Vec3::new(1.0, -0.9, 0.0),
    )
    .unwrap();

    assert!((plane.n - Vec3::Y).length() < 1e-6, "normal {}", plane.n);
    assert!((plane.d - 0.9).abs() < 1e-6, "d {}", plane.d);
    assert!(plane.equation(Vec3::ZERO) > 0.0, "origin is above the floor");
    assert!(plane.equation(Vec3::new(0.0, -1.0, 0.0)) < 0.0, "below the floor penetrates");
    // Every defining point lies on the plane.
    assert!(plane.equation(Vec3::new(1.0, -0.9, 0.0)).abs() < 1e-6);
}

#[test]
fn test_plane_from_point_normal() {
    let plane = Plane::from_point_normal(Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 0.0, -3.0)).unwrap();
    assert_eq!(plane.n, Vec3::new(0.0, 0.0, -1.0));
    assert!((plane.equation(Vec3::new(5.0, 5.0, 2.0))).abs() < 1e-6);
    assert!(plane.equation(Vec3::ZERO) > 0.0);
}

#[test]
fn test_degenerate_planes_rejected() {
    assert_eq!(Plane::new(Vec3::ZERO, 1.0), Err(ClothError::DegeneratePlane));
    assert_eq!(
        Plane::from_triangle(Vec3::ZERO, Vec3::X, Vec3::X * 3.0),
        Err(ClothError::DegeneratePlane)
    );
}

#[test]
fn test_sphere_equation_sign() {
    let sphere = Sphere::new(Vec3::new(1.0, 0.0, 0.0), 2.0);
    assert!(sphere.equation(Vec3::new(1.0, 1.0, 0.0)) < 0.0, "inside");
    assert_eq!(sphere.equation(Vec3::new(3.0, 0.0, 0.0)), 0.0, "on the surface");
    assert!(sphere.equation(Vec3::new(5.0, 0.0, 0.0)) > 0.0, "outside");
}

// ---------------------------------------------------------------------------
// plane resolution
// ---------------------------------------------------------------------------

#[test]
fn test_fallen_particle_lands_exactly_on_plane() {
    let plane = Plane::new(Vec3::new(0.0, 1.0, 0.0), 0.0).unwrap();
    // Started 0.5 above the plane, has fallen to y = -0.3.
    let mut positions = vec![Vec3::new(0.2, -0.3, 0.7)];

    let report = resolve_plane(&mut positions, &plane);

    assert_eq!(positions[0].y, 0.0);
    assert_eq!(positions[0].x, 0.2);
    assert_eq!(positions[0].z, 0.7);
    assert_eq!(report.resolved, 1);
    assert!((report.max_penetration - 0.3).abs() < 1e-6);
}

#[test]
fn test_plane_containment_tilted() {
    let plane = Plane::new(Vec3::new(1.0, 1.0, 0.5), -0.25).unwrap();
    let mut positions: Vec<Vec3> = (0..50)
        .map(|k| {
            let t = k as f32 * 0.37;
            Vec3::new(t.sin() * 2.0, t.cos() * 2.0, (t * 0.5).sin())
        })
        .collect();
    let before = positions.clone();

    resolve_plane(&mut positions, &plane);

    for (p, old) in positions.iter().zip(&before) {
        if plane.equation(*old) < 0.0 {
            assert!(plane.equation(*p).abs() < 1e-5, "{old} -> {p} not on plane");
        } else {
            assert_eq!(p, old, "non-penetrating particle moved");
        }
    }
}

// ---------------------------------------------------------------------------
// sphere resolution
// ---------------------------------------------------------------------------

#[test]
fn test_sphere_containment() {
    let sphere = Sphere::new(Vec3::new(0.0, -0.5, 0.1), 0.4);
    let mut positions = vec![
        Vec3::new(0.0, -0.3, 0.1),
        Vec3::new(0.1, -0.5, 0.2),
        Vec3::new(-0.2, -0.6, 0.0),
        Vec3::new(2.0, 2.0, 2.0),
    ];
    let before = positions.clone();

    let report = resolve_sphere(&mut positions, &sphere);

    assert_eq!(report.resolved, 3);
    for (p, old) in positions.iter().zip(&before).take(3) {
        let dist = (*p - sphere.origin).length();
        assert!((dist - sphere.r).abs() < 1e-5, "{old} -> {p}: distance {dist}");
        // Pushed along the ray from the centre.
        let dir_old = (*old - sphere.origin).normalize();
        let dir_new = (*p - sphere.origin).normalize();
        assert!(dir_old.dot(dir_new) > 0.9999);
    }
    assert_eq!(positions[3], before[3], "outside particle untouched");
}

#[test]
fn test_particle_at_sphere_centre_is_left_alone() {
    let sphere = Sphere::new(Vec3::new(1.0, 2.0, 3.0), 0.5);
    let mut positions = vec![sphere.origin];
    let report = resolve_sphere(&mut positions, &sphere);
    assert_eq!(positions[0], sphere.origin);
    assert!(positions[0].is_finite());
    assert_eq!(report.resolved, 0);
}

#[test]
fn test_zero_radius_sphere_is_noop() {
    let sphere = Sphere::new(Vec3::ZERO, 0.0);
    let mut positions = vec![Vec3::ZERO, Vec3::new(1e-4, 0.0, 0.0)];
    let before = positions.clone();
    resolve_sphere(&mut positions, &sphere);
    assert_eq!(positions, before);
}

#[test]
fn test_particle_on_surface_not_moved() {
    let plane = Plane::new(Vec3::Y, 0.0).unwrap();
    let sphere = Sphere::new(Vec3::ZERO, 1.0);
    let mut positions = vec![Vec3::new(1.0, 0.0, 0.0)];
    let report = resolve_collider(&mut positions, &Collider::Plane(plane));
    assert_eq!(report.resolved, 0);
    let report = resolve_collider(&mut positions, &Collider::Sphere(sphere));
    assert_eq!(report.resolved, 0);
    assert_eq!(positions[0], Vec3::new(1.0, 0.0, 0.0));
}

// ---------------------------------------------------------------------------
// world ordering
// ---------------------------------------------------------------------------

#[test]
fn test_planes_resolved_before_spheres() {
    let mut world = World::new();
    world.add_sphere(Sphere::new(Vec3::ZERO, 1.0));
    world.add_plane(Plane::new(Vec3::Y, 0.0).unwrap());

    // Below the plane and inside the sphere: the plane lifts it to y = 0,
    // then the sphere pushes it out radially to (1, 0, 0).
    let mut positions = vec![Vec3::new(0.1, -0.5, 0.0)];
    let report = resolve_world(&mut positions, &world);

    assert_eq!(report.resolved, 2);
    assert!((positions[0] - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-4, "got {}", positions[0]);
}

#[test]
fn test_last_sphere_wins_on_overlap() {
    let mut world = World::new();
    world.add_sphere(Sphere::new(Vec3::new(-0.3, 0.0, 0.0), 0.5));
    world.add_sphere(Sphere::new(Vec3::new(0.3, 0.0, 0.0), 0.5));

    let mut positions = vec![Vec3::new(0.0, 0.1, 0.0)];
    resolve_world(&mut positions, &world);

    let last = world.spheres()[1];
    let dist = (positions[0] - last.origin).length();
    assert!((dist - last.r).abs() < 1e-5, "last sphere holds exactly, got {dist}");
}

#[test]
fn test_empty_world_is_noop() {
    let world = World::new();
    let mut positions = vec![Vec3::new(0.0, -100.0, 0.0)];
    let report = resolve_world(&mut positions, &world);
    assert_eq!(report.resolved, 0);
    assert_eq!(positions[0], Vec3::new(0.0, -100.0, 0.0));
}
