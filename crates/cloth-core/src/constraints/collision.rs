use glam::Vec3;

use crate::collider::{Collider, Plane, Sphere};
use crate::world::World;

/// Summary of one or more collision sweeps.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContactReport {
    /// Number of particle projections performed.
    pub resolved: u32,
    /// Deepest penetration found before projection, in world units.
    pub max_penetration: f32,
}

impl ContactReport {
    pub fn merge(&mut self, other: ContactReport) {
        self.resolved += other.resolved;
        self.max_penetration = self.max_penetration.max(other.max_penetration);
    }
}

/// Project every penetrating particle onto the collider's surface.
pub fn resolve_collider(positions: &mut [Vec3], collider: &Collider) -> ContactReport {
    let mut report = ContactReport::default();

    for p in positions.iter_mut() {
        if let Some(surface) = collider.project(*p) {
            report.resolved += 1;
            report.max_penetration = report.max_penetration.max(collider.depth(*p));
            *p = surface;
        }
    }

    report
}

#[inline]
pub fn resolve_plane(positions: &mut [Vec3], plane: &Plane) -> ContactReport {
    resolve_collider(positions, &Collider::Plane(*plane))
}

#[inline]
pub fn resolve_sphere(positions: &mut [Vec3], sphere: &Sphere) -> ContactReport {
    resolve_collider(positions, &Collider::Sphere(*sphere))
}

/// Resolve against every plane, then every sphere, in collection order.
///
/// Primitives are applied one after another over the whole grid, so with
/// overlapping geometry the last primitive holds exactly and earlier ones
/// only approximately.
pub fn resolve_world(positions: &mut [Vec3], world: &World) -> ContactReport {
    let mut report = ContactReport::default();
    for plane in world.planes() {
        report.merge(resolve_plane(positions, plane));
    }
    for sphere in world.spheres() {
        report.merge(resolve_sphere(positions, sphere));
    }
    report
}
