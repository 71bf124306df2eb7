use glam::Vec3;

/// Lengths below this are treated as zero (coincident points, collinear
/// triangles).
pub const LENGTH_EPSILON: f32 = 1e-6;

/// Squared distances below this count as "at the sphere centre".
pub const CENTER_EPSILON_SQ: f32 = 1e-12;

/// Unit normal of the triangle `(p1, p2, p3)` wound counter-clockwise.
///
/// Returns `None` when the points are collinear or coincident.
pub fn triangle_normal(p1: Vec3, p2: Vec3, p3: Vec3) -> Option<Vec3> {
    let n = (p2 - p1).cross(p3 - p1);
    let len = n.length();
    if len < LENGTH_EPSILON || !len.is_finite() {
        return None;
    }
    Some(n / len)
}

/// True if every component of every position is finite.
pub fn all_finite(positions: &[Vec3]) -> bool {
    positions.iter().all(|p| p.is_finite())
}
