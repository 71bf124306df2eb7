use glam::Vec3;

use crate::grid::GridLayout;
use crate::math::LENGTH_EPSILON;
use crate::particle::ParticleBuffers;

/// Half of the correction that brings `a` back within `rest_length` of `b`.
///
/// Only stretching is resisted: when `|b - a| <= rest_length` the result is
/// zero and the pair may bunch freely. The other half comes from `b`
/// evaluating the same spring from its side in the same pass. Coincident
/// endpoints (`|b - a|` below [`LENGTH_EPSILON`]) give no correction.
#[inline]
pub fn solve_spring(a: Vec3, b: Vec3, rest_length: f32) -> Vec3 {
    let ab = b - a;
    let l = ab.length();
    if l < LENGTH_EPSILON {
        return Vec3::ZERO;
    }
    let dl = (l - rest_length).max(0.0);
    ab * (0.5 * dl / l)
}

/// One Jacobi pass over every structural constraint.
///
/// Each particle sums the spring corrections from all of its present
/// neighbours, reading only `current`, and writes its new position into
/// `scratch`. The pass is committed by swapping the two buffers, so no
/// particle sees a neighbour's update from the same pass.
pub fn relax_pass(particles: &mut ParticleBuffers, layout: &GridLayout) {
    let cols = layout.cols();
    let current = &particles.current;
    let scratch = &mut particles.scratch;

    for i in 0..layout.rows() {
        for j in 0..cols {
            let idx = i * cols + j;
            let p = current[idx];
            let mut dx = Vec3::ZERO;
            layout.for_each_neighbor(i, j, |q, axis| {
                dx += solve_spring(p, current[q], layout.rest_length(axis));
            });
            scratch[idx] = p + dx;
        }
    }

    particles.swap_scratch();
}

/// Run `iterations` Jacobi passes. Each pass starts from the snapshot the
/// previous pass committed.
pub fn relax(particles: &mut ParticleBuffers, layout: &GridLayout, iterations: u32) {
    for _ in 0..iterations {
        relax_pass(particles, layout);
    }
}

/// Largest relative stretch `(l - L) / L` over all structural constraints.
/// Compressed springs count as zero.
pub fn max_strain(positions: &[Vec3], layout: &GridLayout) -> f32 {
    let cols = layout.cols();
    let mut worst = 0.0_f32;

    for i in 0..layout.rows() {
        for j in 0..cols {
            let idx = i * cols + j;
            if j + 1 < cols {
                let l = (positions[idx + 1] - positions[idx]).length();
                worst = worst.max((l - layout.dist_to_left()) / layout.dist_to_left());
            }
            if i + 1 < layout.rows() {
                let l = (positions[idx + cols] - positions[idx]).length();
                worst = worst.max((l - layout.dist_to_bottom()) / layout.dist_to_bottom());
            }
        }
    }

    worst
}
