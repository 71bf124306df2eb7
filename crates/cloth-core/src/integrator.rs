//! Time-corrected Verlet integration.
//!
//! Velocity is reconstructed from position deltas, so a change of timestep
//! between steps has to rescale the carried displacement by
//! `dt / dt_prev`; otherwise energy is injected or removed.
//!
//! Reference: "Time-Corrected Verlet Integration", Jonathan Dummer, 2005.

use glam::Vec3;

use crate::particle::ParticleBuffers;

/// Remembers the accepted timestep of the previous step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TimeCorrection {
    prev_dt: Option<f32>,
}

impl TimeCorrection {
    pub fn new() -> Self {
        Self::default()
    }

    /// `dt / dt_prev`, or `1.0` before any step has been committed.
    #[inline]
    pub fn coefficient(&self, dt: f32) -> f32 {
        match self.prev_dt {
            Some(prev) => dt / prev,
            None => 1.0,
        }
    }

    /// Record `dt` as the previous step's timestep.
    #[inline]
    pub fn commit(&mut self, dt: f32) {
        self.prev_dt = Some(dt);
    }

    pub fn previous_dt(&self) -> Option<f32> {
        self.prev_dt
    }

    /// Forget the previous timestep; the next step uses a coefficient of 1.
    pub fn reset(&mut self) {
        self.prev_dt = None;
    }
}

/// Advance every particle by one step.
///
/// ```text
/// new = current + (current - previous) * damping * dt_coeff + gravity * dt^2
/// previous := current
/// current  := new
/// ```
pub fn integrate(
    particles: &mut ParticleBuffers,
    gravity: Vec3,
    damping: f32,
    dt: f32,
    dt_coeff: f32,
) {
    let accel = gravity * (dt * dt);
    let carry = damping * dt_coeff;

    for (x, x_prev) in particles
        .current
        .iter_mut()
        .zip(particles.previous.iter_mut())
    {
        let pos = *x;
        *x = pos + (pos - *x_prev) * carry + accel;
        *x_prev = pos;
    }
}
