use glam::Vec3;

/// Simulation constants owned by a [`Cloth`](crate::cloth::Cloth).
///
/// Every field is public so the instantiating code can override the
/// defaults before or between steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClothConfig {
    /// Constant acceleration applied to every particle.
    pub gravity: Vec3,
    /// Fraction of the implicit velocity kept each step (air drag), < 1.
    pub damping: f32,
    /// Jacobi relaxation passes per step.
    pub iterations: u32,
}

impl ClothConfig {
    pub fn with_gravity(mut self, gravity: Vec3) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Same config with gravity switched off.
    pub fn weightless(self) -> Self {
        self.with_gravity(Vec3::ZERO)
    }
}

impl Default for ClothConfig {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -0.9, 0.0),
            damping: 0.99,
            iterations: 4,
        }
    }
}
