use glam::Vec3;

/// SoA position storage for the cloth particles.
///
/// There is no velocity buffer: velocity is implicit in
/// `current - previous` (Verlet form).
pub struct ParticleBuffers {
    pub count: usize,
    /// Authoritative positions after the last step or edit window.
    pub current: Vec<Vec3>,
    /// Positions one step before `current`.
    pub previous: Vec<Vec3>,
    /// Jacobi output buffer, swapped with `current` after each relaxation pass
    pub scratch: Vec<Vec3>,
}

impl ParticleBuffers {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            current: vec![Vec3::ZERO; count],
            previous: vec![Vec3::ZERO; count],
            scratch: vec![Vec3::ZERO; count],
        }
    }

    /// `previous := current`, zeroing the implicit velocity of every particle.
    pub fn sync_previous(&mut self) {
        self.previous.copy_from_slice(&self.current);
    }

    /// Commit a relaxation pass: the freshly written scratch buffer becomes
    /// `current`. Only the `Vec` headers move.
    #[inline]
    pub fn swap_scratch(&mut self) {
        std::mem::swap(&mut self.current, &mut self.scratch);
    }

    /// Per-step displacement of particle `i`.
    #[inline]
    pub fn displacement(&self, i: usize) -> Vec3 {
        self.current[i] - self.previous[i]
    }
}
