use std::ops::{Deref, DerefMut};

use glam::Vec3;

use crate::config::ClothConfig;
use crate::constraints::collision::{resolve_world, ContactReport};
use crate::constraints::structural::{max_strain, relax};
use crate::error::ClothResult;
use crate::grid::GridLayout;
use crate::integrator::{integrate, TimeCorrection};
use crate::math::all_finite;
use crate::particle::ParticleBuffers;
use crate::surface::Surface;
use crate::world::World;

/// What one call to [`Cloth::step`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepReport {
    pub dt: f32,
    /// `dt / dt_prev` used to rescale the carried displacement.
    pub dt_coeff: f32,
    pub relax_passes: u32,
    pub contacts: ContactReport,
}

/// A rectangular cloth: a `rows x cols` grid of point masses held together
/// by structural springs and pushed out of the world's primitives.
///
/// The grid and its three position buffers are allocated once here and never
/// reallocated.
pub struct Cloth {
    pub config: ClothConfig,
    layout: GridLayout,
    particles: ParticleBuffers,
    time: TimeCorrection,
    surface: Surface,
    editing: bool,
}

impl Cloth {
    /// Build a cloth with the default [`ClothConfig`].
    pub fn new(width: f32, height: f32, rows: usize, cols: usize) -> ClothResult<Self> {
        Self::with_config(width, height, rows, cols, ClothConfig::default())
    }

    /// Build a cloth laid out as a flat sheet in the XY plane, centred on the
    /// origin, at exact rest spacing and at rest.
    pub fn with_config(
        width: f32,
        height: f32,
        rows: usize,
        cols: usize,
        config: ClothConfig,
    ) -> ClothResult<Self> {
        let layout = GridLayout::new(width, height, rows, cols)?;

        let mut cloth = Self {
            config,
            layout,
            particles: ParticleBuffers::new(layout.len()),
            time: TimeCorrection::new(),
            surface: Surface::new(rows, cols),
            editing: false,
        };
        cloth.lay_out_sheet();
        cloth.particles.sync_previous();
        cloth.surface.upload(&cloth.particles.current);

        log::info!(
            "cloth created: {}x{} particles, {}x{} extent, rest lengths {:.4}/{:.4}",
            rows,
            cols,
            width,
            height,
            layout.dist_to_left(),
            layout.dist_to_bottom()
        );

        Ok(cloth)
    }

    fn lay_out_sheet(&mut self) {
        for i in 0..self.layout.rows() {
            for j in 0..self.layout.cols() {
                let idx = self.layout.index(i, j);
                self.particles.current[idx] = self.layout.sheet_position(i, j);
            }
        }
    }

    // ---------- edit window ----------

    /// Enter an edit window. Panics if one is already open.
    pub fn begin_edit(&mut self) {
        assert!(!self.editing, "begin_edit called while already editing");
        self.editing = true;
        log::debug!("cloth edit window opened");
    }

    /// Leave the edit window, optionally zeroing the implicit velocity, and
    /// refresh the surface. Panics if no window is open.
    pub fn end_edit(&mut self, reset_velocity: bool) {
        assert!(self.editing, "end_edit called without a matching begin_edit");
        self.editing = false;
        if reset_velocity {
            self.particles.sync_previous();
        }
        self.surface.upload(&self.particles.current);
        log::debug!("cloth edit window closed (reset_velocity: {reset_velocity})");
    }

    /// Open an edit window that closes when the returned guard is dropped.
    pub fn edit(&mut self) -> EditGuard<'_> {
        self.begin_edit();
        EditGuard {
            cloth: self,
            reset_velocity: false,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Overwrite the position of cell `(i, j)`. Only valid inside an edit
    /// window.
    pub fn set(&mut self, i: usize, j: usize, pos: Vec3) {
        *self.at_mut(i, j) = pos;
    }

    /// Mutable access to cell `(i, j)`. Only valid inside an edit window.
    pub fn at_mut(&mut self, i: usize, j: usize) -> &mut Vec3 {
        assert!(self.editing, "cloth positions may only be written inside an edit window");
        let idx = self.layout.index(i, j);
        &mut self.particles.current[idx]
    }

    /// Restore the flat rest layout. Only valid inside an edit window; pair
    /// with a velocity reset to drop the cloth from rest.
    pub fn reset_to_sheet(&mut self) {
        assert!(self.editing, "reset_to_sheet is only valid inside an edit window");
        self.lay_out_sheet();
    }

    // ---------- simulation ----------

    /// `previous := current` for every particle.
    pub fn reset_velocity(&mut self) {
        self.particles.sync_previous();
    }

    /// Advance the cloth by `dt`: integrate, relax the structural springs,
    /// then resolve collisions against `world`.
    ///
    /// Panics if `dt` is not positive and finite, or inside an edit window.
    pub fn step(&mut self, dt: f32, world: &World) -> StepReport {
        assert!(dt > 0.0 && dt.is_finite(), "timestep must be positive and finite, got {dt}");
        assert!(!self.editing, "step called inside an edit window");

        let dt_coeff = self.time.coefficient(dt);
        integrate(
            &mut self.particles,
            self.config.gravity,
            self.config.damping,
            dt,
            dt_coeff,
        );

        relax(&mut self.particles, &self.layout, self.config.iterations);

        let contacts = resolve_world(&mut self.particles.current, world);

        self.time.commit(dt);
        self.surface.upload(&self.particles.current);

        let report = StepReport {
            dt,
            dt_coeff,
            relax_passes: self.config.iterations,
            contacts,
        };
        log::trace!("cloth step: {report:?}");

        if !all_finite(&self.particles.current) {
            log::warn!("cloth step produced non-finite positions (dt: {dt}, dt_coeff: {dt_coeff})");
        }

        report
    }

    /// Timestep of the last completed step, if any.
    pub fn previous_dt(&self) -> Option<f32> {
        self.time.previous_dt()
    }

    // ---------- accessors ----------

    /// Position of cell `(i, j)`.
    pub fn at(&self, i: usize, j: usize) -> Vec3 {
        self.particles.current[self.layout.index(i, j)]
    }

    /// Position of cell `(i, j)` one step ago.
    pub fn prev_at(&self, i: usize, j: usize) -> Vec3 {
        self.particles.previous[self.layout.index(i, j)]
    }

    /// Row-major current positions.
    pub fn positions(&self) -> &[Vec3] {
        &self.particles.current
    }

    /// Row-major previous positions.
    pub fn previous_positions(&self) -> &[Vec3] {
        &self.particles.previous
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn rows(&self) -> usize {
        self.layout.rows()
    }

    pub fn cols(&self) -> usize {
        self.layout.cols()
    }

    pub fn width(&self) -> f32 {
        self.layout.width()
    }

    pub fn height(&self) -> f32 {
        self.layout.height()
    }

    /// Largest relative overstretch of any structural spring.
    pub fn max_strain(&self) -> f32 {
        max_strain(&self.particles.current, &self.layout)
    }
}

/// Scoped edit window returned by [`Cloth::edit`].
///
/// Derefs to the cloth, so positions are written through
/// [`Cloth::set`]/[`Cloth::at_mut`]. Dropping the guard ends the window on
/// every exit path.
pub struct EditGuard<'a> {
    cloth: &'a mut Cloth,
    reset_velocity: bool,
}

impl EditGuard<'_> {
    /// Zero the implicit velocity when the window closes.
    pub fn reset_velocity_on_exit(&mut self) -> &mut Self {
        self.reset_velocity = true;
        self
    }
}

impl Deref for EditGuard<'_> {
    type Target = Cloth;

    fn deref(&self) -> &Cloth {
        self.cloth
    }
}

impl DerefMut for EditGuard<'_> {
    fn deref_mut(&mut self) -> &mut Cloth {
        self.cloth
    }
}

impl Drop for EditGuard<'_> {
    fn drop(&mut self) {
        // The window may already have been closed by hand through DerefMut.
        if self.cloth.is_editing() {
            self.cloth.end_edit(self.reset_velocity);
        }
    }
}
