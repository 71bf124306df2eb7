use std::collections::VecDeque;

use crate::cloth::{Cloth, StepReport};
use crate::config::ClothConfig;
use crate::error::{ClothError, ClothResult};
use crate::world::{World, WorldCommand};

/// A cloth together with the world it collides against.
///
/// Front-ends mutate the world between steps, either directly through
/// [`Scene::apply`]/[`Scene::world_mut`] or by queueing [`WorldCommand`]s
/// that are drained at the start of the next [`Scene::step`]. The world is
/// never touched while a step runs.
pub struct Scene {
    world: World,
    cloth: Cloth,
    pending: VecDeque<WorldCommand>,
}

impl Scene {
    pub fn new(width: f32, height: f32, rows: usize, cols: usize, world: World) -> ClothResult<Self> {
        Self::with_config(width, height, rows, cols, world, ClothConfig::default())
    }

    pub fn with_config(
        width: f32,
        height: f32,
        rows: usize,
        cols: usize,
        world: World,
        config: ClothConfig,
    ) -> ClothResult<Self> {
        Ok(Self {
            world,
            cloth: Cloth::with_config(width, height, rows, cols, config)?,
            pending: VecDeque::new(),
        })
    }

    /// Defer `command` until the next step.
    pub fn queue(&mut self, command: WorldCommand) {
        self.pending.push_back(command);
    }

    /// Apply `command` to the world now.
    pub fn apply(&mut self, command: WorldCommand) -> ClothResult<()> {
        log::debug!("world command: {command:?}");
        command.apply(&mut self.world)
    }

    /// Drain the queue in submission order. Commands that fail (stale
    /// indices) are skipped; their errors are returned.
    pub fn apply_pending(&mut self) -> Vec<ClothError> {
        let mut rejected = Vec::new();
        while let Some(command) = self.pending.pop_front() {
            if let Err(err) = self.apply(command) {
                log::warn!("dropping world command {command:?}: {err}");
                rejected.push(err);
            }
        }
        rejected
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Apply queued world commands, then step the cloth against the world.
    pub fn step(&mut self, dt: f32) -> StepReport {
        self.apply_pending();
        self.cloth.step(dt, &self.world)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn cloth(&self) -> &Cloth {
        &self.cloth
    }

    pub fn cloth_mut(&mut self) -> &mut Cloth {
        &mut self.cloth
    }
}
