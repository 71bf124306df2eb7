//! Cloth simulation core.
//!
//! A rectangular grid of point masses advanced with time-corrected Verlet
//! integration, held together by stretch-only structural springs relaxed
//! Jacobi-style, and projected out of analytic planes and spheres.
//!
//! The usual entry point is [`Scene`], which pairs a [`Cloth`] with the
//! [`World`] it collides against.

pub mod cloth;
pub mod collider;
pub mod config;
pub mod constraints;
pub mod error;
pub mod grid;
pub mod integrator;
pub mod math;
pub mod particle;
pub mod scene;
pub mod surface;
pub mod world;

pub use cloth::{Cloth, EditGuard, StepReport};
pub use collider::{Collider, Plane, Sphere};
pub use config::ClothConfig;
pub use error::{ClothError, ClothResult};
pub use scene::Scene;
pub use world::{World, WorldCommand};
