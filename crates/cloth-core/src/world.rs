use crate::collider::{Collider, Plane, Sphere};
use crate::error::{ClothError, ClothResult};

/// The collision scene: ordered planes and spheres.
///
/// The cloth only reads it during a step. Anything may be added, removed or
/// moved between steps; the next step sees the new contents.
#[derive(Clone, Debug, Default)]
pub struct World {
    planes: Vec<Plane>,
    spheres: Vec<Sphere>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn plane_count(&self) -> usize {
        self.planes.len()
    }

    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Append a plane and return its index.
    pub fn add_plane(&mut self, plane: Plane) -> usize {
        self.planes.push(plane);
        self.planes.len() - 1
    }

    /// Append a sphere and return its index.
    pub fn add_sphere(&mut self, sphere: Sphere) -> usize {
        self.spheres.push(sphere);
        self.spheres.len() - 1
    }

    /// Remove the plane at `index`, shifting later planes down by one.
    pub fn remove_plane(&mut self, index: usize) -> ClothResult<Plane> {
        check_index("plane", index, self.planes.len())?;
        Ok(self.planes.remove(index))
    }

    /// Remove the sphere at `index`, shifting later spheres down by one.
    pub fn remove_sphere(&mut self, index: usize) -> ClothResult<Sphere> {
        check_index("sphere", index, self.spheres.len())?;
        Ok(self.spheres.remove(index))
    }

    pub fn plane(&self, index: usize) -> ClothResult<&Plane> {
        check_index("plane", index, self.planes.len())?;
        Ok(&self.planes[index])
    }

    pub fn plane_mut(&mut self, index: usize) -> ClothResult<&mut Plane> {
        check_index("plane", index, self.planes.len())?;
        Ok(&mut self.planes[index])
    }

    pub fn sphere(&self, index: usize) -> ClothResult<&Sphere> {
        check_index("sphere", index, self.spheres.len())?;
        Ok(&self.spheres[index])
    }

    pub fn sphere_mut(&mut self, index: usize) -> ClothResult<&mut Sphere> {
        check_index("sphere", index, self.spheres.len())?;
        Ok(&mut self.spheres[index])
    }

    pub fn clear(&mut self) {
        self.planes.clear();
        self.spheres.clear();
    }

    /// All primitives in resolution order: planes first, then spheres.
    pub fn colliders(&self) -> impl Iterator<Item = Collider> + '_ {
        self.planes
            .iter()
            .copied()
            .map(Collider::Plane)
            .chain(self.spheres.iter().copied().map(Collider::Sphere))
    }
}

fn check_index(kind: &'static str, index: usize, count: usize) -> ClothResult<()> {
    if index < count {
        Ok(())
    } else {
        Err(ClothError::IndexOutOfRange { kind, index, count })
    }
}

/// A deferred mutation of the [`World`], queued by a control front-end and
/// applied between steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WorldCommand {
    AddPlane(Plane),
    AddSphere(Sphere),
    RemovePlane(usize),
    RemoveSphere(usize),
    SetPlane(usize, Plane),
    SetSphere(usize, Sphere),
    Clear,
}

impl WorldCommand {
    pub fn apply(self, world: &mut World) -> ClothResult<()> {
        match self {
            WorldCommand::AddPlane(p) => {
                world.add_plane(p);
            }
            WorldCommand::AddSphere(s) => {
                world.add_sphere(s);
            }
            WorldCommand::RemovePlane(i) => {
                world.remove_plane(i)?;
            }
            WorldCommand::RemoveSphere(i) => {
                world.remove_sphere(i)?;
            }
            WorldCommand::SetPlane(i, p) => *world.plane_mut(i)? = p,
            WorldCommand::SetSphere(i, s) => *world.sphere_mut(i)? = s,
            WorldCommand::Clear => world.clear(),
        }
        Ok(())
    }
}
