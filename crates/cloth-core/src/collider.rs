//! Analytic collision primitives.
//!
//! Each primitive exposes an implicit `equation(x)` that is negative for
//! penetrating points, and a `project(x)` that returns the surface point a
//! penetrating particle is moved to.

use glam::Vec3;

use crate::error::{ClothError, ClothResult};
use crate::math::{triangle_normal, CENTER_EPSILON_SQ};

/// Infinite plane `dot(n, x) + d = 0` with unit normal `n`.
///
/// Points on the side `n` points away from are penetrating.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub n: Vec3,
    pub d: f32,
}

impl Plane {
    /// Plane from equation coefficients. The normal is normalised and `d`
    /// is taken as given.
    pub fn new(n: Vec3, d: f32) -> ClothResult<Self> {
        let n = n.try_normalize().ok_or(ClothError::DegeneratePlane)?;
        Ok(Self { n, d })
    }

    /// Plane through three points in counter-clockwise order; the normal
    /// follows the right-hand rule.
    pub fn from_triangle(p1: Vec3, p2: Vec3, p3: Vec3) -> ClothResult<Self> {
        let n = triangle_normal(p1, p2, p3).ok_or(ClothError::DegeneratePlane)?;
        Ok(Self { n, d: -n.dot(p1) })
    }

    /// Plane through `point` facing `normal`.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> ClothResult<Self> {
        let n = normal.try_normalize().ok_or(ClothError::DegeneratePlane)?;
        Ok(Self { n, d: -n.dot(point) })
    }

    /// Signed distance of `x`; negative behind the plane.
    #[inline]
    pub fn equation(&self, x: Vec3) -> f32 {
        self.n.dot(x) + self.d
    }

    /// Move a penetrating point onto the plane along the normal.
    #[inline]
    pub fn project(&self, x: Vec3) -> Option<Vec3> {
        let dist = self.equation(x);
        if dist < 0.0 {
            Some(x - self.n * dist)
        } else {
            None
        }
    }
}

/// Solid sphere `|x - origin|^2 = r^2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub origin: Vec3,
    pub r: f32,
}

impl Sphere {
    pub fn new(origin: Vec3, r: f32) -> Self {
        Self { origin, r }
    }

    /// `|x - origin|^2 - r^2`; negative inside.
    #[inline]
    pub fn equation(&self, x: Vec3) -> f32 {
        let v = x - self.origin;
        v.dot(v) - self.r * self.r
    }

    /// Push an interior point out to the surface along the ray from the
    /// centre.
    ///
    /// `r^2 + equation(x)` is the squared distance to the centre; a point
    /// at the centre has no ray and is left alone, as is any point of a
    /// sphere with non-positive radius.
    #[inline]
    pub fn project(&self, x: Vec3) -> Option<Vec3> {
        if self.r <= 0.0 {
            return None;
        }
        let r2 = self.r * self.r;
        let d2 = self.equation(x);
        if d2 >= 0.0 {
            return None;
        }
        let dist_sq = r2 + d2;
        if dist_sq < CENTER_EPSILON_SQ {
            return None;
        }
        Some(self.origin + (x - self.origin) * (self.r / dist_sq.sqrt()))
    }
}

/// Closed set of collision primitives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Collider {
    Plane(Plane),
    Sphere(Sphere),
}

impl Collider {
    #[inline]
    pub fn equation(&self, x: Vec3) -> f32 {
        match self {
            Collider::Plane(p) => p.equation(x),
            Collider::Sphere(s) => s.equation(x),
        }
    }

    #[inline]
    pub fn project(&self, x: Vec3) -> Option<Vec3> {
        match self {
            Collider::Plane(p) => p.project(x),
            Collider::Sphere(s) => s.project(x),
        }
    }

    /// Penetration depth in world units for a point where
    /// `equation(x) < 0`, zero otherwise.
    pub fn depth(&self, x: Vec3) -> f32 {
        match self {
            Collider::Plane(p) => (-p.equation(x)).max(0.0),
            Collider::Sphere(s) => (s.r - (x - s.origin).length()).max(0.0),
        }
    }
}

impl From<Plane> for Collider {
    fn from(p: Plane) -> Self {
        Collider::Plane(p)
    }
}

impl From<Sphere> for Collider {
    fn from(s: Sphere) -> Self {
        Collider::Sphere(s)
    }
}
