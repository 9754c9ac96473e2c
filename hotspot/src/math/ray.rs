use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Hit distance reported when a ray misses.
///
/// Positive infinity compares greater than every real hit distance, so the nearer of
/// several candidates is always just their `min`, including when all of them miss.
pub const NOT_HIT: f32 = f32::INFINITY;

const EPSILON: f32 = 1e-6;

/// A ray in world space, eg. the user's gaze or a touch projected into the scene
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    /// Where the ray starts
    pub origin: Vec3,
    /// Which way it points. Hit distances are measured in multiples of this vector.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// The point `distance` units along the ray
    pub fn point_at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }

    /// This ray expressed in the space described by `matrix`
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        Self {
            origin: matrix.transform_point3(self.origin),
            direction: matrix.transform_vector3(self.direction),
        }
    }
}

/// Möller–Trumbore ray/triangle intersection.
///
/// Returns the parametric distance along `ray` to the triangle `(v0, v1, v2)`, or
/// [`NOT_HIT`] if the ray is parallel to the triangle, misses it, or meets it behind
/// its origin. Both windings are accepted.
pub fn intersect_triangle(ray: &Ray, v0: Vec3, v1: Vec3, v2: Vec3) -> f32 {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    let p = ray.direction.cross(edge2);
    let determinant = edge1.dot(p);
    if determinant.abs() < EPSILON {
        return NOT_HIT;
    }
    let inverse_determinant = 1.0 / determinant;

    let t = ray.origin - v0;
    let u = t.dot(p) * inverse_determinant;
    if !(0.0..=1.0).contains(&u) {
        return NOT_HIT;
    }

    let q = t.cross(edge1);
    let v = ray.direction.dot(q) * inverse_determinant;
    if v < 0.0 || u + v > 1.0 {
        return NOT_HIT;
    }

    let distance = edge2.dot(q) * inverse_determinant;
    if distance > EPSILON {
        distance
    } else {
        NOT_HIT
    }
}
