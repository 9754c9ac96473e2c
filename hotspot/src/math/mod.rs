/// Rays and ray-triangle intersection
pub mod ray;

pub use ray::{intersect_triangle, Ray, NOT_HIT};
