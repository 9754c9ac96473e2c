/// Where a hotspot sits in the world
pub mod placement;
/// Quad extents
pub mod size;

pub use placement::Placement;
pub use size::Size;
