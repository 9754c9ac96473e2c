/// A GPU texture fed by an asynchronous bitmap provider
pub mod bitmap_texture;

/// Supplies per-frame view and projection transforms
pub mod director;

/// The rendering backend contract
pub mod gpu;

/// A backend that records instead of drawing
pub mod headless;

/// Quad geometry
pub mod plane;

/// Shader programs
pub mod program;

pub use bitmap_texture::{Bitmap, BitmapCallback, BitmapProvider, BitmapTexture};
pub use director::{BasicDirector, Director};
pub use gpu::{
    Attribute, BlendFactor, BufferHandle, ContentType, Gpu, MatrixUniform, PrimitiveTopology,
    ProgramHandle, TextureHandle,
};
pub use headless::{GpuCommand, HeadlessGpu};
pub use plane::Plane;
pub use program::Program;
