use glam::Mat4;

use crate::{rendering::bitmap_texture::Bitmap, HotspotResult};

/// Handle to a compiled and linked shader program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(pub u32);

/// Handle to a vertex attribute buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferHandle(pub u32);

/// Handle to a GPU texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// The kind of content a program samples from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// A decoded RGBA image
    Bitmap,
}

/// Per-vertex inputs of a program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Three floats per vertex
    Position,
    /// Two floats per vertex
    TexCoordinate,
}

impl Attribute {
    /// Number of floats each vertex carries for this attribute
    pub fn components(&self) -> usize {
        match self {
            Attribute::Position => 3,
            Attribute::TexCoordinate => 2,
        }
    }
}

/// Matrix uniforms a program exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixUniform {
    /// Model * view * projection
    Mvp,
    /// Model * view
    Mv,
}

/// Blend factors understood by [`Gpu::enable_blend`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendFactor {
    /// Source alpha
    SrcAlpha,
    /// `1 - source alpha`
    OneMinusSrcAlpha,
}

/// How vertices are assembled into triangles by [`Gpu::draw`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    /// Every vertex after the second makes a triangle with the two before it
    TriangleStrip,
}

/// The rendering backend a hotspot draws through.
///
/// Every method must be called on the thread that owns the GPU context. The hotspot
/// never calls into this trait from anywhere but its lifecycle hooks.
pub trait Gpu {
    /// Compile and link a program specialised for `content_type`
    fn build_program(&mut self, content_type: ContentType) -> HotspotResult<ProgramHandle>;
    /// Make `program` current
    fn use_program(&mut self, program: ProgramHandle);
    /// Release a program
    fn delete_program(&mut self, program: ProgramHandle);

    /// Upload per-vertex data for `attribute`
    fn upload_attribute(
        &mut self,
        program: ProgramHandle,
        attribute: Attribute,
        data: &[f32],
    ) -> HotspotResult<BufferHandle>;
    /// Point `attribute` of `program` at a previously uploaded buffer
    fn bind_attribute(&mut self, program: ProgramHandle, attribute: Attribute, buffer: BufferHandle);
    /// Release an attribute buffer
    fn delete_buffer(&mut self, buffer: BufferHandle);

    /// Set a matrix uniform on `program`
    fn set_matrix(&mut self, program: ProgramHandle, uniform: MatrixUniform, matrix: &Mat4);

    /// Allocate an empty texture
    fn create_texture(&mut self) -> HotspotResult<TextureHandle>;
    /// Replace the contents of `texture`
    fn upload_texture(&mut self, texture: TextureHandle, bitmap: &Bitmap) -> HotspotResult<()>;
    /// Bind `texture` to the sampler of `program`
    fn bind_texture(&mut self, program: ProgramHandle, texture: TextureHandle);
    /// Release a texture
    fn delete_texture(&mut self, texture: TextureHandle);

    /// Enable blending with the given factors
    fn enable_blend(&mut self, source: BlendFactor, destination: BlendFactor);
    /// Disable blending
    fn disable_blend(&mut self);
    /// Draw `vertex_count` vertices from the currently bound attributes
    fn draw(&mut self, topology: PrimitiveTopology, vertex_count: usize);
}
