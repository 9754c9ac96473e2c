use std::collections::HashSet;

use glam::Mat4;

use crate::{
    rendering::{
        bitmap_texture::Bitmap,
        gpu::{
            Attribute, BlendFactor, BufferHandle, ContentType, Gpu, MatrixUniform,
            PrimitiveTopology, ProgramHandle, TextureHandle,
        },
    },
    HotspotResult,
};

/// A command received by [`HeadlessGpu`]
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum GpuCommand {
    BuildProgram(ContentType, ProgramHandle),
    UseProgram(ProgramHandle),
    DeleteProgram(ProgramHandle),
    UploadAttribute {
        program: ProgramHandle,
        attribute: Attribute,
        buffer: BufferHandle,
        len: usize,
    },
    BindAttribute {
        program: ProgramHandle,
        attribute: Attribute,
        buffer: BufferHandle,
    },
    DeleteBuffer(BufferHandle),
    SetMatrix {
        program: ProgramHandle,
        uniform: MatrixUniform,
        matrix: Mat4,
    },
    CreateTexture(TextureHandle),
    UploadTexture {
        texture: TextureHandle,
        width: u32,
        height: u32,
    },
    BindTexture {
        program: ProgramHandle,
        texture: TextureHandle,
    },
    DeleteTexture(TextureHandle),
    EnableBlend(BlendFactor, BlendFactor),
    DisableBlend,
    Draw(PrimitiveTopology, usize),
}

/// A [`Gpu`] that draws nothing and remembers everything it was asked to do.
///
/// Useful for running hotspots without a window, and for asserting on exactly what a
/// render step did.
#[derive(Debug, Default)]
pub struct HeadlessGpu {
    commands: Vec<GpuCommand>,
    next_handle: u32,
    buffers: HashSet<BufferHandle>,
    textures: HashSet<TextureHandle>,
    blend_enabled: bool,
    fail_uploads: bool,
}

impl HeadlessGpu {
    /// Everything received so far, oldest first
    pub fn commands(&self) -> &[GpuCommand] {
        &self.commands
    }

    /// How many draw calls were recorded
    pub fn draw_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, GpuCommand::Draw(..)))
            .count()
    }

    /// Is blending currently enabled?
    pub fn blend_enabled(&self) -> bool {
        self.blend_enabled
    }

    /// Attribute buffers not yet deleted
    pub fn live_buffers(&self) -> usize {
        self.buffers.len()
    }

    /// Textures not yet deleted
    pub fn live_textures(&self) -> usize {
        self.textures.len()
    }

    /// Make every subsequent texture and attribute upload fail
    pub fn fail_uploads(&mut self, fail: bool) {
        self.fail_uploads = fail;
    }

    fn next_handle(&mut self) -> u32 {
        self.next_handle += 1;
        self.next_handle
    }
}

impl Gpu for HeadlessGpu {
    fn build_program(&mut self, content_type: ContentType) -> HotspotResult<ProgramHandle> {
        let handle = ProgramHandle(self.next_handle());
        self.commands
            .push(GpuCommand::BuildProgram(content_type, handle));
        Ok(handle)
    }

    fn use_program(&mut self, program: ProgramHandle) {
        self.commands.push(GpuCommand::UseProgram(program));
    }

    fn delete_program(&mut self, program: ProgramHandle) {
        self.commands.push(GpuCommand::DeleteProgram(program));
    }

    fn upload_attribute(
        &mut self,
        program: ProgramHandle,
        attribute: Attribute,
        data: &[f32],
    ) -> HotspotResult<BufferHandle> {
        if self.fail_uploads {
            return Err(crate::HotspotError::Gpu("attribute upload failed".into()));
        }
        if data.len() % attribute.components() != 0 {
            return Err(crate::HotspotError::Gpu(format!(
                "{} floats is not a whole number of {:?} vertices",
                data.len(),
                attribute
            )));
        }
        let buffer = BufferHandle(self.next_handle());
        self.buffers.insert(buffer);
        self.commands.push(GpuCommand::UploadAttribute {
            program,
            attribute,
            buffer,
            len: data.len(),
        });
        Ok(buffer)
    }

    fn bind_attribute(&mut self, program: ProgramHandle, attribute: Attribute, buffer: BufferHandle) {
        self.commands.push(GpuCommand::BindAttribute {
            program,
            attribute,
            buffer,
        });
    }

    fn delete_buffer(&mut self, buffer: BufferHandle) {
        self.buffers.remove(&buffer);
        self.commands.push(GpuCommand::DeleteBuffer(buffer));
    }

    fn set_matrix(&mut self, program: ProgramHandle, uniform: MatrixUniform, matrix: &Mat4) {
        self.commands.push(GpuCommand::SetMatrix {
            program,
            uniform,
            matrix: *matrix,
        });
    }

    fn create_texture(&mut self) -> HotspotResult<TextureHandle> {
        let texture = TextureHandle(self.next_handle());
        self.textures.insert(texture);
        self.commands.push(GpuCommand::CreateTexture(texture));
        Ok(texture)
    }

    fn upload_texture(&mut self, texture: TextureHandle, bitmap: &Bitmap) -> HotspotResult<()> {
        if self.fail_uploads {
            return Err(crate::HotspotError::Gpu("texture upload failed".into()));
        }
        self.commands.push(GpuCommand::UploadTexture {
            texture,
            width: bitmap.width(),
            height: bitmap.height(),
        });
        Ok(())
    }

    fn bind_texture(&mut self, program: ProgramHandle, texture: TextureHandle) {
        self.commands
            .push(GpuCommand::BindTexture { program, texture });
    }

    fn delete_texture(&mut self, texture: TextureHandle) {
        self.textures.remove(&texture);
        self.commands.push(GpuCommand::DeleteTexture(texture));
    }

    fn enable_blend(&mut self, source: BlendFactor, destination: BlendFactor) {
        self.blend_enabled = true;
        self.commands
            .push(GpuCommand::EnableBlend(source, destination));
    }

    fn disable_blend(&mut self) {
        self.blend_enabled = false;
        self.commands.push(GpuCommand::DisableBlend);
    }

    fn draw(&mut self, topology: PrimitiveTopology, vertex_count: usize) {
        self.commands.push(GpuCommand::Draw(topology, vertex_count));
    }
}
