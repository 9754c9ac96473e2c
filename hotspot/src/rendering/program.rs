use crate::{
    rendering::gpu::{ContentType, Gpu, ProgramHandle},
    HotspotResult,
};

/// A shader program specialised for one kind of content.
///
/// Created without touching the GPU; [`Program::build`] compiles it once a GPU context
/// exists.
#[derive(Debug, Clone)]
pub struct Program {
    content_type: ContentType,
    handle: Option<ProgramHandle>,
}

impl Program {
    /// Create an unbuilt program
    pub fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            handle: None,
        }
    }

    /// Compile and link the program. Building an already built program is a no-op.
    pub fn build(&mut self, gpu: &mut dyn Gpu) -> HotspotResult<ProgramHandle> {
        if let Some(handle) = self.handle {
            return Ok(handle);
        }
        let handle = gpu.build_program(self.content_type)?;
        self.handle = Some(handle);
        Ok(handle)
    }

    /// Make this program current. Does nothing if it was never built.
    pub fn use_program(&self, gpu: &mut dyn Gpu) {
        if let Some(handle) = self.handle {
            gpu.use_program(handle);
        }
    }

    /// The GPU handle, if built
    pub fn handle(&self) -> Option<ProgramHandle> {
        self.handle
    }

    /// Release the program
    pub fn destroy(&mut self, gpu: &mut dyn Gpu) {
        if let Some(handle) = self.handle.take() {
            gpu.delete_program(handle);
        }
    }
}
