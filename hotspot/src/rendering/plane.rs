use std::collections::HashMap;

use crate::{
    components::Size,
    rendering::gpu::{Attribute, BufferHandle, Gpu, PrimitiveTopology, ProgramHandle},
    HotspotResult,
};

/// Number of vertices in a plane. Hit testing relies on this.
pub const PLANE_VERTEX_COUNT: usize = 4;

/// A flat quad centred on the local origin in the XY plane, facing +Z.
///
/// Vertices are laid out as a triangle strip:
///
/// ```text
/// v0 ---- v1
/// |     / |
/// |   /   |
/// | /     |
/// v2 ---- v3
/// ```
///
/// so the two triangles are `(v0, v1, v2)` and `(v1, v2, v3)`.
#[derive(Debug, Clone)]
pub struct Plane {
    size: Size,
    vertices: Option<Vec<f32>>,
    tex_coordinates: Option<Vec<f32>>,
    buffers: HashMap<(usize, Attribute), BufferHandle>,
}

impl Plane {
    /// Create a plane. No mesh data exists until [`Plane::prepare`] is called.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            vertices: None,
            tex_coordinates: None,
            buffers: HashMap::new(),
        }
    }

    /// Generate the mesh data
    pub fn prepare(&mut self) {
        let (half_width, half_height) = (self.size.width / 2., self.size.height / 2.);

        #[rustfmt::skip]
        let vertices = vec![
            -half_width, half_height, 0.,  // v0
            half_width, half_height, 0.,   // v1
            -half_width, -half_height, 0., // v2
            half_width, -half_height, 0.,  // v3
        ];
        #[rustfmt::skip]
        let tex_coordinates = vec![
            0., 0., // v0
            1., 0., // v1
            0., 1., // v2
            1., 1., // v3
        ];

        self.vertices = Some(vertices);
        self.tex_coordinates = Some(tex_coordinates);
    }

    /// Local-space positions as packed float triples, if prepared.
    ///
    /// A plane looks the same from every eye, so `index` only exists to match the
    /// per-index upload API.
    pub fn vertices_buffer(&self, _index: usize) -> Option<&[f32]> {
        self.vertices.as_deref()
    }

    /// Upload positions for `index` if that hasn't happened yet, then bind them
    pub fn upload_vertices_buffer_if_need(
        &mut self,
        gpu: &mut dyn Gpu,
        program: ProgramHandle,
        index: usize,
    ) -> HotspotResult<()> {
        let Some(data) = self.vertices.as_deref() else {
            return Ok(());
        };
        upload_if_need(&mut self.buffers, gpu, program, index, Attribute::Position, data)
    }

    /// Upload texture coordinates for `index` if that hasn't happened yet, then bind them
    pub fn upload_tex_coordinate_buffer_if_need(
        &mut self,
        gpu: &mut dyn Gpu,
        program: ProgramHandle,
        index: usize,
    ) -> HotspotResult<()> {
        let Some(data) = self.tex_coordinates.as_deref() else {
            return Ok(());
        };
        upload_if_need(
            &mut self.buffers,
            gpu,
            program,
            index,
            Attribute::TexCoordinate,
            data,
        )
    }

    /// Issue the draw call for the bound buffers
    pub fn draw(&self, gpu: &mut dyn Gpu) {
        gpu.draw(PrimitiveTopology::TriangleStrip, PLANE_VERTEX_COUNT);
    }

    /// Release every uploaded buffer and forget the mesh data
    pub fn destroy(&mut self, gpu: &mut dyn Gpu) {
        for (_, buffer) in self.buffers.drain() {
            gpu.delete_buffer(buffer);
        }
        self.vertices = None;
        self.tex_coordinates = None;
    }
}

fn upload_if_need(
    buffers: &mut HashMap<(usize, Attribute), BufferHandle>,
    gpu: &mut dyn Gpu,
    program: ProgramHandle,
    index: usize,
    attribute: Attribute,
    data: &[f32],
) -> HotspotResult<()> {
    let buffer = match buffers.get(&(index, attribute)) {
        Some(buffer) => *buffer,
        None => {
            let buffer = gpu.upload_attribute(program, attribute, data)?;
            log::debug!(
                "[HOTSPOT_PLANE] Uploaded {:?} for index {} ({} floats)",
                attribute,
                index,
                data.len()
            );
            buffers.insert((index, attribute), buffer);
            buffer
        }
    };
    gpu.bind_attribute(program, attribute, buffer);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::headless::{GpuCommand, HeadlessGpu};
    use crate::rendering::ContentType;

    #[test]
    pub fn test_vertices_absent_until_prepared() {
        let mut plane = Plane::new(Size::new(2.0, 1.0).unwrap());
        assert!(plane.vertices_buffer(0).is_none());

        plane.prepare();
        let vertices = plane.vertices_buffer(0).unwrap();
        assert_eq!(vertices.len(), PLANE_VERTEX_COUNT * 3);
        assert_eq!(&vertices[0..3], &[-1.0, 0.5, 0.0]);
        assert_eq!(&vertices[9..12], &[1.0, -0.5, 0.0]);
    }

    #[test]
    pub fn test_buffers_uploaded_once_per_index() {
        let mut gpu = HeadlessGpu::default();
        let program = gpu.build_program(ContentType::Bitmap).unwrap();
        let mut plane = Plane::new(Size::new(1.0, 1.0).unwrap());
        plane.prepare();

        for _ in 0..3 {
            for eye in 0..2 {
                plane
                    .upload_vertices_buffer_if_need(&mut gpu, program, eye)
                    .unwrap();
                plane
                    .upload_tex_coordinate_buffer_if_need(&mut gpu, program, eye)
                    .unwrap();
            }
        }

        let uploads = gpu
            .commands()
            .iter()
            .filter(|c| matches!(c, GpuCommand::UploadAttribute { .. }))
            .count();
        let binds = gpu
            .commands()
            .iter()
            .filter(|c| matches!(c, GpuCommand::BindAttribute { .. }))
            .count();
        assert_eq!(uploads, 4);
        assert_eq!(binds, 12);

        plane.destroy(&mut gpu);
        assert_eq!(gpu.live_buffers(), 0);
        assert!(plane.vertices_buffer(0).is_none());
    }
}
