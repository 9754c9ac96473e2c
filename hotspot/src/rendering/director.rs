use glam::{Mat4, Quat, Vec3};

use crate::{
    components::Placement,
    rendering::gpu::{Gpu, MatrixUniform, ProgramHandle},
};

/// Supplies the per-frame view and projection a plugin draws with.
pub trait Director {
    /// The render target is now `width` x `height` pixels
    fn update_viewport(&mut self, width: u32, height: u32);

    /// Compute the combined transform for an object at `placement` and hand it to
    /// `program`. `stereo_adjust` asks for the current eye's offset to be applied.
    fn shot(
        &mut self,
        gpu: &mut dyn Gpu,
        program: ProgramHandle,
        placement: &Placement,
        stereo_adjust: bool,
    );
}

const DEFAULT_FOV_Y: f32 = std::f32::consts::FRAC_PI_2;
const DEFAULT_NEAR: f32 = 0.1;
const DEFAULT_FAR: f32 = 500.0;

/// A perspective camera sitting inside the panorama.
#[derive(Debug, Clone)]
pub struct BasicDirector {
    /// The camera's pose in world space
    pub camera_rotation: Quat,
    /// The camera's position in world space
    pub camera_position: Vec3,
    /// Horizontal offset of the current eye from the camera, in world units
    pub eye_offset: f32,
    /// Vertical field of view, in radians
    pub fov_y: f32,
    near: f32,
    far: f32,
    width: u32,
    height: u32,
    projection: Mat4,
}

impl Default for BasicDirector {
    fn default() -> Self {
        let mut director = Self {
            camera_rotation: Quat::IDENTITY,
            camera_position: Vec3::ZERO,
            eye_offset: 0.0,
            fov_y: DEFAULT_FOV_Y,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            width: 1,
            height: 1,
            projection: Mat4::IDENTITY,
        };
        director.update_projection();
        director
    }
}

impl BasicDirector {
    /// Set the near and far clip planes
    pub fn with_clip_planes(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self.update_projection();
        self
    }

    /// The current projection matrix
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// The view matrix, optionally shifted for the current eye
    pub fn view(&self, stereo_adjust: bool) -> Mat4 {
        let camera = Mat4::from_rotation_translation(self.camera_rotation, self.camera_position);
        let view = camera.inverse();
        if stereo_adjust {
            Mat4::from_translation(Vec3::new(-self.eye_offset, 0.0, 0.0)) * view
        } else {
            view
        }
    }

    fn update_projection(&mut self) {
        let aspect = self.width.max(1) as f32 / self.height.max(1) as f32;
        self.projection = Mat4::perspective_rh_gl(self.fov_y, aspect, self.near, self.far);
    }
}

impl Director for BasicDirector {
    fn update_viewport(&mut self, width: u32, height: u32) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.update_projection();
    }

    fn shot(
        &mut self,
        gpu: &mut dyn Gpu,
        program: ProgramHandle,
        placement: &Placement,
        stereo_adjust: bool,
    ) {
        let model_view = self.view(stereo_adjust) * placement.matrix();
        let model_view_projection = self.projection * model_view;
        gpu.set_matrix(program, MatrixUniform::Mv, &model_view);
        gpu.set_matrix(program, MatrixUniform::Mvp, &model_view_projection);
    }
}
