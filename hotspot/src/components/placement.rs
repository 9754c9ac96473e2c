use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Where a hotspot sits in the panorama: the transform from the quad's local space
/// to world space.
///
/// The quad is centred on its local origin in the XY plane, so the translation is
/// the centre of the hotspot and the rotation decides which way it faces.
#[derive(Clone, PartialEq, Debug, Copy, Deserialize, Serialize)]
pub struct Placement {
    /// The translation of the hotspot
    pub translation: Vec3,
    /// The rotation of the hotspot
    pub rotation: Quat,
    /// The non-uniform scale of the hotspot
    pub scale: Vec3,
}

impl Default for Placement {
    fn default() -> Self {
        Self::original()
    }
}

impl Placement {
    /// The identity placement: centred on the world origin, unrotated, unscaled
    pub fn original() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    /// An unrotated placement at `translation`
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::original()
        }
    }

    /// Replace the rotation with one built from yaw (around Y), pitch (around X) and
    /// roll (around Z), in radians, applied in that order.
    pub fn with_rotation_euler(mut self, yaw: f32, pitch: f32, roll: f32) -> Self {
        self.rotation = Quat::from_euler(EulerRot::YXZ, yaw, pitch, roll);
        self
    }

    /// Replace the scale
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// The model matrix, ie. the transform from local to world space
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}
