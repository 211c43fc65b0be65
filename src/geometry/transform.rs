//! Translation/rotation/scale of the noise domain.

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Affine transform described by its components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpaceTrs {
    pub translation: Vec3,
    /// Euler angles in degrees, applied Z first, then X, then Y.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for SpaceTrs {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl SpaceTrs {
    /// Uniform scale, no rotation or translation.
    pub fn with_scale(scale: f32) -> Self {
        Self {
            scale: Vec3::splat(scale),
            ..Default::default()
        }
    }

    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.rotation.y.to_radians(),
            self.rotation.x.to_radians(),
            self.rotation.z.to_radians(),
        )
    }

    /// Scale, then rotate, then translate.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation_quat(), self.translation)
    }
}

/// Constant drift of a [`SpaceTrs`] over time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainMotion {
    /// Units per second.
    pub translation_velocity: Vec3,
    /// Degrees per second.
    pub rotation_velocity: Vec3,
}

impl DomainMotion {
    pub fn is_static(&self) -> bool {
        self.translation_velocity == Vec3::ZERO && self.rotation_velocity == Vec3::ZERO
    }

    /// Moves `domain` forward by `dt` seconds.
    pub fn advance(&self, domain: &mut SpaceTrs, dt: f32) {
        domain.translation += self.translation_velocity * dt;
        domain.rotation += self.rotation_velocity * dt;
    }
}
