//! Seam between the particle field and whatever draws it.

use crate::camera::Camera;
use glam::Vec3;

/// Static per-particle attributes, laid out as the instance buffer expects.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointAttributes {
    pub color: [f32; 3],
    pub size: f32,
}

/// Rendering backend for the particle field.
///
/// Attributes are uploaded once; positions change every frame. Implementations
/// must tolerate `render` being called before the first `resize`.
pub trait PointRenderer {
    fn upload_attributes(&mut self, attributes: &[PointAttributes]);
    fn upload_positions(&mut self, positions: &[Vec3]);
    /// Cosmetic shader clock; never feeds back into particle state.
    fn set_time(&mut self, time_sec: f32);
    fn set_camera(&mut self, camera: &Camera);
    fn resize(&mut self, width: u32, height: u32);
    fn render(&mut self) -> anyhow::Result<()>;
}

/// Used when no GPU is available: the field keeps updating, nothing is drawn.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub uploads: usize,
}

impl PointRenderer for NullRenderer {
    fn upload_attributes(&mut self, _attributes: &[PointAttributes]) {}

    fn upload_positions(&mut self, _positions: &[Vec3]) {
        self.uploads += 1;
    }

    fn set_time(&mut self, _time_sec: f32) {}

    fn set_camera(&mut self, _camera: &Camera) {}

    fn resize(&mut self, _width: u32, _height: u32) {}

    fn render(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}
