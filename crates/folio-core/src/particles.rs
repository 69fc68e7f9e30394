use crate::constants::*;
use crate::render::{PointAttributes, PointRenderer};
use glam::{Vec2, Vec3};
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct FieldParams {
    pub count: usize,
    /// Half extents of the wrap volume.
    pub half_extent: Vec3,
    pub parallax_per_px: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            half_extent: Vec3::new(FIELD_HALF_X, FIELD_HALF_Y, FIELD_HALF_Z),
            parallax_per_px: PARALLAX_PER_PX,
        }
    }
}

/// Inputs sampled once per animation frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    /// Seconds since the field was created.
    pub elapsed_sec: f32,
    /// Pointer position in CSS pixels.
    pub pointer: Vec2,
    /// Viewport size in CSS pixels.
    pub viewport: Vec2,
}

impl FrameInput {
    /// Input with the pointer parked at the viewport center (no parallax).
    pub fn centered(elapsed_sec: f32, viewport: Vec2) -> Self {
        Self {
            elapsed_sec,
            pointer: viewport * 0.5,
            viewport,
        }
    }
}

/// Fixed-size point cloud drifting upward through a box.
///
/// Only positions change after construction; velocities, sizes and colors are
/// assigned once.
pub struct ParticleField {
    params: FieldParams,
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    attributes: Vec<PointAttributes>,
    rng: StdRng,
    dirty: bool,
}

impl ParticleField {
    pub fn new(params: FieldParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let h = params.half_extent;
        let mut positions = Vec::with_capacity(params.count);
        let mut velocities = Vec::with_capacity(params.count);
        let mut attributes = Vec::with_capacity(params.count);
        for _ in 0..params.count {
            positions.push(Vec3::new(
                rng.gen_range(-h.x..=h.x),
                rng.gen_range(-h.y..=h.y),
                rng.gen_range(-h.z..=h.z),
            ));
            velocities.push(Vec3::new(
                rng.gen_range(-VELOCITY_XZ_SPAN..=VELOCITY_XZ_SPAN),
                rng.gen_range(VELOCITY_Y_MIN..=VELOCITY_Y_MAX),
                rng.gen_range(-VELOCITY_XZ_SPAN..=VELOCITY_XZ_SPAN),
            ));
            let color = PARTICLE_PALETTE[rng.gen_range(0..PARTICLE_PALETTE.len())];
            attributes.push(PointAttributes {
                color,
                size: rng.gen_range(SIZE_MIN..=SIZE_MAX),
            });
        }
        log::debug!("[particles] created {} particles", params.count);
        Self {
            params,
            positions,
            velocities,
            attributes,
            rng,
            dirty: true,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    pub fn attributes(&self) -> &[PointAttributes] {
        &self.attributes
    }

    /// Advance one frame. Velocity is applied per frame, not scaled by the
    /// frame interval, so apparent speed follows the display refresh rate.
    pub fn advance(&mut self, input: &FrameInput) {
        let t = input.elapsed_sec;
        let h = self.params.half_extent;
        let parallax_x = (input.pointer.x - input.viewport.x * 0.5) * self.params.parallax_per_px;
        let parallax_y = (input.pointer.y - input.viewport.y * 0.5) * self.params.parallax_per_px;

        for (p, v) in self.positions.iter_mut().zip(&self.velocities) {
            *p += *v;
            p.x += (t + p.y * DRIFT_X_PHASE_PER_Y).sin() * DRIFT_X_AMPLITUDE;
            p.z += (t + p.x * DRIFT_Z_PHASE_PER_X).cos() * DRIFT_Z_AMPLITUDE;
            p.x += parallax_x;
            p.y -= parallax_y;

            if p.y > h.y {
                // respawn at the bottom
                p.y = -h.y;
                p.x = self.rng.gen_range(-h.x..=h.x);
                p.z = self.rng.gen_range(-h.z..=h.z);
            } else if p.y < -h.y {
                p.y = h.y;
            }
            p.x = reflect_to_opposite(p.x, h.x);
            p.z = reflect_to_opposite(p.z, h.z);
        }
        self.dirty = true;
    }

    /// Returns true once after each `advance` (and after construction).
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Push the position buffer to the renderer if it changed.
    pub fn sync_to(&mut self, renderer: &mut dyn PointRenderer) {
        if self.take_dirty() {
            renderer.upload_positions(&self.positions);
        }
    }
}

#[inline]
fn reflect_to_opposite(value: f32, half: f32) -> f32 {
    if value > half {
        -half
    } else if value < -half {
        half
    } else {
        value
    }
}
