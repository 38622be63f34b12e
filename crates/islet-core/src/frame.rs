use glam::Vec2;

use crate::constants::{CANVAS_SIZE, SUN_PROXY_DEPTH};
use crate::controls::{ControlState, HeldKeys};
use crate::palette;

/// Snapshot of the input devices for one frame. Produced fresh each frame
/// by the host; read-only to the frame builder.
#[derive(Debug, Clone, Copy)]
pub struct FrameInputs {
    /// Live mouse position in canvas pixels. Not clamped to the canvas.
    pub mouse: Vec2,
    /// Seconds since the sketch started.
    pub elapsed: f32,
    /// Navigation keys currently held down.
    pub held: HeldKeys,
}

/// GPU-uploadable uniform block. Must match TerrainUniforms in island.wgsl.
///
/// Field order is chosen so the Rust layout matches WGSL uniform alignment
/// without explicit padding: six vec4s, then a vec3 padded by `time`, then
/// a vec2 followed by six scalars.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TerrainUniforms {
    pub col_water: [f32; 4],
    pub col_sand: [f32; 4],
    pub col_grass1: [f32; 4],
    pub col_grass2: [f32; 4],
    pub col_mountain: [f32; 4],
    pub col_snow: [f32; 4],
    /// Sun-direction proxy, unnormalized, in canvas-pixel scale.
    pub sun_dir: [f32; 3],
    pub time: f32,
    /// Mouse position normalized to [0,1]^2, bottom-left origin.
    pub mouse: [f32; 2],
    pub falloff_exponent: f32,
    pub shadows_enabled: f32,
    pub waves_enabled: f32,
    pub clouds_enabled: f32,
    pub edge_falloff_enabled: f32,
    pub colors_enabled: f32,
}

fn flag(enabled: bool) -> f32 {
    if enabled {
        1.0
    } else {
        0.0
    }
}

/// Build the complete uniform block for one frame. Every value is derived
/// from scratch; nothing persists across frames except what lives in the
/// control state itself.
pub fn build_uniforms(state: &ControlState, inputs: &FrameInputs) -> TerrainUniforms {
    let size = CANVAS_SIZE as f32;
    let center = size / 2.0;

    // Frozen capture wins over the live position, for the normalized mouse
    // and the sun proxy alike.
    let mouse = state.effective_mouse(inputs.mouse);

    // Bottom-left origin to match the shader's texture convention.
    let mouse_norm = [mouse.x / size, 1.0 - mouse.y / size];

    // Center-relative offset with a fixed negative depth. Recomputed every
    // frame; overrides any static sun vector.
    let sun_dir = [center - mouse.x, mouse.y - center, SUN_PROXY_DEPTH];

    TerrainUniforms {
        col_water: palette::COL_WATER,
        col_sand: palette::COL_SAND,
        col_grass1: palette::COL_GRASS1,
        col_grass2: palette::COL_GRASS2,
        col_mountain: palette::COL_MOUNTAIN,
        col_snow: palette::COL_SNOW,
        sun_dir,
        time: inputs.elapsed,
        mouse: mouse_norm,
        falloff_exponent: state.falloff_exponent,
        shadows_enabled: flag(state.shadows_enabled),
        waves_enabled: flag(state.waves_enabled),
        clouds_enabled: flag(state.clouds_enabled),
        edge_falloff_enabled: flag(state.edge_falloff_enabled),
        colors_enabled: flag(state.colors_enabled),
    }
}
