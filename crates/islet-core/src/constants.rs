//! Single source of truth for shared constants. These values are used by
//! both Rust and the WGSL island shader.

/// Side length of the square canvas in pixels. Width and height are equal.
pub const CANVAS_SIZE: u32 = 800;

/// Number of heightmap variants the sketch cycles through.
pub const HEIGHTMAP_VARIANTS: usize = 9;

/// Heightmap variant selected at startup (reduced modulo the loaded count).
pub const DEFAULT_HEIGHTMAP: usize = 2;

/// Falloff exponent change per second while a raise/lower key is held.
pub const FALLOFF_RATE: f32 = 1.5;

/// Fixed z component of the sun-direction proxy vector.
pub const SUN_PROXY_DEPTH: f32 = -100.0;
