//! Preload-phase asset handling. The sketch expects PNG assets under an
//! `assets/` directory; any file that is absent gets a deterministic
//! procedural substitute so the sketch runs from a bare checkout. Asset
//! failures are fatal startup errors, never per-frame conditions.

use std::path::Path;

use islet_core::constants::HEIGHTMAP_VARIANTS;
use islet_core::error::IsletError;

/// Side length of synthesized textures in pixels.
const SYNTH_SIZE: u32 = 512;

/// A decoded RGBA8 image ready for GPU upload.
pub struct SketchImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl SketchImage {
    /// Build a grayscale square image from a sampling function over
    /// normalized [0,1]^2 coordinates. The sample is clamped to [0,1].
    fn from_fn(size: u32, sample: impl Fn(f32, f32) -> f32) -> Self {
        let mut pixels = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            for x in 0..size {
                let u = (x as f32 + 0.5) / size as f32;
                let v = (y as f32 + 0.5) / size as f32;
                let g = (sample(u, v).clamp(0.0, 1.0) * 255.0).round() as u8;
                pixels.extend_from_slice(&[g, g, g, 255]);
            }
        }
        Self {
            width: size,
            height: size,
            pixels,
        }
    }
}

/// All image assets the shader samples, owned for the process lifetime.
pub struct SketchAssets {
    pub heightmaps: Vec<SketchImage>,
    pub wavemap: SketchImage,
    pub grain: SketchImage,
    pub clouds: SketchImage,
}

impl SketchAssets {
    /// Load every asset from `dir`, synthesizing substitutes for files that
    /// do not exist. Present-but-undecodable files are fatal.
    pub fn load(dir: &Path) -> Result<Self, IsletError> {
        let mut heightmaps = Vec::with_capacity(HEIGHTMAP_VARIANTS);
        for i in 0..HEIGHTMAP_VARIANTS {
            let path = dir.join(format!("heightmap{i}.png"));
            heightmaps.push(load_or_synth(&path, || synth::heightmap(i as u32))?);
        }

        Ok(Self {
            heightmaps,
            wavemap: load_or_synth(&dir.join("wavemap.png"), synth::wavemap)?,
            grain: load_or_synth(&dir.join("grain.png"), synth::grain)?,
            clouds: load_or_synth(&dir.join("clouds.png"), synth::clouds)?,
        })
    }
}

fn load_or_synth(
    path: &Path,
    synth: impl Fn() -> SketchImage,
) -> Result<SketchImage, IsletError> {
    if path.exists() {
        let img = load_png(path)?;
        log::info!(
            "Loaded {} ({}x{})",
            path.display(),
            img.width,
            img.height
        );
        Ok(img)
    } else {
        log::info!("{} not found, synthesizing", path.display());
        Ok(synth())
    }
}

fn load_png(path: &Path) -> Result<SketchImage, IsletError> {
    let image = image::open(path).map_err(|e| IsletError::AssetLoadFailed {
        path: path.display().to_string(),
        reason: format!("{e}"),
    })?;
    let rgba = image.to_rgba8();
    let (width, height) = (rgba.width(), rgba.height());
    if width == 0 || height == 0 {
        return Err(IsletError::AssetLoadFailed {
            path: path.display().to_string(),
            reason: format!("zero extent ({width}x{height})"),
        });
    }
    Ok(SketchImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

/// Deterministic procedural substitutes built on multi-octave value noise.
mod synth {
    use super::{SketchImage, SYNTH_SIZE};

    /// Integer lattice hash to [0,1). Plain avalanche mix; no external RNG
    /// needed for a one-shot preload.
    fn lattice(ix: i32, iy: i32, seed: u32) -> f32 {
        let mut h = (ix as u32)
            .wrapping_mul(0x85eb_ca6b)
            .wrapping_add((iy as u32).wrapping_mul(0xc2b2_ae35))
            .wrapping_add(seed.wrapping_mul(0x27d4_eb2f));
        h ^= h >> 15;
        h = h.wrapping_mul(0x2c1b_3c6d);
        h ^= h >> 12;
        h = h.wrapping_mul(0x297a_2d39);
        h ^= h >> 15;
        (h & 0x00ff_ffff) as f32 / 0x0100_0000 as f32
    }

    fn smooth(t: f32) -> f32 {
        t * t * (3.0 - 2.0 * t)
    }

    /// Bilinear value noise at one octave, in [0,1].
    fn value_noise(x: f32, y: f32, seed: u32) -> f32 {
        let ix = x.floor() as i32;
        let iy = y.floor() as i32;
        let fx = smooth(x - x.floor());
        let fy = smooth(y - y.floor());

        let n00 = lattice(ix, iy, seed);
        let n10 = lattice(ix + 1, iy, seed);
        let n01 = lattice(ix, iy + 1, seed);
        let n11 = lattice(ix + 1, iy + 1, seed);

        let nx0 = n00 + (n10 - n00) * fx;
        let nx1 = n01 + (n11 - n01) * fx;
        nx0 + (nx1 - nx0) * fy
    }

    /// Octave accumulation with per-octave seed offsets, normalized by the
    /// amplitude sum so the result stays in [0,1].
    fn fbm(x: f32, y: f32, seed: u32, octaves: u32, lacunarity: f32, persistence: f32) -> f32 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_amplitude = 0.0;
        for octave in 0..octaves {
            let octave_seed = seed.wrapping_add(octave.wrapping_mul(31337));
            total += value_noise(x * frequency, y * frequency, octave_seed) * amplitude;
            max_amplitude += amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }
        total / max_amplitude
    }

    /// Island heightmap: mid-frequency fBm under a radial mask that pulls
    /// elevation to zero at the canvas edge.
    pub fn heightmap(variant: u32) -> SketchImage {
        let seed = 0x1517_0000 + variant * 7919;
        SketchImage::from_fn(SYNTH_SIZE, |u, v| {
            let n = fbm(u * 5.0, v * 5.0, seed, 6, 2.0, 0.5);
            let dx = u - 0.5;
            let dy = v - 0.5;
            let r = (dx * dx + dy * dy).sqrt() * 2.0;
            let mask = (1.0 - r * r).max(0.0);
            (0.25 + 0.75 * n) * mask
        })
    }

    /// Tileable-enough wave pattern: crossed sine ridges broken up by a
    /// little noise.
    pub fn wavemap() -> SketchImage {
        use std::f32::consts::TAU;
        SketchImage::from_fn(SYNTH_SIZE, |u, v| {
            let ridge = ((u * 14.0 * TAU).sin() + (v * 9.0 * TAU + u * 4.0).sin()) * 0.25 + 0.5;
            let n = fbm(u * 12.0, v * 12.0, 0xaaf1, 3, 2.0, 0.5);
            ridge * 0.7 + n * 0.3
        })
    }

    /// High-frequency single-octave noise for terrain grain.
    pub fn grain() -> SketchImage {
        SketchImage::from_fn(SYNTH_SIZE, |u, v| {
            value_noise(u * 96.0, v * 96.0, 0x6e01)
        })
    }

    /// Low-frequency fBm cloud cover.
    pub fn clouds() -> SketchImage {
        SketchImage::from_fn(SYNTH_SIZE, |u, v| {
            fbm(u * 3.0, v * 3.0, 0xc10d, 5, 2.0, 0.55)
        })
    }
}
