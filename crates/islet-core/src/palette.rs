//! Fixed island color palette. Not user-configurable; the color bands in
//! the shader blend between these six RGBA values.

/// Convert 0-255 RGB components to a normalized RGBA shader color.
/// Alpha is always 1.0.
pub const fn shader_color(r: u8, g: u8, b: u8) -> [f32; 4] {
    [
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        1.0,
    ]
}

/// Deep water.
pub const COL_WATER: [f32; 4] = shader_color(40, 157, 166);

/// Beach sand at the waterline.
pub const COL_SAND: [f32; 4] = shader_color(196, 199, 109);

/// Low grass.
pub const COL_GRASS1: [f32; 4] = shader_color(147, 199, 109);

/// High grass / forest.
pub const COL_GRASS2: [f32; 4] = shader_color(52, 97, 45);

/// Bare mountain rock.
pub const COL_MOUNTAIN: [f32; 4] = shader_color(110, 112, 103);

/// Snow caps.
pub const COL_SNOW: [f32; 4] = shader_color(207, 224, 227);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_colors_valid() {
        for col in [
            COL_WATER,
            COL_SAND,
            COL_GRASS1,
            COL_GRASS2,
            COL_MOUNTAIN,
            COL_SNOW,
        ] {
            for c in col {
                assert!((0.0..=1.0).contains(&c));
            }
            assert_eq!(col[3], 1.0);
        }
    }

    #[test]
    fn test_shader_color_endpoints() {
        assert_eq!(shader_color(0, 0, 0), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(shader_color(255, 255, 255), [1.0, 1.0, 1.0, 1.0]);
    }
}
