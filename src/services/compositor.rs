//! Flattens a skin texture into a front-facing preview.
//!
//! Region coordinates are written on the 128x128 grid and scaled down by
//! [`TextureGrid::scale`] for the 64-wide layouts. Every part is drawn twice
//! onto the same destination: the base layer, then the outer layer on top.
//! Sampling is nearest-neighbour pixel copies so edges stay crisp.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{codecs::png::PngEncoder, ColorType, ImageEncoder, Rgba, RgbaImage};

use super::texture::decode_texture;
use crate::{
    domain::skin::{shape::ShapeVariant, texture_grid::TextureGrid},
    shared::{error::SkinPackError, result::AppResult},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BodyPart {
    width: u32,
    height: u32,
    base: (u32, u32),
    overlay: (u32, u32),
    dest: (u32, u32),
}

fn body_parts(grid: TextureGrid, shape: ShapeVariant) -> [BodyPart; 6] {
    let arm = shape.arm_width();
    let legacy = grid.is_low_res();

    let head = BodyPart {
        width: 16,
        height: 16,
        base: (16, 16),
        overlay: (80, 16),
        dest: (arm, 0),
    };
    let right_arm = BodyPart {
        width: arm,
        height: 24,
        base: (88, 40),
        overlay: (88, 72),
        dest: (0, 16),
    };
    // 64x32 textures have no left limbs; the right ones are reused.
    let left_arm = BodyPart {
        base: if legacy { right_arm.base } else { (72, 104) },
        overlay: if legacy { right_arm.overlay } else { (104, 104) },
        dest: (arm + 16, 16),
        ..right_arm
    };
    let torso = BodyPart {
        width: 16,
        height: 24,
        base: (40, 40),
        overlay: (40, 72),
        dest: (arm, 16),
    };
    let right_leg = BodyPart {
        width: 8,
        height: 24,
        base: (8, 40),
        overlay: (8, 72),
        dest: (arm, 40),
    };
    let left_leg = BodyPart {
        base: if legacy { right_leg.base } else { (40, 104) },
        overlay: if legacy { right_leg.overlay } else { (8, 104) },
        dest: (arm + 8, 40),
        ..right_leg
    };

    [head, right_arm, left_arm, torso, right_leg, left_leg]
}

/// Output size for a grid/shape pair: `16r + 2 * arm` by `64r`.
pub fn thumbnail_dimensions(grid: TextureGrid, shape: ShapeVariant) -> (u32, u32) {
    (
        grid.scale(16 + 2 * shape.arm_width()),
        grid.scale(64),
    )
}

/// `image` must already be classified as `grid`. Source pixels outside the
/// texture (outer layers on 64x32 textures) are skipped.
pub fn composite(image: &RgbaImage, grid: TextureGrid, shape: ShapeVariant) -> RgbaImage {
    let (width, height) = thumbnail_dimensions(grid, shape);
    let mut output = RgbaImage::new(width, height);

    for part in body_parts(grid, shape) {
        for source in [part.base, part.overlay] {
            copy_region(image, &mut output, grid, part, source);
        }
    }

    output
}

fn copy_region(
    source: &RgbaImage,
    output: &mut RgbaImage,
    grid: TextureGrid,
    part: BodyPart,
    origin: (u32, u32),
) {
    let (sx, sy) = (grid.scale(origin.0), grid.scale(origin.1));
    let (dx, dy) = (grid.scale(part.dest.0), grid.scale(part.dest.1));
    let (width, height) = (grid.scale(part.width), grid.scale(part.height));

    for y in 0..height {
        for x in 0..width {
            let (src_x, src_y) = (sx + x, sy + y);
            let (dst_x, dst_y) = (dx + x, dy + y);
            if src_x >= source.width()
                || src_y >= source.height()
                || dst_x >= output.width()
                || dst_y >= output.height()
            {
                continue;
            }
            let pixel = *source.get_pixel(src_x, src_y);
            draw_over(output.get_pixel_mut(dst_x, dst_y), pixel);
        }
    }
}

/// Source-over alpha compositing in integer space.
fn draw_over(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let src_a = src[3] as u32;
    if src_a == 0 {
        return;
    }
    if src_a == 255 || dst[3] == 0 {
        *dst = src;
        return;
    }

    let dst_a = dst[3] as u32 * (255 - src_a) / 255;
    let out_a = src_a + dst_a;
    for channel in 0..3 {
        let blended = (src[channel] as u32 * src_a + dst[channel] as u32 * dst_a) / out_a;
        dst[channel] = blended.min(255) as u8;
    }
    dst[3] = out_a.min(255) as u8;
}

pub fn encode_png(image: &RgbaImage) -> AppResult<Vec<u8>> {
    let mut output = Vec::<u8>::new();
    let encoder = PngEncoder::new(&mut output);
    encoder
        .write_image(image, image.width(), image.height(), ColorType::Rgba8.into())
        .map_err(|err| SkinPackError::UnreadableImage(format!("could not encode preview: {err}")))?;
    Ok(output)
}

/// Decodes, classifies and composites a texture, returning PNG bytes.
pub fn composite_png(texture_bytes: &[u8], shape: ShapeVariant) -> AppResult<Vec<u8>> {
    let decoded = decode_texture(texture_bytes)?;
    let thumbnail = composite(&decoded.image, decoded.grid, shape);
    encode_png(&thumbnail)
}

pub fn png_data_url(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}
