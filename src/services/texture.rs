use image::{ImageFormat, RgbaImage};

use crate::{
    domain::skin::texture_grid::TextureGrid,
    shared::{error::SkinPackError, result::AppResult},
};

/// Upper bound for a single uploaded texture.
pub const MAX_TEXTURE_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct DecodedTexture {
    pub image: RgbaImage,
    pub grid: TextureGrid,
}

/// Decodes PNG bytes and classifies their grid. Nothing downstream runs on
/// textures that fail here.
pub fn decode_texture(bytes: &[u8]) -> AppResult<DecodedTexture> {
    if bytes.is_empty() {
        return Err(SkinPackError::UnreadableImage("file is empty".to_string()));
    }
    if bytes.len() > MAX_TEXTURE_BYTES {
        return Err(SkinPackError::UnreadableImage(
            "file exceeds the 5 MB limit".to_string(),
        ));
    }

    let format = image::guess_format(bytes)
        .map_err(|err| SkinPackError::UnreadableImage(format!("unknown format: {err}")))?;
    if format != ImageFormat::Png {
        return Err(SkinPackError::UnreadableImage(
            "skin textures must be PNG".to_string(),
        ));
    }

    let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .map_err(|err| SkinPackError::UnreadableImage(err.to_string()))?;
    let grid = TextureGrid::classify(image.width(), image.height())?;

    Ok(DecodedTexture {
        image: image.to_rgba8(),
        grid,
    })
}


#[cfg(test)]
mod tests {
    use super::{decode_texture, test_support::png_of_size};
    use crate::{domain::skin::texture_grid::TextureGrid, shared::error::SkinPackError};

    #[test]
    fn supported_textures_decode_with_their_grid() {
        assert_eq!(decode_texture(&png_of_size(64, 32)).unwrap().grid, TextureGrid::LowRes);
        assert_eq!(decode_texture(&png_of_size(64, 64)).unwrap().grid, TextureGrid::Standard);
        assert_eq!(decode_texture(&png_of_size(128, 128)).unwrap().grid, TextureGrid::HighRes);
    }

    #[test]
    fn unsupported_dimensions_report_invalid_format() {
        assert_eq!(
            decode_texture(&png_of_size(32, 32)).unwrap_err(),
            SkinPackError::InvalidFormat { width: 32, height: 32 }
        );
    }

    #[test]
    fn non_png_payloads_are_unreadable() {
        assert!(matches!(
            decode_texture(b"GIF89a....").unwrap_err(),
            SkinPackError::UnreadableImage(_)
        ));
        assert!(matches!(
            decode_texture(&[]).unwrap_err(),
            SkinPackError::UnreadableImage(_)
        ));
    }
}
