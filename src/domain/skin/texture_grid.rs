use crate::shared::{error::SkinPackError, result::AppResult};

/// Pixel layout family of a skin texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureGrid {
    /// 64x32, legacy layout without separate left limbs or body overlays.
    LowRes,
    /// 64x64
    Standard,
    /// 128x128
    HighRes,
}

impl TextureGrid {
    pub fn classify(width: u32, height: u32) -> AppResult<Self> {
        match (width, height) {
            (64, 32) => Ok(Self::LowRes),
            (64, 64) => Ok(Self::Standard),
            (128, 128) => Ok(Self::HighRes),
            _ => Err(SkinPackError::InvalidFormat { width, height }),
        }
    }

    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Self::LowRes => (64, 32),
            Self::Standard => (64, 64),
            Self::HighRes => (128, 128),
        }
    }

    /// Converts a coordinate expressed on the 128x128 grid into this grid.
    /// Every layout coordinate is even, so halving is exact.
    pub fn scale(self, value: u32) -> u32 {
        match self {
            Self::HighRes => value,
            Self::LowRes | Self::Standard => value / 2,
        }
    }

    pub fn is_low_res(self) -> bool {
        self == Self::LowRes
    }
}
