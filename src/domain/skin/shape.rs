use serde::{Deserialize, Serialize};

pub const STANDARD_GEOMETRY: &str = "geometry.humanoid.custom";
pub const SLIM_GEOMETRY: &str = "geometry.humanoid.customSlim";

/// Arm-width body model of a skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeVariant {
    #[default]
    #[serde(alias = "broad")]
    Standard,
    Slim,
}

impl ShapeVariant {
    /// Arm width in pixels on the 128x128 grid.
    pub fn arm_width(self) -> u32 {
        match self {
            Self::Standard => 8,
            Self::Slim => 6,
        }
    }

    pub fn geometry(self) -> &'static str {
        match self {
            Self::Standard => STANDARD_GEOMETRY,
            Self::Slim => SLIM_GEOMETRY,
        }
    }

    /// Anything not ending in the standard custom geometry id is slim.
    pub fn from_geometry(geometry: &str) -> Self {
        if geometry.trim().ends_with(STANDARD_GEOMETRY) {
            Self::Standard
        } else {
            Self::Slim
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Slim => "slim",
        }
    }
}
