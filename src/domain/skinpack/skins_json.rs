use serde::{Deserialize, Serialize};

use super::PACK_NAMESPACE;
use crate::domain::skin::shape::ShapeVariant;

pub const INDEX_GEOMETRY: &str = "skinpacks/skins.json";
pub const FREE_SKIN: &str = "free";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinIndex {
    #[serde(default)]
    pub geometry: String,
    pub skins: Vec<SkinIndexEntry>,
    #[serde(default)]
    pub serialize_name: String,
    #[serde(default)]
    pub localization_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinIndexEntry {
    #[serde(default)]
    pub localization_name: String,
    #[serde(default)]
    pub geometry: String,
    pub texture: String,
    #[serde(rename = "type", default)]
    pub r#type: String,
}

impl SkinIndex {
    pub fn new() -> Self {
        Self {
            geometry: INDEX_GEOMETRY.to_string(),
            skins: Vec::new(),
            serialize_name: PACK_NAMESPACE.to_string(),
            localization_name: PACK_NAMESPACE.to_string(),
        }
    }
}

impl Default for SkinIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SkinIndexEntry {
    /// `position` is 1-based, matching the `SkinN` localization key.
    pub fn new(position: usize, texture: &str, shape: ShapeVariant) -> Self {
        Self {
            localization_name: format!("Skin{position}"),
            geometry: shape.geometry().to_string(),
            texture: texture.to_string(),
            r#type: FREE_SKIN.to_string(),
        }
    }

    pub fn shape_variant(&self) -> ShapeVariant {
        ShapeVariant::from_geometry(&self.geometry)
    }
}

#[cfg(test)]
mod tests {
    use super::{SkinIndex, SkinIndexEntry};
    use crate::domain::skin::shape::ShapeVariant;
    use serde_json::json;

    #[test]
    fn entry_uses_slim_suffix_for_slim_shape() {
        let entry = SkinIndexEntry::new(2, "ann.png", ShapeVariant::Slim);

        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({
                "localization_name": "Skin2",
                "geometry": "geometry.humanoid.customSlim",
                "texture": "ann.png",
                "type": "free"
            })
        );
        assert_eq!(entry.shape_variant(), ShapeVariant::Slim);
    }

    #[test]
    fn index_parses_without_optional_fields() {
        let parsed: SkinIndex =
            serde_json::from_str(r#"{"skins":[{"texture":"a.png"}]}"#).unwrap();

        assert_eq!(parsed.skins.len(), 1);
        assert_eq!(parsed.skins[0].texture, "a.png");
        assert_eq!(parsed.skins[0].shape_variant(), ShapeVariant::Slim);
    }
}
