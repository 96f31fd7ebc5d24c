use std::{fs, path::Path};

use crate::{
    app::tasks::deserialize_async, domain::skin::pack::SkinPack,
    infrastructure::filesystem::config::CreatorConfig,
};

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedSkin {
    pub texture_name: String,
    pub display_name: String,
    pub shape: String,
    pub size_bytes: usize,
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportedPackSummary {
    pub pack_name: String,
    pub skins: Vec<ImportedSkin>,
}

impl From<&SkinPack> for ImportedPackSummary {
    fn from(pack: &SkinPack) -> Self {
        Self {
            pack_name: pack.pack_name().to_string(),
            skins: pack
                .entries()
                .iter()
                .map(|entry| ImportedSkin {
                    texture_name: entry.texture_name().to_string(),
                    display_name: entry.display_name().to_string(),
                    shape: entry.shape_variant().as_str().to_string(),
                    size_bytes: entry.texture_bytes().len(),
                })
                .collect(),
        }
    }
}

pub async fn import_skin_pack(path: &Path, config: &CreatorConfig) -> Result<SkinPack, String> {
    if !path.is_file() {
        return Err(format!("Skin pack not found: {}", path.display()));
    }
    let bytes = fs::read(path).map_err(|err| format!("Could not read {}: {err}", path.display()))?;

    deserialize_async(bytes, config.operation_timeout())
        .await
        .map_err(|err| err.to_string())
}
