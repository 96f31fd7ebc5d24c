use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::{
    app::tasks::serialize_async,
    domain::skin::pack::SkinPack,
    infrastructure::filesystem::{config::CreatorConfig, paths::suggested_pack_file_name},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResult {
    pub output_path: String,
    pub size_bytes: usize,
    pub skin_count: usize,
}

/// Writes `<output_dir>/<pack name>.<extension>`. Nothing touches disk
/// unless the pack validates and serializes.
pub async fn export_skin_pack(
    pack: SkinPack,
    output_dir: &Path,
    config: &CreatorConfig,
) -> Result<ExportResult, String> {
    pack.validate().map_err(|err| err.to_string())?;

    let file_name = suggested_pack_file_name(pack.pack_name(), &config.pack_extension);
    let skin_count = pack.len();
    let bytes = serialize_async(pack, config.operation_timeout())
        .await
        .map_err(|err| err.to_string())?;

    fs::create_dir_all(output_dir).map_err(|err| {
        format!("Could not create output folder {}: {err}", output_dir.display())
    })?;
    let output_path = output_dir.join(file_name);
    fs::write(&output_path, &bytes)
        .map_err(|err| format!("Could not write {}: {err}", output_path.display()))?;

    log::info!("Wrote skin pack to {}", output_path.display());
    Ok(ExportResult {
        output_path: output_path.display().to_string(),
        size_bytes: bytes.len(),
        skin_count,
    })
}
