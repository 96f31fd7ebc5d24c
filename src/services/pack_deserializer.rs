use crate::{
    domain::{
        skin::{entry::SkinEntry, pack::SkinPack},
        skinpack::{
            lang, manifest::PackManifest, skins_json::SkinIndex, LANG_MEMBER, MANIFEST_MEMBER,
            SKINS_MEMBER,
        },
    },
    infrastructure::archive::zip_store::ArchiveReader,
    shared::{error::SkinPackError, result::AppResult},
};

/// Rebuilds a pack from archive bytes.
///
/// Display names are paired with skin-index entries by position. Index
/// entries whose texture is not in the archive are dropped without error.
pub fn deserialize(bytes: &[u8]) -> AppResult<SkinPack> {
    let mut reader = ArchiveReader::open(bytes)?;

    let skins_text = reader.read_text(SKINS_MEMBER)?;
    let index: SkinIndex =
        serde_json::from_str(&skins_text).map_err(|err| SkinPackError::InvalidDocument {
            member: SKINS_MEMBER.to_string(),
            reason: err.to_string(),
        })?;
    let lang_file = lang::parse(&reader.read_text(LANG_MEMBER)?);

    let pack_name = match lang_file.pack_name.clone() {
        Some(name) => name,
        None => manifest_pack_name(&mut reader).unwrap_or_default(),
    };
    let mut pack = SkinPack::new(pack_name);

    if lang_file.skins.len() != index.skins.len() {
        log::warn!(
            "{SKINS_MEMBER} lists {} skins but {LANG_MEMBER} names {}",
            index.skins.len(),
            lang_file.skins.len()
        );
    }

    for (position, skin) in index.skins.iter().enumerate() {
        let Some(texture_bytes) = reader.read(&skin.texture)? else {
            log::warn!(
                "Skipping skin {} ({}): texture not found in archive",
                position + 1,
                skin.texture
            );
            continue;
        };

        let display_name = lang_file.skins.get(position).cloned().unwrap_or_default();
        let entry = SkinEntry::with_details(
            skin.texture.as_str(),
            texture_bytes,
            display_name,
            skin.shape_variant(),
        );

        if let Err(err) = pack.push(entry) {
            log::warn!("Skipping skin {}: {err}", position + 1);
        }
    }

    log::info!(
        "Imported skin pack '{}' with {} of {} skins",
        pack.pack_name(),
        pack.len(),
        index.skins.len()
    );
    Ok(pack)
}

fn manifest_pack_name(reader: &mut ArchiveReader<'_>) -> Option<String> {
    let raw = reader.read(MANIFEST_MEMBER).ok().flatten()?;
    let manifest: PackManifest = serde_json::from_slice(&raw).ok()?;
    Some(manifest.header.name)
}
