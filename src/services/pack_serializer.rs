use crate::{
    domain::{
        skin::pack::SkinPack,
        skinpack::{
            lang,
            manifest::PackManifest,
            skins_json::{SkinIndex, SkinIndexEntry},
            LANG_MEMBER, MANIFEST_MEMBER, SKINS_MEMBER,
        },
    },
    infrastructure::{
        archive::zip_store::{write_archive, ArchiveMember},
        identity::ids::{IdGenerator, UuidV4Generator},
    },
    shared::{error::SkinPackError, result::AppResult},
};

/// The three generated documents of a pack, before archiving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackDocuments {
    pub manifest: PackManifest,
    pub skin_index: SkinIndex,
    pub lang: String,
}

pub fn build_documents(pack: &SkinPack, ids: &dyn IdGenerator) -> AppResult<PackDocuments> {
    pack.validate()?;

    let manifest = PackManifest::new(pack.pack_name(), ids.new_id(), ids.new_id());

    let mut skin_index = SkinIndex::new();
    skin_index.skins = pack
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            SkinIndexEntry::new(index + 1, entry.texture_name(), entry.shape_variant())
        })
        .collect();

    let lang = lang::render(
        pack.pack_name(),
        pack.entries().iter().map(|entry| entry.display_name()),
    );

    Ok(PackDocuments {
        manifest,
        skin_index,
        lang,
    })
}

pub fn build_members(pack: &SkinPack, ids: &dyn IdGenerator) -> AppResult<Vec<ArchiveMember>> {
    let documents = build_documents(pack, ids)?;

    let manifest = to_json(MANIFEST_MEMBER, &documents.manifest)?;
    let skin_index = to_json(SKINS_MEMBER, &documents.skin_index)?;

    let mut members = Vec::with_capacity(pack.len() + 3);
    members.push(ArchiveMember::new(MANIFEST_MEMBER, manifest));
    members.push(ArchiveMember::new(SKINS_MEMBER, skin_index));
    members.push(ArchiveMember::new(LANG_MEMBER, documents.lang));
    for entry in pack.entries() {
        members.push(ArchiveMember::new(
            entry.texture_name(),
            entry.texture_bytes().to_vec(),
        ));
    }
    Ok(members)
}

pub fn serialize_with(pack: &SkinPack, ids: &dyn IdGenerator) -> AppResult<Vec<u8>> {
    let members = build_members(pack, ids)?;
    let bytes = write_archive(&members)?;
    log::info!(
        "Serialized skin pack '{}' with {} skins ({} bytes)",
        pack.pack_name(),
        pack.len(),
        bytes.len()
    );
    Ok(bytes)
}

pub fn serialize(pack: &SkinPack) -> AppResult<Vec<u8>> {
    serialize_with(pack, &UuidV4Generator)
}

fn to_json<T: serde::Serialize>(member: &str, value: &T) -> AppResult<String> {
    serde_json::to_string(value).map_err(|err| SkinPackError::InvalidDocument {
        member: member.to_string(),
        reason: err.to_string(),
    })
}
