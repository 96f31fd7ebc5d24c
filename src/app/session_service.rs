use crate::{
    domain::skin::{entry::SkinEntry, pack::SkinPack, shape::ShapeVariant, texture_grid::TextureGrid},
    services::{compositor, pack_deserializer, pack_serializer, texture::decode_texture},
    shared::{error::SkinPackError, result::AppResult},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Whatever collects uploads and the pack name from the user.
pub trait PackSource {
    fn pending_uploads(&mut self) -> Vec<PendingUpload>;
    fn pack_name(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    pub file_name: String,
    /// Position of the new entry in the pack when the upload was accepted.
    pub position: Option<usize>,
    pub result: Result<TextureGrid, SkinPackError>,
}

impl UploadOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Owns the one pack being edited. All mutation goes through here.
#[derive(Debug, Default)]
pub struct SkinPackSession {
    pack: SkinPack,
}

impl SkinPackSession {
    pub fn new(pack_name: impl Into<String>) -> Self {
        Self {
            pack: SkinPack::new(pack_name),
        }
    }

    pub fn pack(&self) -> &SkinPack {
        &self.pack
    }

    pub fn into_pack(self) -> SkinPack {
        self.pack
    }

    pub fn set_pack_name(&mut self, value: impl Into<String>) {
        self.pack.set_pack_name(value);
    }

    /// Validates the texture and appends it; returns its position.
    pub fn upload(&mut self, file_name: &str, bytes: Vec<u8>) -> AppResult<(usize, TextureGrid)> {
        if self.pack.contains_texture(file_name) {
            return Err(SkinPackError::DuplicateTexture(file_name.to_string()));
        }
        let decoded = decode_texture(&bytes)?;
        self.pack.push(SkinEntry::new(file_name, bytes))?;
        Ok((self.pack.len() - 1, decoded.grid))
    }

    /// One outcome per file; a rejected file never stops the rest.
    pub fn upload_batch(&mut self, uploads: Vec<PendingUpload>) -> Vec<UploadOutcome> {
        uploads
            .into_iter()
            .map(|upload| {
                match self.upload(&upload.file_name, upload.bytes) {
                    Ok((position, grid)) => UploadOutcome {
                        file_name: upload.file_name,
                        position: Some(position),
                        result: Ok(grid),
                    },
                    Err(err) => {
                        log::warn!("Rejected upload {}: {err}", upload.file_name);
                        UploadOutcome {
                            file_name: upload.file_name,
                            position: None,
                            result: Err(err),
                        }
                    }
                }
            })
            .collect()
    }

    pub fn sync_from(&mut self, source: &mut dyn PackSource) -> Vec<UploadOutcome> {
        self.pack.set_pack_name(source.pack_name());
        let uploads = source.pending_uploads();
        self.upload_batch(uploads)
    }

    pub fn remove(&mut self, index: usize) -> AppResult<SkinEntry> {
        self.pack.remove(index)
    }

    pub fn set_display_name(&mut self, index: usize, value: impl Into<String>) -> AppResult<()> {
        self.pack.entry_mut(index)?.set_display_name(value);
        Ok(())
    }

    pub fn set_shape_variant(&mut self, index: usize, value: ShapeVariant) -> AppResult<()> {
        self.pack.entry_mut(index)?.set_shape_variant(value);
        Ok(())
    }

    pub fn on_shape_change<F>(&mut self, index: usize, observer: F) -> AppResult<()>
    where
        F: Fn(ShapeVariant) + Send + Sync + 'static,
    {
        self.pack.entry_mut(index)?.on_shape_change(observer);
        Ok(())
    }

    /// PNG preview of one entry using its current shape.
    pub fn preview(&self, index: usize) -> AppResult<Vec<u8>> {
        let entry = self.pack.entry(index)?;
        compositor::composite_png(entry.texture_bytes(), entry.shape_variant())
    }

    pub fn export(&self) -> AppResult<Vec<u8>> {
        pack_serializer::serialize(&self.pack)
    }

    /// Replaces the current pack with the archive's contents.
    pub fn import(&mut self, bytes: &[u8]) -> AppResult<()> {
        self.pack = pack_deserializer::deserialize(bytes)?;
        Ok(())
    }
}
