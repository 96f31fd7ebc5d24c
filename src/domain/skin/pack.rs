use super::entry::SkinEntry;
use crate::{
    domain::skinpack::{LANG_MEMBER, MANIFEST_MEMBER, SKINS_MEMBER},
    shared::{error::SkinPackError, result::AppResult},
};

const RESERVED_MEMBERS: [&str; 3] = [MANIFEST_MEMBER, SKINS_MEMBER, LANG_MEMBER];

fn spans_lines(value: &str) -> bool {
    value.contains(['\n', '\r'])
}

/// Named, ordered collection of skins. Entry order decides the generated
/// localization keys, so it is preserved through export and import.
#[derive(Debug, Clone, Default)]
pub struct SkinPack {
    pack_name: String,
    entries: Vec<SkinEntry>,
}

impl SkinPack {
    /// Names are stored trimmed, the way the lang file gives them back.
    pub fn new(pack_name: impl Into<String>) -> Self {
        Self {
            pack_name: pack_name.into().trim().to_string(),
            entries: Vec::new(),
        }
    }

    pub fn pack_name(&self) -> &str {
        &self.pack_name
    }

    pub fn set_pack_name(&mut self, value: impl Into<String>) {
        self.pack_name = value.into().trim().to_string();
    }

    pub fn entries(&self) -> &[SkinEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_texture(&self, texture_name: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.texture_name() == texture_name)
    }

    pub fn push(&mut self, entry: SkinEntry) -> AppResult<&mut SkinEntry> {
        if RESERVED_MEMBERS.contains(&entry.texture_name()) {
            return Err(SkinPackError::ReservedTextureName(
                entry.texture_name().to_string(),
            ));
        }
        if self.contains_texture(entry.texture_name()) {
            return Err(SkinPackError::DuplicateTexture(
                entry.texture_name().to_string(),
            ));
        }
        self.entries.push(entry);
        let last = self.entries.len() - 1;
        Ok(&mut self.entries[last])
    }

    pub fn entry(&self, index: usize) -> AppResult<&SkinEntry> {
        self.entries
            .get(index)
            .ok_or(SkinPackError::EntryNotFound(index))
    }

    pub fn entry_mut(&mut self, index: usize) -> AppResult<&mut SkinEntry> {
        self.entries
            .get_mut(index)
            .ok_or(SkinPackError::EntryNotFound(index))
    }

    pub fn remove(&mut self, index: usize) -> AppResult<SkinEntry> {
        if index >= self.entries.len() {
            return Err(SkinPackError::EntryNotFound(index));
        }
        Ok(self.entries.remove(index))
    }

    /// Checks everything export needs before any archive byte is produced.
    pub fn validate(&self) -> AppResult<()> {
        if self.entries.is_empty() {
            return Err(SkinPackError::EmptyPack);
        }
        if self.pack_name.is_empty() {
            return Err(SkinPackError::MissingPackName);
        }
        if spans_lines(&self.pack_name) {
            return Err(SkinPackError::PackNameLineBreak);
        }
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.display_name().is_empty() {
                return Err(SkinPackError::MissingEntryName(index + 1));
            }
            if spans_lines(entry.display_name()) {
                return Err(SkinPackError::EntryNameLineBreak(index + 1));
            }
            if RESERVED_MEMBERS.contains(&entry.texture_name()) {
                return Err(SkinPackError::ReservedTextureName(
                    entry.texture_name().to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SkinPack;
    use crate::{
        domain::skin::{entry::SkinEntry, shape::ShapeVariant},
        shared::error::SkinPackError,
    };

    fn named(texture: &str, name: &str) -> SkinEntry {
        SkinEntry::with_details(texture, vec![0], name, ShapeVariant::Standard)
    }

    #[test]
    fn texture_names_stay_unique() {
        let mut pack = SkinPack::new("Heroes");
        pack.push(named("zed.png", "Zed")).unwrap();

        let err = pack.push(named("zed.png", "Other")).unwrap_err();

        assert_eq!(err, SkinPackError::DuplicateTexture("zed.png".to_string()));
        assert_eq!(pack.len(), 1);
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut pack = SkinPack::new("Heroes");
        for texture in ["a.png", "b.png", "c.png"] {
            pack.push(named(texture, texture)).unwrap();
        }

        let removed = pack.remove(1).unwrap();

        assert_eq!(removed.texture_name(), "b.png");
        let remaining: Vec<_> = pack.entries().iter().map(|e| e.texture_name()).collect();
        assert_eq!(remaining, vec!["a.png", "c.png"]);
        assert_eq!(pack.remove(5).unwrap_err(), SkinPackError::EntryNotFound(5));
    }

    #[test]
    fn validation_order_matches_export_rules() {
        let mut pack = SkinPack::new("");
        assert_eq!(pack.validate(), Err(SkinPackError::EmptyPack));

        pack.push(named("a.png", "A")).unwrap();
        assert_eq!(pack.validate(), Err(SkinPackError::MissingPackName));

        pack.set_pack_name("Heroes");
        pack.push(named("b.png", "B")).unwrap();
        pack.push(named("c.png", "")).unwrap();
        assert_eq!(pack.validate(), Err(SkinPackError::MissingEntryName(3)));

        pack.entry_mut(2).unwrap().set_display_name("C");
        assert_eq!(pack.validate(), Ok(()));
    }

    #[test]
    fn names_with_line_breaks_fail_validation() {
        let mut pack = SkinPack::new("Heroes");
        pack.push(named("a.png", "Zed\nskinpack.SkinPackCreator=Evil"))
            .unwrap();
        assert_eq!(pack.validate(), Err(SkinPackError::EntryNameLineBreak(1)));

        pack.entry_mut(0).unwrap().set_display_name("Zed");
        pack.set_pack_name("Heroes\r\nEvil");
        assert_eq!(pack.validate(), Err(SkinPackError::PackNameLineBreak));
    }

    #[test]
    fn blank_names_are_stored_trimmed() {
        let mut pack = SkinPack::new("  Heroes ");
        assert_eq!(pack.pack_name(), "Heroes");

        pack.push(named("a.png", "   ")).unwrap();
        assert_eq!(pack.entries()[0].display_name(), "");
        assert_eq!(pack.validate(), Err(SkinPackError::MissingEntryName(1)));
    }

    #[test]
    fn document_names_cannot_hold_textures() {
        let mut pack = SkinPack::new("Heroes");
        for reserved in ["manifest.json", "skins.json", "texts/en_US.lang"] {
            assert_eq!(
                pack.push(named(reserved, "Doc")).unwrap_err(),
                SkinPackError::ReservedTextureName(reserved.to_string())
            );
        }
        assert!(pack.is_empty());
    }
}
