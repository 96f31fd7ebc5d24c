use std::io::{Cursor, Read, Write};

use zip::{result::ZipError, write::SimpleFileOptions, CompressionMethod, ZipArchive, ZipWriter};

use crate::shared::{error::SkinPackError, result::AppResult};

/// Ceiling for the preallocation taken from a member's declared size.
const CAPACITY_HINT_LIMIT: usize = 1024 * 1024;

/// Named byte stream inside an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveMember {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ArchiveMember {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

pub fn write_archive(members: &[ArchiveMember]) -> AppResult<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::<u8>::new()));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    for member in members {
        zip.start_file(member.name.as_str(), options)
            .map_err(|err| SkinPackError::Archive(format!("could not add {}: {err}", member.name)))?;
        zip.write_all(&member.bytes)
            .map_err(|err| SkinPackError::Archive(format!("could not write {}: {err}", member.name)))?;
    }

    let cursor = zip
        .finish()
        .map_err(|err| SkinPackError::Archive(format!("could not finish archive: {err}")))?;
    Ok(cursor.into_inner())
}

/// Read-only view over archive bytes held in memory.
pub struct ArchiveReader<'a> {
    zip: ZipArchive<Cursor<&'a [u8]>>,
}

impl<'a> ArchiveReader<'a> {
    pub fn open(bytes: &'a [u8]) -> AppResult<Self> {
        let zip = ZipArchive::new(Cursor::new(bytes))
            .map_err(|err| SkinPackError::CorruptArchive(err.to_string()))?;
        Ok(Self { zip })
    }

    /// `Ok(None)` when no member has that name.
    pub fn read(&mut self, name: &str) -> AppResult<Option<Vec<u8>>> {
        let mut entry = match self.zip.by_name(name) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => return Ok(None),
            Err(err) => {
                return Err(SkinPackError::CorruptArchive(format!(
                    "could not open {name}: {err}"
                )))
            }
        };

        let hint = usize::try_from(entry.size()).unwrap_or(usize::MAX);
        let mut bytes = Vec::with_capacity(hint.min(CAPACITY_HINT_LIMIT));
        entry
            .read_to_end(&mut bytes)
            .map_err(|err| SkinPackError::CorruptArchive(format!("could not read {name}: {err}")))?;
        Ok(Some(bytes))
    }

    pub fn read_required(&mut self, name: &str) -> AppResult<Vec<u8>> {
        self.read(name)?
            .ok_or_else(|| SkinPackError::MissingMember(name.to_string()))
    }

    pub fn read_text(&mut self, name: &str) -> AppResult<String> {
        let bytes = self.read_required(name)?;
        String::from_utf8(bytes).map_err(|err| SkinPackError::InvalidDocument {
            member: name.to_string(),
            reason: format!("not UTF-8: {err}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{write_archive, ArchiveMember, ArchiveReader, CAPACITY_HINT_LIMIT};
    use crate::shared::error::SkinPackError;

    #[test]
    fn members_are_readable_by_name() {
        let bytes = write_archive(&[
            ArchiveMember::new("manifest.json", "{}"),
            ArchiveMember::new("texts/en_US.lang", "a=b\n"),
            ArchiveMember::new("zed.png", vec![0u8, 1, 2, 255]),
        ])
        .unwrap();

        let mut reader = ArchiveReader::open(&bytes).unwrap();

        assert_eq!(reader.read("zed.png").unwrap(), Some(vec![0u8, 1, 2, 255]));
        assert_eq!(reader.read_text("texts/en_US.lang").unwrap(), "a=b\n");
        assert_eq!(reader.read("ghost.png").unwrap(), None);
        assert_eq!(
            reader.read_required("skins.json").unwrap_err(),
            SkinPackError::MissingMember("skins.json".to_string())
        );
    }

    #[test]
    fn members_larger_than_the_capacity_hint_read_fully() {
        let large = vec![7u8; CAPACITY_HINT_LIMIT * 3 / 2];
        let bytes = write_archive(&[ArchiveMember::new("big.png", large.clone())]).unwrap();

        let mut reader = ArchiveReader::open(&bytes).unwrap();

        assert_eq!(reader.read("big.png").unwrap(), Some(large));
    }

    #[test]
    fn garbage_is_reported_as_corrupt() {
        let result = ArchiveReader::open(b"definitely not a zip file");

        assert!(matches!(result, Err(SkinPackError::CorruptArchive(_))));
    }
}
