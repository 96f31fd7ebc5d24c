#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkinPackError {
    InvalidFormat {
        width: u32,
        height: u32,
    },
    UnreadableImage(String),
    EmptyPack,
    MissingPackName,
    /// 1-based position of the entry without a display name.
    MissingEntryName(usize),
    PackNameLineBreak,
    /// 1-based position of the entry whose display name spans lines.
    EntryNameLineBreak(usize),
    DuplicateTexture(String),
    /// Texture named like one of the generated pack documents.
    ReservedTextureName(String),
    EntryNotFound(usize),
    CorruptArchive(String),
    MissingMember(String),
    InvalidDocument {
        member: String,
        reason: String,
    },
    Archive(String),
    Io(String),
    Timeout(&'static str),
    TaskFailed(String),
}

impl std::fmt::Display for SkinPackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat { width, height } => write!(
                f,
                "Invalid skin format. Got {width}x{height}, expected 64x32, 64x64 or 128x128"
            ),
            Self::UnreadableImage(msg) => write!(f, "Could not read skin image: {msg}"),
            Self::EmptyPack => write!(f, "No skins present in the skin pack."),
            Self::MissingPackName => write!(f, "Skin pack has no name."),
            Self::MissingEntryName(index) => write!(f, "Skin {index} has no name."),
            Self::PackNameLineBreak => write!(f, "Skin pack name must fit on one line."),
            Self::EntryNameLineBreak(index) => {
                write!(f, "Skin {index} name must fit on one line.")
            }
            Self::ReservedTextureName(name) => {
                write!(f, "{name} is reserved for the skin pack and cannot be a skin file name.")
            }
            Self::DuplicateTexture(name) => {
                write!(f, "A skin named {name} is already in the skin pack.")
            }
            Self::EntryNotFound(index) => write!(f, "No skin at position {index}."),
            Self::CorruptArchive(msg) => write!(f, "Skin pack archive is corrupt: {msg}"),
            Self::MissingMember(name) => write!(f, "Skin pack archive is missing {name}"),
            Self::InvalidDocument { member, reason } => write!(f, "Invalid {member}: {reason}"),
            Self::Archive(msg) => write!(f, "Archive error: {msg}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
            Self::Timeout(operation) => write!(f, "Timed out while running {operation}"),
            Self::TaskFailed(msg) => write!(f, "Background task failed: {msg}"),
        }
    }
}

impl std::error::Error for SkinPackError {}

impl From<std::io::Error> for SkinPackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::SkinPackError;

    #[test]
    fn validation_messages_match_user_facing_text() {
        assert_eq!(
            SkinPackError::EmptyPack.to_string(),
            "No skins present in the skin pack."
        );
        assert_eq!(
            SkinPackError::MissingPackName.to_string(),
            "Skin pack has no name."
        );
        assert_eq!(
            SkinPackError::MissingEntryName(3).to_string(),
            "Skin 3 has no name."
        );
    }
}
