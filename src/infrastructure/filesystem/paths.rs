use std::path::{Path, PathBuf};

pub const APP_DIR_NAME: &str = "SkinPackCreator";

pub fn data_root() -> PathBuf {
    let base = if cfg!(target_os = "windows") {
        std::env::var("APPDATA")
            .map(PathBuf::from)
            .unwrap_or_else(|_| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    } else {
        std::env::var("HOME")
            .map(|home| PathBuf::from(home).join(".local/share"))
            .unwrap_or_else(|_| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    };
    base.join(APP_DIR_NAME)
}

/// Replaces characters most filesystems refuse in a file name.
pub fn sanitize_file_stem(value: &str) -> String {
    let sanitized = value
        .trim()
        .chars()
        .map(|ch| {
            if ch.is_control() || matches!(ch, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') {
                '_'
            } else {
                ch
            }
        })
        .collect::<String>();
    let sanitized = sanitized.trim_matches('.').trim().to_string();

    if sanitized.is_empty() {
        "skinpack".to_string()
    } else {
        sanitized
    }
}

pub fn suggested_pack_file_name(pack_name: &str, extension: &str) -> String {
    let extension = extension.trim().trim_start_matches('.');
    format!("{}.{extension}", sanitize_file_stem(pack_name))
}

/// Archive member name for an uploaded file: its final path component.
pub fn texture_member_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|value| value.to_str())
        .map(str::to_string)
        .filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::{sanitize_file_stem, suggested_pack_file_name, texture_member_name};
    use std::path::Path;

    #[test]
    fn suggested_name_uses_pack_name_and_extension() {
        assert_eq!(suggested_pack_file_name("Heroes", "mcpack"), "Heroes.mcpack");
        assert_eq!(suggested_pack_file_name("My Pack", ".zip"), "My Pack.zip");
    }

    #[test]
    fn unsafe_characters_are_replaced() {
        assert_eq!(sanitize_file_stem("a/b:c?"), "a_b_c_");
        assert_eq!(sanitize_file_stem("  ..  "), "skinpack");
    }

    #[test]
    fn member_name_is_final_component() {
        assert_eq!(
            texture_member_name(Path::new("/tmp/skins/zed.png")).as_deref(),
            Some("zed.png")
        );
        assert_eq!(texture_member_name(Path::new("/")), None);
    }
}
