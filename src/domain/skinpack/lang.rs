//! `texts/en_US.lang`: one `key=value` line per localized string.

use super::PACK_NAMESPACE;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LangFile {
    pub pack_name: Option<String>,
    /// Skin display names in the order their lines appear.
    pub skins: Vec<String>,
}

pub fn pack_name_key() -> String {
    format!("skinpack.{PACK_NAMESPACE}")
}

pub fn skin_key(position: usize) -> String {
    format!("skin.{PACK_NAMESPACE}.Skin{position}")
}

/// Every line, including the last, ends with `\n`.
pub fn render<'a, I>(pack_name: &str, display_names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut text = format!("{}={pack_name}\n", pack_name_key());
    for (index, name) in display_names.into_iter().enumerate() {
        text.push_str(&format!("{}={name}\n", skin_key(index + 1)));
    }
    text
}

pub fn parse(text: &str) -> LangFile {
    let mut result = LangFile::default();

    for line in text.split('\n') {
        let line = line.trim_end_matches('\r');
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim().to_string();

        // `skinpack` shares its prefix with `skin`, check it first.
        if key.starts_with("skinpack") {
            result.pack_name = Some(value);
        } else if key.starts_with("skin") {
            result.skins.push(value);
        }
    }

    result
}
