pub mod lang;
pub mod manifest;
pub mod skins_json;

pub const MANIFEST_MEMBER: &str = "manifest.json";
pub const SKINS_MEMBER: &str = "skins.json";
pub const LANG_MEMBER: &str = "texts/en_US.lang";

/// Namespace used for `serialize_name`, `localization_name` and lang keys.
pub const PACK_NAMESPACE: &str = "SkinPackCreator";
