use serde::{Deserialize, Serialize};

pub const FORMAT_VERSION: u32 = 1;
pub const PACK_VERSION: [u32; 3] = [1, 1, 0];
pub const SKIN_PACK_MODULE: &str = "skin_pack";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackManifest {
    pub format_version: u32,
    pub header: ManifestHeader,
    pub modules: Vec<ManifestModule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestHeader {
    pub name: String,
    pub uuid: String,
    pub version: [u32; 3],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestModule {
    #[serde(rename = "type")]
    pub r#type: String,
    pub uuid: String,
    pub version: [u32; 3],
}

impl PackManifest {
    pub fn new(name: &str, header_uuid: String, module_uuid: String) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            header: ManifestHeader {
                name: name.to_string(),
                uuid: header_uuid,
                version: PACK_VERSION,
            },
            modules: vec![ManifestModule {
                r#type: SKIN_PACK_MODULE.to_string(),
                uuid: module_uuid,
                version: PACK_VERSION,
            }],
        }
    }
}
