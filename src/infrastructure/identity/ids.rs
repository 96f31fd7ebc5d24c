use uuid::Uuid;

/// Source of fresh identifiers for pack manifests.
pub trait IdGenerator {
    fn new_id(&self) -> String;
}

/// Random RFC 4122 v4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Generator;

impl IdGenerator for UuidV4Generator {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Hyphenated, lowercase v4 shape: version nibble `4`, variant `8|9|a|b`.
pub fn is_v4_shaped(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 36 {
        return false;
    }

    let hex_ok = bytes.iter().enumerate().all(|(index, byte)| match index {
        8 | 13 | 18 | 23 => *byte == b'-',
        _ => byte.is_ascii_digit() || (b'a'..=b'f').contains(byte),
    });

    hex_ok && bytes[14] == b'4' && matches!(bytes[19], b'8' | b'9' | b'a' | b'b')
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{is_v4_shaped, IdGenerator, UuidV4Generator};

    #[test]
    fn generated_ids_are_v4_shaped() {
        let generator = UuidV4Generator;
        for _ in 0..64 {
            let id = generator.new_id();
            assert!(is_v4_shaped(&id), "not a v4 uuid: {id}");
        }
    }

    #[test]
    fn generated_ids_do_not_repeat() {
        let generator = UuidV4Generator;
        let ids: HashSet<String> = (0..256).map(|_| generator.new_id()).collect();

        assert_eq!(ids.len(), 256);
    }

    #[test]
    fn shape_check_rejects_wrong_version_or_variant() {
        assert!(is_v4_shaped("0f8fad5b-d9cb-469f-a165-70867728950e"));
        assert!(!is_v4_shaped("0f8fad5b-d9cb-169f-a165-70867728950e"));
        assert!(!is_v4_shaped("0f8fad5b-d9cb-469f-c165-70867728950e"));
        assert!(!is_v4_shaped("0f8fad5bd9cb469fa16570867728950e"));
    }
}
