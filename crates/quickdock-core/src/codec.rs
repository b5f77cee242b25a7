//! Encoding of the persisted target list.
//!
//! The whole list is stored as a single delimited string:
//! `com.a|com.b|com.c`. An empty list is the empty string, and an absent
//! stored value (the key was never written) also decodes to an empty
//! list. Historical writers could leave a stray leading delimiter in the
//! stored value; `decode` tolerates one and `encode` never produces one.

use crate::config::DockConfig;
use crate::target::TargetId;

/// Join targets into the persisted wire form.
///
/// The result never starts or ends with the delimiter; a leading
/// delimiter inherited from a legacy value is stripped rather than
/// written back.
pub fn encode(targets: &[TargetId]) -> String {
    let mut out = String::new();
    for target in targets {
        if !out.is_empty() {
            out.push(DockConfig::DELIMITER);
        }
        out.push_str(target.as_str());
    }

    match out.strip_prefix(DockConfig::DELIMITER) {
        Some(stripped) => stripped.to_string(),
        None => out,
    }
}

/// Parse a stored value back into the ordered target list.
///
/// `None` means the key has never been written, which decodes to an
/// empty list just like a stored empty string. Empty segments — from
/// leading, trailing, or doubled delimiters — are dropped, never
/// surfaced as empty identifiers. Non-empty segments are kept verbatim.
pub fn decode(raw: Option<&str>) -> Vec<TargetId> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    if raw.is_empty() {
        return Vec::new();
    }

    raw.split(DockConfig::DELIMITER)
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| TargetId::new(segment).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(ids: &[&str]) -> Vec<TargetId> {
        ids.iter().map(|id| TargetId::new(*id).unwrap()).collect()
    }

    #[test]
    fn test_roundtrip() {
        let list = targets(&["com.a", "com.b", "com.c"]);
        assert_eq!(decode(Some(&encode(&list))), list);
    }

    #[test]
    fn test_encode_empty_list() {
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn test_encode_single() {
        assert_eq!(encode(&targets(&["com.a"])), "com.a");
    }

    #[test]
    fn test_decode_absent_and_empty() {
        assert_eq!(decode(None), vec![]);
        assert_eq!(decode(Some("")), vec![]);
    }

    #[test]
    fn test_decode_tolerates_legacy_leading_delimiter() {
        assert_eq!(decode(Some("|com.a")), targets(&["com.a"]));
    }

    #[test]
    fn test_decode_drops_empty_segments() {
        assert_eq!(decode(Some("com.a||com.b")), targets(&["com.a", "com.b"]));
        assert_eq!(decode(Some("com.a|")), targets(&["com.a"]));
        assert_eq!(decode(Some("||")), vec![]);
    }

    #[test]
    fn test_encode_never_reintroduces_leading_delimiter() {
        // Decoding a legacy value and re-encoding it must normalize it.
        let list = decode(Some("|com.a|com.b"));
        assert_eq!(encode(&list), "com.a|com.b");
    }
}
