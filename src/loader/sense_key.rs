//! Parsing of sense keys and two-column mapping rows.
//!
//! Two key shapes occur in bundled resources:
//!
//! - `<pos><offset>`, e.g. `n12345678`: a raw edition-local offset
//! - `<pos>#<index>`, e.g. `n#42`: a zero-based position in a language's own
//!   per-part-of-speech offset list
//!
//! Parsers return a plain message on failure; callers attach the resource name
//! and line number.

use crate::pos::PartOfSpeech;

/// Separator between the part-of-speech tag and the index of an index key.
pub const INDEX_SEPARATOR: char = '#';

/// A key carrying a raw offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetKey {
    pub pos: PartOfSpeech,
    pub offset: u64,
}

/// A key carrying an index into an offset list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexKey {
    pub pos: PartOfSpeech,
    pub index: usize,
}

/// Split a row into exactly two comma-separated fields.
pub fn split_row(line: &str) -> Result<(&str, &str), String> {
    let mut fields = line.split(',');
    match (fields.next(), fields.next(), fields.next()) {
        (Some(first), Some(second), None) => Ok((first, second)),
        _ => Err(format!("expected two comma-separated fields, got '{line}'")),
    }
}

/// Parse a `<pos><offset>` key.
pub fn parse_offset_key(field: &str) -> Result<OffsetKey, String> {
    let (pos, rest) = split_pos(field)?;
    let offset = parse_decimal(rest).ok_or_else(|| format!("invalid offset in key '{field}'"))?;
    Ok(OffsetKey { pos, offset })
}

/// Parse a `<pos>#<index>` key.
pub fn parse_index_key(field: &str) -> Result<IndexKey, String> {
    let (pos, rest) = split_pos(field)?;
    let index = rest
        .strip_prefix(INDEX_SEPARATOR)
        .ok_or_else(|| format!("missing '{INDEX_SEPARATOR}' in key '{field}'"))?;
    let index = parse_decimal(index)
        .and_then(|value| usize::try_from(value).ok())
        .ok_or_else(|| format!("invalid index in key '{field}'"))?;
    Ok(IndexKey { pos, index })
}

fn split_pos(field: &str) -> Result<(PartOfSpeech, &str), String> {
    let mut chars = field.chars();
    let tag = chars
        .next()
        .ok_or_else(|| "empty sense key".to_string())?;
    let pos = PartOfSpeech::from_key(tag)
        .ok_or_else(|| format!("unknown part-of-speech tag '{tag}' in key '{field}'"))?;
    Ok((pos, chars.as_str()))
}

/// Parse an unsigned decimal made of ASCII digits only.
pub(crate) fn parse_decimal(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_key() {
        assert_eq!(
            parse_offset_key("n12345678"),
            Ok(OffsetKey {
                pos: PartOfSpeech::Noun,
                offset: 12345678
            })
        );
        assert_eq!(parse_offset_key("v00000100").unwrap().offset, 100);
        assert_eq!(parse_offset_key("r0").unwrap().offset, 0);
        assert_eq!(
            parse_offset_key("s00001740").unwrap().pos,
            PartOfSpeech::Adjective
        );

        assert!(parse_offset_key("").is_err());
        assert!(parse_offset_key("n").is_err());
        assert!(parse_offset_key("x123").is_err());
        assert!(parse_offset_key("n-12").is_err());
        assert!(parse_offset_key("n 12").is_err());
    }

    #[test]
    fn test_index_key() {
        assert_eq!(
            parse_index_key("a#42"),
            Ok(IndexKey {
                pos: PartOfSpeech::Adjective,
                index: 42
            })
        );
        assert!(parse_index_key("a42").is_err());
        assert!(parse_index_key("a#").is_err());
        assert!(parse_index_key("#1").is_err());
    }

    #[test]
    fn test_split_row() {
        assert_eq!(split_row("n#0,n100"), Ok(("n#0", "n100")));
        assert!(split_row("n#0").is_err());
        assert!(split_row("n#0,n100,n7").is_err());
    }
}
