//! Front-matter parsing
//!
//! Content files open with a YAML block delimited by `---` lines; everything
//! after the closing delimiter is the body. The block is deserialized into
//! the caller's metadata type, so a file missing required fields fails here
//! rather than producing a half-formed item.

use serde::de::DeserializeOwned;
use serde::Deserializer;

use super::ContentError;

/// Parse a content file into its metadata and body.
///
/// The body is returned with leading newlines trimmed.
pub fn parse<M: DeserializeOwned>(raw: &str) -> Result<(M, &str), ContentError> {
    let (block, body) = split(raw)?;
    let meta = serde_yaml::from_str(block)?;
    Ok((meta, body))
}

/// Split the front-matter block from the body without deserializing
fn split(raw: &str) -> Result<(&str, &str), ContentError> {
    let content = raw.trim_start();

    let Some(rest) = content.strip_prefix("---") else {
        return Err(ContentError::MissingFrontMatter);
    };
    let rest = rest.trim_start_matches(['\n', '\r']);

    let Some(end) = rest.find("\n---") else {
        return Err(ContentError::UnterminatedFrontMatter);
    };

    let block = &rest[..end];
    let body = rest[end + 4..].trim_start_matches(['\n', '\r']);
    Ok((block, body))
}

/// Deserializer for tag fields that accepts both a single string and a list
pub(super) fn string_or_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrSeq;

    impl<'de> Visitor<'de> for StringOrSeq {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a sequence of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut tags = Vec::new();
            while let Some(tag) = seq.next_element::<String>()? {
                tags.push(tag);
            }
            Ok(tags)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrSeq)
}
