//! Git object identifier (SHA-1 hash)
//!
//! Object IDs are 40-character lowercase hexadecimal strings. They double as
//! map keys and as URL path fragments: an object lives at
//! `objects/<first-2-chars>/<remaining-38-chars>` relative to the `.git`
//! base.

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::error::DumpError;
use sha1::{Digest, Sha1};
use std::io;

/// Git object identifier (SHA-1 hash)
///
/// A 40-character lowercase hexadecimal string that uniquely identifies an
/// object. Content addressing makes the object graph a DAG by construction:
/// repeated IDs denote shared, not cyclic, content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// Uppercase hex digits are rejected: git writes loose-object names and
    /// ref contents in lowercase, and the ID is used verbatim as a URL path
    /// fragment.
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != OBJECT_ID_LENGTH
            || !id
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        {
            anyhow::bail!(DumpError::MalformedHash(id));
        }
        Ok(Self(id))
    }

    /// Read an object ID from its binary form (20 raw bytes)
    ///
    /// Used when parsing tree entries, which carry the child hash as raw
    /// bytes rather than hex text.
    pub fn read_binary_from<R: io::Read + ?Sized>(reader: &mut R) -> anyhow::Result<Self> {
        let mut raw = [0u8; OBJECT_ID_LENGTH / 2];
        reader.read_exact(&mut raw)?;

        let mut hex40 = String::with_capacity(OBJECT_ID_LENGTH);
        for byte in raw {
            hex40.push_str(&format!("{byte:02x}"));
        }

        Self::try_parse(hex40)
    }

    /// Compute the ID of inflated object content (header included)
    pub fn of_content(content: &[u8]) -> anyhow::Result<Self> {
        let mut hasher = Sha1::new();
        hasher.update(content);

        let oid = hasher.finalize();
        Self::try_parse(format!("{oid:x}"))
    }

    /// Convert to the remote path of the loose object
    ///
    /// Splits the hash as `objects/XX/YYYY...` where XX is the first 2 chars.
    pub fn to_remote_path(&self) -> String {
        let (dir, file) = self.0.split_at(2);
        format!("objects/{dir}/{file}")
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::ObjectId;
    use crate::error::DumpError;
    use std::io::Cursor;

    const SAMPLE: &str = "0123456789abcdef0123456789abcdef01234567";

    #[test]
    fn parses_a_valid_lowercase_hash() {
        let oid = ObjectId::try_parse(SAMPLE.to_string()).unwrap();
        assert_eq!(oid.as_ref(), SAMPLE);
    }

    #[test]
    fn rejects_short_hashes() {
        let err = ObjectId::try_parse(SAMPLE[..39].to_string()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DumpError>(),
            Some(DumpError::MalformedHash(_))
        ));
    }

    #[test]
    fn rejects_uppercase_hashes() {
        assert!(ObjectId::try_parse(SAMPLE.to_uppercase()).is_err());
    }

    #[test]
    fn rejects_non_hex_characters() {
        let mut id = SAMPLE.to_string();
        id.replace_range(0..1, "g");
        assert!(ObjectId::try_parse(id).is_err());
    }

    #[test]
    fn converts_to_remote_path() {
        let oid = ObjectId::try_parse(SAMPLE.to_string()).unwrap();
        assert_eq!(
            oid.to_remote_path(),
            "objects/01/23456789abcdef0123456789abcdef01234567"
        );
    }

    #[test]
    fn reads_binary_form() {
        let raw: Vec<u8> = (0..20).map(|i| i * 11).collect();
        let oid = ObjectId::read_binary_from(&mut Cursor::new(&raw)).unwrap();
        assert_eq!(oid.as_ref().len(), 40);
        assert!(oid.as_ref().starts_with("000b16"));
    }

    #[test]
    fn hashes_content() {
        // printf 'blob 5\0hello' | sha1sum
        let oid = ObjectId::of_content(b"blob 5\0hello").unwrap();
        assert_eq!(oid.as_ref(), "b6fc4c620b67d95f953a5c1c1230aaab5db5a1b0");
    }
}
