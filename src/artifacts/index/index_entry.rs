use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;

/// One staged file: the digest of its blob and the name it was staged under
///
/// Names are kept verbatim; a name containing path separators is still a
/// single flat entry.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexEntry {
    pub oid: ObjectId,
    pub name: String,
}

impl IndexEntry {
    pub fn try_parse_line(line: &str) -> anyhow::Result<Self> {
        let (oid, name) = line
            .split_once(' ')
            .with_context(|| format!("malformed staged entry: {line:?}"))?;

        if name.is_empty() {
            anyhow::bail!("malformed staged entry: {line:?}");
        }

        Ok(IndexEntry {
            oid: ObjectId::try_parse(oid.to_string())?,
            name: name.to_string(),
        })
    }

    pub fn to_line(&self) -> String {
        format!("{} {}", self.oid, self.name)
    }
}
