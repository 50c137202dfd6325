//! File-level comparison of two snapshots

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Snapshot;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeChange {
    /// Only present on the second side
    Added { name: String, oid: ObjectId },
    /// Only present on the first side
    Deleted { name: String, oid: ObjectId },
    Modified {
        name: String,
        old: ObjectId,
        new: ObjectId,
    },
}

impl TreeChange {
    fn from_entries(name: &str, old: Option<&ObjectId>, new: Option<&ObjectId>) -> Option<Self> {
        let name = name.to_string();

        match (old, new) {
            (None, Some(oid)) => Some(TreeChange::Added {
                name,
                oid: oid.clone(),
            }),
            (Some(oid), None) => Some(TreeChange::Deleted {
                name,
                oid: oid.clone(),
            }),
            (Some(old), Some(new)) if old != new => Some(TreeChange::Modified {
                name,
                old: old.clone(),
                new: new.clone(),
            }),
            _ => None,
        }
    }
}

/// Compare two snapshots by filename, in filename order
pub fn compare_snapshots(old: &impl Snapshot, new: &impl Snapshot) -> Vec<TreeChange> {
    compare_file_maps(&old.file_map(), &new.file_map())
}

pub fn compare_file_maps(
    old: &BTreeMap<String, ObjectId>,
    new: &BTreeMap<String, ObjectId>,
) -> Vec<TreeChange> {
    let names = old.keys().chain(new.keys()).collect::<BTreeSet<_>>();

    names
        .into_iter()
        .filter_map(|name| TreeChange::from_entries(name, old.get(name), new.get(name)))
        .collect()
}
