//! Common ancestor search for merges
//!
//! Two breadth-first searches run in lock-step over parent links, one seeded
//! at each commit, each with its own visited set. On every round each side
//! pops one commit; if the other side has already visited it, that commit is
//! the answer. Otherwise it is marked visited and all of its parents (both,
//! for a merge commit) are queued.
//!
//! The answer is the first intersection this interleaving runs into. In
//! histories with several merge paths that is *a* common ancestor, not
//! necessarily the lowest one.
//!
//! ```rust,ignore
//! let finder = AncestorFinder::new(|oid| database.load_parents(oid));
//! let base = finder.find_common_ancestor(&head_oid, &merge_oid)?;
//! ```

use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{HashSet, VecDeque};

/// One side of the search: commits still to visit and commits already seen
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    queue: VecDeque<ObjectId>,
    visited: HashSet<ObjectId>,
}

impl Frontier {
    pub fn seeded(start: &ObjectId) -> Self {
        Frontier {
            queue: VecDeque::from([start.clone()]),
            visited: HashSet::new(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn has_visited(&self, oid: &ObjectId) -> bool {
        self.visited.contains(oid)
    }
}

/// Finds a common ancestor of two commits
///
/// The parents loader returns the parent digests of a commit, and an empty
/// list for root commits or commits that cannot be read.
pub struct AncestorFinder<ParentsLoaderFn>
where
    ParentsLoaderFn: Fn(&ObjectId) -> anyhow::Result<Vec<ObjectId>>,
{
    parents_loader: ParentsLoaderFn,
}

impl<ParentsLoaderFn> AncestorFinder<ParentsLoaderFn>
where
    ParentsLoaderFn: Fn(&ObjectId) -> anyhow::Result<Vec<ObjectId>>,
{
    pub fn new(parents_loader: ParentsLoaderFn) -> Self {
        Self { parents_loader }
    }

    pub fn find_common_ancestor(
        &self,
        source: &ObjectId,
        target: &ObjectId,
    ) -> anyhow::Result<Option<ObjectId>> {
        let mut source_frontier = Frontier::seeded(source);
        let mut target_frontier = Frontier::seeded(target);

        while !source_frontier.is_exhausted() || !target_frontier.is_exhausted() {
            if let Some(ancestor) = self.step(&mut source_frontier, &target_frontier)? {
                tracing::debug!(%source, %target, %ancestor, "common ancestor found");
                return Ok(Some(ancestor));
            }

            if let Some(ancestor) = self.step(&mut target_frontier, &source_frontier)? {
                tracing::debug!(%source, %target, %ancestor, "common ancestor found");
                return Ok(Some(ancestor));
            }
        }

        tracing::debug!(%source, %target, "no common ancestor");
        Ok(None)
    }

    /// Advance one side by a single commit
    ///
    /// Returns the popped commit when the other side has already seen it.
    pub fn step(
        &self,
        frontier: &mut Frontier,
        other: &Frontier,
    ) -> anyhow::Result<Option<ObjectId>> {
        let Some(current) = frontier.queue.pop_front() else {
            return Ok(None);
        };

        if other.has_visited(&current) {
            return Ok(Some(current));
        }

        let parents = (self.parents_loader)(&current)?;
        tracing::trace!(commit = %current, parents = parents.len(), "visiting commit");

        frontier.visited.insert(current);
        frontier.queue.extend(parents);

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use std::collections::HashMap;

    /// In-memory commit store for testing
    #[derive(Debug, Clone, Default)]
    struct InMemoryCommitStore {
        commits: HashMap<ObjectId, Vec<ObjectId>>,
    }

    impl InMemoryCommitStore {
        fn add_commit(&mut self, commit_id: &ObjectId, parents: &[&ObjectId]) {
            self.commits.insert(
                commit_id.clone(),
                parents.iter().map(|parent| (*parent).clone()).collect(),
            );
        }

        fn get_parents(&self, commit_id: &ObjectId) -> anyhow::Result<Vec<ObjectId>> {
            Ok(self.commits.get(commit_id).cloned().unwrap_or_default())
        }
    }

    fn create_oid(id: &str) -> ObjectId {
        // Create a deterministic 40-character hex ObjectId from string for testing
        let mut hex_string = id
            .as_bytes()
            .iter()
            .map(|byte| format!("{:02x}", byte))
            .collect::<String>();

        while hex_string.len() < 40 {
            hex_string.push('0');
        }
        hex_string.truncate(40);

        ObjectId::try_parse(hex_string).expect("Invalid test ObjectId")
    }

    fn find(store: &InMemoryCommitStore, a: &ObjectId, b: &ObjectId) -> Option<ObjectId> {
        AncestorFinder::new(|oid| store.get_parents(oid))
            .find_common_ancestor(a, b)
            .expect("in-memory lookups never fail")
    }

    #[test]
    fn divergent_branches_meet_at_the_fork() {
        //   A
        //  / \
        // B   C
        let mut store = InMemoryCommitStore::default();
        let (a, b, c) = (create_oid("a"), create_oid("b"), create_oid("c"));
        store.add_commit(&a, &[]);
        store.add_commit(&b, &[&a]);
        store.add_commit(&c, &[&a]);

        assert_eq!(find(&store, &b, &c), Some(a));
    }

    #[test]
    fn same_commit_is_its_own_ancestor() {
        let mut store = InMemoryCommitStore::default();
        let a = create_oid("a");
        store.add_commit(&a, &[]);

        assert_eq!(find(&store, &a, &a), Some(a));
    }

    #[rstest]
    #[case::ancestor_first(true)]
    #[case::ancestor_second(false)]
    fn linear_history_meets_at_the_older_tip(#[case] older_first: bool) {
        // A <- B <- C
        let mut store = InMemoryCommitStore::default();
        let (a, b, c) = (create_oid("a"), create_oid("b"), create_oid("c"));
        store.add_commit(&a, &[]);
        store.add_commit(&b, &[&a]);
        store.add_commit(&c, &[&b]);

        let result = if older_first {
            find(&store, &a, &c)
        } else {
            find(&store, &c, &a)
        };

        assert_eq!(result, Some(a));
    }

    #[test]
    fn unrelated_histories_have_no_ancestor() {
        let mut store = InMemoryCommitStore::default();
        let (a, b, x, y) = (
            create_oid("a"),
            create_oid("b"),
            create_oid("x"),
            create_oid("y"),
        );
        store.add_commit(&a, &[]);
        store.add_commit(&b, &[&a]);
        store.add_commit(&x, &[]);
        store.add_commit(&y, &[&x]);

        assert_eq!(find(&store, &b, &y), None);
    }

    #[test]
    fn second_parent_of_a_merge_is_searched() {
        //   A
        //  / \
        // B   C
        //  \ / \
        //   M   D
        let mut store = InMemoryCommitStore::default();
        let (a, b, c, m, d) = (
            create_oid("a"),
            create_oid("b"),
            create_oid("c"),
            create_oid("m"),
            create_oid("d"),
        );
        store.add_commit(&a, &[]);
        store.add_commit(&b, &[&a]);
        store.add_commit(&c, &[&a]);
        store.add_commit(&m, &[&b, &c]);
        store.add_commit(&d, &[&c]);

        assert_eq!(find(&store, &m, &d), Some(c));
    }

    #[test]
    fn reports_the_first_intersection_rather_than_the_lowest() {
        // L has a shortcut to A through its second parent, so A is reached by
        // both sides before B, even though B is the lower common ancestor.
        //
        // A <- B <- L3 <- L2 <- L1 <- L
        //      ^                      |
        //      R1 <- R         A <----+
        let mut store = InMemoryCommitStore::default();
        let (a, b) = (create_oid("a"), create_oid("b"));
        let (l, l1, l2, l3) = (
            create_oid("l"),
            create_oid("l1"),
            create_oid("l2"),
            create_oid("l3"),
        );
        let (r, r1) = (create_oid("r"), create_oid("r1"));
        store.add_commit(&a, &[]);
        store.add_commit(&b, &[&a]);
        store.add_commit(&l3, &[&b]);
        store.add_commit(&l2, &[&l3]);
        store.add_commit(&l1, &[&l2]);
        store.add_commit(&l, &[&l1, &a]);
        store.add_commit(&r1, &[&b]);
        store.add_commit(&r, &[&r1]);

        assert_eq!(find(&store, &l, &r), Some(a));
    }

    #[test]
    fn loader_failures_are_propagated() {
        let finder = AncestorFinder::new(|_oid: &ObjectId| -> anyhow::Result<Vec<ObjectId>> {
            anyhow::bail!("storage offline")
        });

        let result = finder.find_common_ancestor(&create_oid("a"), &create_oid("b"));

        assert!(result.is_err());
    }
}
