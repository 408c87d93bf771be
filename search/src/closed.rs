//! The closed set: expanded-node history with fingerprint-indexed dedup.
//!
//! Candidates are deduplicated against Closed only, never against Open —
//! a revisit is discarded even when it was reached by a cheaper path,
//! because this planner never relaxes costs. The index maps fingerprint
//! digests to arena ids for expected O(1) lookup; exact set-equality
//! against the arena stays authoritative on every hit, so a hash collision
//! can never discard a genuinely new world.

use std::collections::HashMap;

use gantry_kernel::fact::Fact;
use gantry_kernel::world;

use crate::fingerprint::Fingerprint;
use crate::node::{NodeId, SearchNode};

/// Every node that has been expanded, indexed by state fingerprint.
#[derive(Debug, Default)]
pub struct ClosedSet {
    by_digest: HashMap<String, Vec<NodeId>>,
    len: usize,
}

impl ClosedSet {
    /// Create an empty closed set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an expanded node.
    pub fn insert(&mut self, node: &SearchNode) {
        self.by_digest
            .entry(node.fingerprint.hex_digest().to_string())
            .or_default()
            .push(node.node_id);
        self.len += 1;
    }

    /// Whether `facts` is set-equal to any expanded node's world.
    #[must_use]
    pub fn contains(
        &self,
        fingerprint: &Fingerprint,
        facts: &[Fact],
        arena: &[SearchNode],
    ) -> bool {
        self.by_digest
            .get(fingerprint.hex_digest())
            .is_some_and(|ids| {
                ids.iter()
                    .any(|&id| world::set_equal(&arena[id].facts, facts))
            })
    }

    /// Number of expanded nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been expanded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::world_fingerprint;
    use gantry_kernel::action::Action;
    use gantry_kernel::entity::EntityTable;

    fn node(node_id: NodeId, facts: Vec<Fact>) -> SearchNode {
        let fingerprint = world_fingerprint(&facts);
        SearchNode {
            node_id,
            parent_id: None,
            facts,
            fingerprint,
            producing_action: Action::Noop,
            g_cost: 0,
            h_cost: 0,
        }
    }

    fn sample_worlds() -> (Vec<Fact>, Vec<Fact>) {
        let mut table = EntityTable::new();
        let a = table.add_block("A").unwrap();
        let l1 = table.add_location("L1").unwrap();
        let l2 = table.add_location("L2").unwrap();
        let here = vec![Fact::on_table(a, l1), Fact::clear(a), Fact::clear_loc(l2)];
        let there = vec![Fact::on_table(a, l2), Fact::clear(a), Fact::clear_loc(l1)];
        (here, there)
    }

    #[test]
    fn contains_finds_a_set_equal_world_in_any_order() {
        let (here, _) = sample_worlds();
        let arena = vec![node(0, here.clone())];
        let mut closed = ClosedSet::new();
        closed.insert(&arena[0]);

        let mut shuffled = here;
        shuffled.reverse();
        let fp = world_fingerprint(&shuffled);
        assert!(closed.contains(&fp, &shuffled, &arena));
    }

    #[test]
    fn contains_rejects_an_unseen_world() {
        let (here, there) = sample_worlds();
        let arena = vec![node(0, here)];
        let mut closed = ClosedSet::new();
        closed.insert(&arena[0]);

        let fp = world_fingerprint(&there);
        assert!(!closed.contains(&fp, &there, &arena));
    }

    #[test]
    fn len_counts_insertions() {
        let (here, there) = sample_worlds();
        let arena = vec![node(0, here), node(1, there)];
        let mut closed = ClosedSet::new();
        assert!(closed.is_empty());
        closed.insert(&arena[0]);
        closed.insert(&arena[1]);
        assert_eq!(closed.len(), 2);
    }
}
