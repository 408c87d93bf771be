//! Arena search nodes and the frontier ordering key.

use gantry_kernel::action::Action;
use gantry_kernel::fact::Fact;

use crate::fingerprint::Fingerprint;

/// Index of a node in the solve call's arena.
pub type NodeId = usize;

/// An immutable node in the search tree.
///
/// Nodes live in a `Vec` arena owned by the solve call and reference their
/// parent by index, so the lineage structure is a tree with no ownership
/// cycles. Ids are assigned monotonically and double as creation order:
/// priority ties in the frontier go to the older node.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Arena index, assigned monotonically.
    pub node_id: NodeId,
    /// Parent arena index (`None` for the root).
    pub parent_id: Option<NodeId>,
    /// The fact set at this node. Insertion order is preserved for stable
    /// rendering only; it carries no meaning.
    pub facts: Vec<Fact>,
    /// Canonical fingerprint of `facts` (see [`crate::fingerprint`]).
    pub fingerprint: Fingerprint,
    /// The action that produced this node ([`Action::Noop`] for the root).
    pub producing_action: Action,
    /// Path cost from the root, one per applied action.
    pub g_cost: u32,
    /// Goal distance of `facts` (unmatched-fact count).
    pub h_cost: u32,
}

/// The frontier ordering key: priority, then creation order.
///
/// `priority` comes from the active [`crate::policy::PriorityMode`]. Lower
/// pops first; ties go to the node created earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    /// Policy-computed priority (h, or g+h).
    pub priority: u32,
    /// The node this key schedules; also the tie-break.
    pub node_id: NodeId,
}
