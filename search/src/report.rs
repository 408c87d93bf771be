//! Search outcome reporting.
//!
//! Every solve call produces a [`SearchReport`] regardless of how it
//! terminated; an unsolvable problem is an outcome, not an error. The
//! report serializes to JSON for the harness bundle.

use serde_json::json;

use crate::node::NodeId;

/// Why a solve call stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A node set-equal to the goal world was produced.
    GoalReached { node_id: NodeId },
    /// Open emptied with no goal: no plan exists in the explored space.
    FrontierExhausted,
    /// The `max_expansions` budget was spent before a goal appeared.
    ExpansionBudgetExceeded,
}

impl Termination {
    /// Stable label used in the JSON artifact.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }
}

/// Counters and termination reason for one solve call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// Why the search stopped.
    pub termination: Termination,
    /// Nodes popped from Open and expanded.
    pub expansions: u64,
    /// Nodes created, root included.
    pub nodes_created: u64,
    /// Candidate fact sets generated across all expansions.
    pub candidates_generated: u64,
    /// Candidates discarded as set-equal to an expanded node.
    pub duplicates_suppressed: u64,
    /// Expanded nodes that produced no children.
    pub dead_ends: u64,
    /// Largest open-list size observed.
    pub frontier_high_water: u64,
}

impl SearchReport {
    /// Render as a JSON artifact.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        let goal_node_id = match self.termination {
            Termination::GoalReached { node_id } => Some(node_id as u64),
            _ => None,
        };
        json!({
            "termination": self.termination.label(),
            "goal_node_id": goal_node_id,
            "expansions": self.expansions,
            "nodes_created": self.nodes_created,
            "candidates_generated": self.candidates_generated,
            "duplicates_suppressed": self.duplicates_suppressed,
            "dead_ends": self.dead_ends,
            "frontier_high_water": self.frontier_high_water,
        })
    }
}
