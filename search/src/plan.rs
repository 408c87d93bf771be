//! Plan representation and reconstruction.

use gantry_kernel::action::Action;
use gantry_kernel::entity::{BlockId, EntityTable};
use gantry_kernel::fact::Fact;
use gantry_kernel::world;
use serde_json::json;

use crate::node::{NodeId, SearchNode};

/// One retained snapshot on the winning path.
#[derive(Debug, Clone)]
pub struct PlanStep {
    /// The world at this point in the plan.
    pub facts: Vec<Fact>,
    /// The action that produced this world ([`Action::Noop`] for the
    /// start snapshot).
    pub action: Action,
}

impl PlanStep {
    /// Bottom-up block stacks per location, for column rendering.
    #[must_use]
    pub fn stacks(&self, table: &EntityTable) -> Vec<Vec<BlockId>> {
        world::stacks(&self.facts, table)
    }
}

/// An ordered sequence of world snapshots from start to goal.
///
/// Snapshots whose world contains a HOLDING fact are removed during
/// reconstruction: they are the transient effector-in-motion states
/// between a pick and the matching place, not meaningful configurations.
#[derive(Debug, Clone, Default)]
pub struct Plan {
    /// The retained snapshots, start first.
    pub steps: Vec<PlanStep>,
}

impl Plan {
    /// Number of retained snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the plan holds no snapshots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Render as a JSON artifact, resolving names through `table`.
    #[must_use]
    pub fn to_json(&self, table: &EntityTable) -> serde_json::Value {
        let steps: Vec<serde_json::Value> = self
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                let facts: Vec<String> =
                    step.facts.iter().map(|f| f.render(table)).collect();
                let stacks: Vec<Vec<&str>> = step
                    .stacks(table)
                    .iter()
                    .map(|column| column.iter().map(|&b| table.block_name(b)).collect())
                    .collect();
                json!({
                    "index": index,
                    "action": step.action.render(table),
                    "facts": facts,
                    "stacks": stacks,
                })
            })
            .collect();
        json!({ "length": self.steps.len(), "steps": steps })
    }
}

/// Rebuild the plan ending at `goal_id` from the node arena.
///
/// Walks parent indices back to the root, reverses the chain into
/// start-to-goal order, and drops HOLDING-bearing snapshots. The start
/// snapshot carries no HOLDING fact in a well-formed world and always
/// survives the filter.
#[must_use]
pub fn reconstruct(arena: &[SearchNode], goal_id: NodeId) -> Plan {
    let mut chain = Vec::new();
    let mut current = Some(goal_id);
    while let Some(id) = current {
        chain.push(id);
        current = arena[id].parent_id;
    }
    chain.reverse();

    let steps = chain
        .into_iter()
        .map(|id| &arena[id])
        .filter(|node| world::holding(&node.facts).is_none())
        .map(|node| PlanStep {
            facts: node.facts.clone(),
            action: node.producing_action,
        })
        .collect();
    Plan { steps }
}
