//! The four operator schemas and their add/delete effects.
//!
//! An [`Action`] is immutable and carries only the identifiers relevant to
//! it. Its [`Effect`] is the deterministic add-list/delete-list pair that
//! [`Action::apply`] replays against a fact set. Preconditions are never
//! checked here — the legal-action generator in [`crate::world`] only
//! proposes actions whose preconditions hold.

use crate::entity::{BlockId, EntityTable, LocationId};
use crate::fact::Fact;

/// One operator instance, or the no-effect sentinel carried by root nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Lift `block` off table location `from`.
    PickUp { block: BlockId, from: LocationId },
    /// Place the held `block` onto empty table location `onto`.
    PutDown { block: BlockId, onto: LocationId },
    /// Lift `block` off the block `from` it rests on.
    Unstack { block: BlockId, from: BlockId },
    /// Place the held `block` onto clear block `onto`.
    Stack { block: BlockId, onto: BlockId },
    /// No effect. Marks root nodes; never emitted as a legal action.
    Noop,
}

/// The add/delete fact lists one action application carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Effect {
    /// Facts removed from the world, by structural match.
    pub deletes: Vec<Fact>,
    /// Facts appended to the world.
    pub adds: Vec<Fact>,
}

impl Action {
    /// The STRIPS effect of this action.
    ///
    /// PICKUP/PUTDOWN and UNSTACK/STACK are symmetric pairs: each one's
    /// add list is the other's delete list.
    #[must_use]
    pub fn effect(&self) -> Effect {
        match *self {
            Self::PickUp { block, from } => Effect {
                deletes: vec![Fact::on_table(block, from), Fact::clear(block)],
                adds: vec![Fact::clear_loc(from), Fact::holding(block)],
            },
            Self::PutDown { block, onto } => Effect {
                deletes: vec![Fact::clear_loc(onto), Fact::holding(block)],
                adds: vec![Fact::on_table(block, onto), Fact::clear(block)],
            },
            Self::Unstack { block, from } => Effect {
                deletes: vec![Fact::on(block, from), Fact::clear(block)],
                adds: vec![Fact::clear(from), Fact::holding(block)],
            },
            Self::Stack { block, onto } => Effect {
                deletes: vec![Fact::clear(onto), Fact::holding(block)],
                adds: vec![Fact::on(block, onto), Fact::clear(block)],
            },
            Self::Noop => Effect::default(),
        }
    }

    /// Apply this action to a fact set, producing a new set.
    ///
    /// The input is never mutated. Each delete-list entry removes the first
    /// fact it matches; the add list is appended in order. A well-formed
    /// world never holds duplicate facts, so first-match removal and
    /// all-match removal coincide.
    #[must_use]
    pub fn apply(&self, facts: &[Fact]) -> Vec<Fact> {
        let effect = self.effect();
        let mut next = facts.to_vec();
        for pattern in &effect.deletes {
            if let Some(pos) = next.iter().position(|f| f.matches(pattern)) {
                next.remove(pos);
            }
        }
        next.extend(effect.adds);
        next
    }

    /// Render as `NAME(args…)` using the table that issued the ids.
    #[must_use]
    pub fn render(&self, table: &EntityTable) -> String {
        match *self {
            Self::PickUp { block, from } => format!(
                "PICKUP({}, {})",
                table.block_name(block),
                table.location_name(from)
            ),
            Self::PutDown { block, onto } => format!(
                "PUTDOWN({}, {})",
                table.block_name(block),
                table.location_name(onto)
            ),
            Self::Unstack { block, from } => format!(
                "UNSTACK({}, {})",
                table.block_name(block),
                table.block_name(from)
            ),
            Self::Stack { block, onto } => format!(
                "STACK({}, {})",
                table.block_name(block),
                table.block_name(onto)
            ),
            Self::Noop => "NOOP()".to_string(),
        }
    }
}
