//! Pure queries over a fact set.
//!
//! A fact set is a world snapshot; these functions derive everything the
//! planner needs from one — the held block, the legal actions, equality
//! against another world, distance from a goal, and the per-location stack
//! view the renderer consumes. Nothing here mutates its input.

use crate::action::Action;
use crate::entity::{BlockId, EntityTable, LocationId};
use crate::fact::{Fact, FactKind};

/// The block currently held, if any.
#[must_use]
pub fn holding(facts: &[Fact]) -> Option<BlockId> {
    facts
        .iter()
        .find(|f| f.kind() == FactKind::Holding)
        .and_then(Fact::subject)
}

/// Every action whose preconditions hold in `facts`.
///
/// With empty hands: PICKUP for each clear on-table block, then UNSTACK
/// for each clear stacked block. Holding a block: PUTDOWN onto each clear
/// location, then STACK onto each clear block. Within each group, emission
/// follows fact insertion order; the order is deterministic but only
/// influences tie-breaking in the search, never correctness.
///
/// An empty result marks a dead-end world, not an error.
#[must_use]
pub fn legal_actions(facts: &[Fact]) -> Vec<Action> {
    let mut actions = Vec::new();
    let held = holding(facts);

    if held.is_none() {
        for fact in facts {
            if fact.kind() != FactKind::OnTable {
                continue;
            }
            let (Some(block), Some(from)) = (fact.subject(), fact.place()) else {
                continue;
            };
            if is_clear(facts, block) {
                actions.push(Action::PickUp { block, from });
            }
        }
    }
    if let Some(block) = held {
        for fact in facts {
            if fact.kind() == FactKind::ClearLoc {
                if let Some(onto) = fact.place() {
                    actions.push(Action::PutDown { block, onto });
                }
            }
        }
    }
    if held.is_none() {
        for fact in facts {
            if fact.kind() != FactKind::On {
                continue;
            }
            let (Some(block), Some(from)) = (fact.subject(), fact.object()) else {
                continue;
            };
            if is_clear(facts, block) {
                actions.push(Action::Unstack { block, from });
            }
        }
    }
    if let Some(block) = held {
        for fact in facts {
            if fact.kind() == FactKind::Clear {
                if let Some(onto) = fact.subject() {
                    actions.push(Action::Stack { block, onto });
                }
            }
        }
    }

    actions
}

fn is_clear(facts: &[Fact], block: BlockId) -> bool {
    facts
        .iter()
        .any(|f| f.kind() == FactKind::Clear && f.subject() == Some(block))
}

/// Whether two fact sets describe the same world, ignoring order.
///
/// Mutual containment under [`Fact::matches`]: every fact in each set must
/// match some fact in the other.
#[must_use]
pub fn set_equal(a: &[Fact], b: &[Fact]) -> bool {
    contains_all(b, a) && contains_all(a, b)
}

fn contains_all(haystack: &[Fact], needles: &[Fact]) -> bool {
    needles
        .iter()
        .all(|needle| haystack.iter().any(|hay| needle.matches(hay)))
}

/// Number of facts in `facts` with no match in `goal`.
///
/// The search heuristic: a dissimilarity count, not a lower bound on the
/// remaining action distance. Zero exactly when every fact already appears
/// in the goal.
#[must_use]
pub fn goal_distance(facts: &[Fact], goal: &[Fact]) -> usize {
    facts
        .iter()
        .filter(|fact| !goal.iter().any(|g| fact.matches(g)))
        .count()
}

/// Bottom-up block stacks per location, in location id order.
///
/// Follows the single ONTABLE fact of each location, then ON facts upward
/// until nothing rests on the current top. A held block appears in no
/// stack.
#[must_use]
pub fn stacks(facts: &[Fact], table: &EntityTable) -> Vec<Vec<BlockId>> {
    table.locations().map(|place| stack_at(facts, place)).collect()
}

fn stack_at(facts: &[Fact], place: LocationId) -> Vec<BlockId> {
    let mut column = Vec::new();
    let base = facts
        .iter()
        .find(|f| f.kind() == FactKind::OnTable && f.place() == Some(place))
        .and_then(Fact::subject);
    let Some(mut top) = base else {
        return column;
    };
    column.push(top);
    // A malformed world can contain an ON cycle; the column cannot be
    // taller than the fact set, so stop there.
    while column.len() <= facts.len() {
        let above = facts
            .iter()
            .find(|f| f.kind() == FactKind::On && f.object() == Some(top))
            .and_then(Fact::subject);
        match above {
            Some(block) => {
                column.push(block);
                top = block;
            }
            None => break,
        }
    }
    column
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> EntityTable {
        let mut table = EntityTable::new();
        for name in ["A", "B", "C"] {
            table.add_block(name).unwrap();
        }
        for name in ["L1", "L2", "L3", "L4"] {
            table.add_location(name).unwrap();
        }
        table
    }

    // A on L1 with B stacked on it, C on L2; L3 and L4 empty.
    fn two_stack_world(t: &EntityTable) -> Vec<Fact> {
        let a = t.block("A").unwrap();
        let b = t.block("B").unwrap();
        let c = t.block("C").unwrap();
        let l1 = t.location("L1").unwrap();
        let l2 = t.location("L2").unwrap();
        let l3 = t.location("L3").unwrap();
        let l4 = t.location("L4").unwrap();
        vec![
            Fact::on_table(a, l1),
            Fact::on(b, a),
            Fact::clear(b),
            Fact::on_table(c, l2),
            Fact::clear(c),
            Fact::clear_loc(l3),
            Fact::clear_loc(l4),
        ]
    }

    #[test]
    fn empty_hands_emit_pickups_then_unstacks() {
        let t = table();
        let b = t.block("B").unwrap();
        let c = t.block("C").unwrap();
        let a = t.block("A").unwrap();
        let l2 = t.location("L2").unwrap();
        let facts = two_stack_world(&t);

        let actions = legal_actions(&facts);
        assert_eq!(
            actions,
            vec![
                Action::PickUp { block: c, from: l2 },
                Action::Unstack { block: b, from: a },
            ]
        );
    }

    #[test]
    fn held_block_emits_putdowns_then_stacks() {
        let t = table();
        let a = t.block("A").unwrap();
        let b = t.block("B").unwrap();
        let c = t.block("C").unwrap();
        let l1 = t.location("L1").unwrap();
        let l3 = t.location("L3").unwrap();
        let l4 = t.location("L4").unwrap();

        // Holding C; A on L1 with B on top.
        let facts = vec![
            Fact::on_table(a, l1),
            Fact::on(b, a),
            Fact::clear(b),
            Fact::holding(c),
            Fact::clear_loc(l3),
            Fact::clear_loc(l4),
        ];

        let actions = legal_actions(&facts);
        assert_eq!(
            actions,
            vec![
                Action::PutDown { block: c, onto: l3 },
                Action::PutDown { block: c, onto: l4 },
                Action::Stack { block: c, onto: b },
            ]
        );
    }

    #[test]
    fn holding_finds_the_held_block() {
        let t = table();
        let c = t.block("C").unwrap();
        assert_eq!(holding(&[Fact::holding(c)]), Some(c));
        assert_eq!(holding(&two_stack_world(&t)), None);
    }

    #[test]
    fn set_equal_ignores_order() {
        let t = table();
        let facts = two_stack_world(&t);
        let mut shuffled = facts.clone();
        shuffled.reverse();
        assert!(set_equal(&facts, &shuffled));
    }

    #[test]
    fn set_equal_rejects_different_worlds() {
        let t = table();
        let c = t.block("C").unwrap();
        let l2 = t.location("L2").unwrap();
        let facts = two_stack_world(&t);
        let moved = Action::PickUp { block: c, from: l2 }.apply(&facts);
        assert!(!set_equal(&facts, &moved));
    }

    #[test]
    fn set_equal_rejects_a_proper_subset() {
        let t = table();
        let facts = two_stack_world(&t);
        let subset = &facts[..facts.len() - 1];
        assert!(!set_equal(subset, &facts));
        assert!(!set_equal(&facts, subset));
    }

    #[test]
    fn goal_distance_counts_unmatched_facts() {
        let t = table();
        let c = t.block("C").unwrap();
        let l2 = t.location("L2").unwrap();
        let facts = two_stack_world(&t);

        assert_eq!(goal_distance(&facts, &facts), 0);
        // Lifting C removes ONTABLE(C, L2) and CLEAR(C), adds CLEARLOC(L2)
        // and HOLDING(C): two facts of the new world have no goal match.
        let moved = Action::PickUp { block: c, from: l2 }.apply(&facts);
        assert_eq!(goal_distance(&moved, &facts), 2);
    }

    #[test]
    fn stacks_follow_the_on_chain_bottom_up() {
        let t = table();
        let a = t.block("A").unwrap();
        let b = t.block("B").unwrap();
        let c = t.block("C").unwrap();
        let facts = two_stack_world(&t);

        let view = stacks(&facts, &t);
        assert_eq!(view, vec![vec![a, b], vec![c], vec![], vec![]]);
    }

    #[test]
    fn held_block_appears_in_no_stack() {
        let t = table();
        let a = t.block("A").unwrap();
        let b = t.block("B").unwrap();
        let c = t.block("C").unwrap();
        let l2 = t.location("L2").unwrap();
        let facts = two_stack_world(&t);

        let lifted = Action::PickUp { block: c, from: l2 }.apply(&facts);
        let view = stacks(&lifted, &t);
        assert_eq!(view, vec![vec![a, b], vec![], vec![], vec![]]);
    }

    #[test]
    fn malformed_on_cycle_terminates() {
        let t = table();
        let a = t.block("A").unwrap();
        let b = t.block("B").unwrap();
        let l1 = t.location("L1").unwrap();

        // ON(A, B) and ON(B, A) can never arise from well-formed input.
        let facts = vec![Fact::on_table(a, l1), Fact::on(b, a), Fact::on(a, b)];
        let view = stacks(&facts, &t);
        assert!(view[0].len() <= facts.len() + 1);
    }
}
