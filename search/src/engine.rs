//! The solve loop: best-first search from a start world to a goal world.

use gantry_kernel::action::Action;
use gantry_kernel::fact::Fact;
use gantry_kernel::world;

use crate::closed::ClosedSet;
use crate::fingerprint::world_fingerprint;
use crate::frontier::OpenList;
use crate::node::{FrontierKey, SearchNode};
use crate::plan::{reconstruct, Plan};
use crate::policy::SearchPolicy;
use crate::report::{SearchReport, Termination};

/// Result of one solve call.
///
/// `plan` is present exactly when the termination reason is
/// [`Termination::GoalReached`]. An unsolvable problem terminates with
/// [`Termination::FrontierExhausted`] and `plan: None`; it is an outcome,
/// never an error or a panic.
#[derive(Debug)]
pub struct SolveOutcome {
    /// The reconstructed plan, if a goal node was produced.
    pub plan: Option<Plan>,
    /// Termination reason and search counters.
    pub report: SearchReport,
}

impl SolveOutcome {
    /// Returns `true` if the search terminated on a goal node.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.report.termination, Termination::GoalReached { .. })
    }
}

/// Search for a plan transforming `start` into `goal`.
///
/// Both fact sets must be drawn from the same entity universe; the engine
/// performs no schema validation. A malformed world degrades to dead ends
/// and frontier exhaustion rather than a panic.
///
/// Each iteration pops the best open node, moves it to the closed set, and
/// applies every legal action. A candidate set-equal to any expanded world
/// is discarded — revisits never relax costs. A candidate set-equal to the
/// goal ends the search immediately, before the remaining sibling actions
/// are considered.
#[must_use]
pub fn solve(start: &[Fact], goal: &[Fact], policy: &SearchPolicy) -> SolveOutcome {
    let mut arena: Vec<SearchNode> = Vec::new();
    let mut open = OpenList::new();
    let mut closed = ClosedSet::new();

    let mut expansions: u64 = 0;
    let mut candidates_generated: u64 = 0;
    let mut duplicates_suppressed: u64 = 0;
    let mut dead_ends: u64 = 0;

    let root_h = distance(start, goal);
    arena.push(SearchNode {
        node_id: 0,
        parent_id: None,
        facts: start.to_vec(),
        fingerprint: world_fingerprint(start),
        producing_action: Action::Noop,
        g_cost: 0,
        h_cost: root_h,
    });

    // The root may already satisfy the goal; the plan is then the start
    // snapshot alone and nothing is expanded.
    if world::set_equal(start, goal) {
        let report = SearchReport {
            termination: Termination::GoalReached { node_id: 0 },
            expansions: 0,
            nodes_created: 1,
            candidates_generated: 0,
            duplicates_suppressed: 0,
            dead_ends: 0,
            frontier_high_water: 0,
        };
        return SolveOutcome {
            plan: Some(reconstruct(&arena, 0)),
            report,
        };
    }

    open.push(FrontierKey {
        priority: policy.priority.priority(0, root_h),
        node_id: 0,
    });

    let termination = 'search: loop {
        let Some(current_id) = open.pop() else {
            break 'search Termination::FrontierExhausted;
        };
        if let Some(cap) = policy.max_expansions {
            if expansions >= cap {
                break 'search Termination::ExpansionBudgetExceeded;
            }
        }
        // The same world can enter Open twice before either copy expands;
        // the later pop is a revisit and must not reach Closed.
        if closed.contains(
            &arena[current_id].fingerprint,
            &arena[current_id].facts,
            &arena,
        ) {
            duplicates_suppressed += 1;
            continue;
        }

        closed.insert(&arena[current_id]);
        expansions += 1;

        let actions = world::legal_actions(&arena[current_id].facts);
        let mut children_created: u64 = 0;

        for action in actions {
            let candidate = action.apply(&arena[current_id].facts);
            candidates_generated += 1;

            let fingerprint = world_fingerprint(&candidate);
            if closed.contains(&fingerprint, &candidate, &arena) {
                duplicates_suppressed += 1;
                continue;
            }

            let g_cost = arena[current_id].g_cost + 1;
            let h_cost = distance(&candidate, goal);
            let is_goal = world::set_equal(&candidate, goal);
            let node_id = arena.len();
            arena.push(SearchNode {
                node_id,
                parent_id: Some(current_id),
                facts: candidate,
                fingerprint,
                producing_action: action,
                g_cost,
                h_cost,
            });
            children_created += 1;

            if is_goal {
                // Remaining sibling actions are deliberately not explored.
                break 'search Termination::GoalReached { node_id };
            }
            open.push(FrontierKey {
                priority: policy.priority.priority(g_cost, h_cost),
                node_id,
            });
        }

        if children_created == 0 {
            dead_ends += 1;
        }
    };

    let plan = match termination {
        Termination::GoalReached { node_id } => Some(reconstruct(&arena, node_id)),
        Termination::FrontierExhausted | Termination::ExpansionBudgetExceeded => None,
    };
    let report = SearchReport {
        termination,
        expansions,
        nodes_created: arena.len() as u64,
        candidates_generated,
        duplicates_suppressed,
        dead_ends,
        frontier_high_water: open.high_water(),
    };
    SolveOutcome { plan, report }
}

fn distance(facts: &[Fact], goal: &[Fact]) -> u32 {
    u32::try_from(world::goal_distance(facts, goal)).unwrap_or(u32::MAX)
}
