//! Search policy: the frontier priority key and the expansion budget.

/// How a node's frontier priority is computed.
///
/// The default is [`PriorityMode::DistanceOnly`]: priority is the goal
/// distance h alone, which makes the search pure greedy best-first rather
/// than A*. This deliberately forfeits shortest-plan optimality — keying
/// on g+h keeps every partial path alive and the frontier balloons
/// combinatorially beyond a handful of blocks, while h alone reaches a
/// solution orders of magnitude faster. The classical key remains
/// selectable as [`PriorityMode::CostPlusDistance`] for comparison and
/// testing; it is never the silent default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityMode {
    /// Priority = h. Greedy best-first; fast, not length-optimal.
    #[default]
    DistanceOnly,
    /// Priority = g + h. Classical best-first key; shortest plans on
    /// small worlds, intractable frontiers on large ones.
    CostPlusDistance,
}

impl PriorityMode {
    /// The frontier priority for a node with the given costs.
    #[must_use]
    pub fn priority(self, g_cost: u32, h_cost: u32) -> u32 {
        match self {
            Self::DistanceOnly => h_cost,
            Self::CostPlusDistance => g_cost.saturating_add(h_cost),
        }
    }
}

/// Ordering and budget configuration for one solve call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPolicy {
    /// The active priority key.
    pub priority: PriorityMode,
    /// Hard cap on node expansions. `None` leaves the search unbounded,
    /// which on an unreachable goal explores the entire finite state
    /// space before reporting failure.
    pub max_expansions: Option<u64>,
}
