//! One block, one move: A travels from L1 to L2.
//!
//! The smallest solvable problem; its plan is two snapshots once the
//! held-in-air state is filtered.

use gantry_kernel::entity::EntityTable;

use crate::builder::{BuildError, WorldBuilder};

use super::Scenario;

/// Build the scenario.
///
/// # Errors
///
/// Returns [`BuildError`] if the universe cannot be assembled; the fixed
/// listing here never trips it.
pub fn scenario() -> Result<Scenario, BuildError> {
    let mut table = EntityTable::new();
    let a = table.add_block("A")?;
    let l1 = table.add_location("L1")?;
    let l2 = table.add_location("L2")?;
    table.add_location("L3")?;
    table.add_location("L4")?;

    let mut start = WorldBuilder::new(&table);
    start.place(l1, &[a]);
    let start = start.build()?;

    let mut goal = WorldBuilder::new(&table);
    goal.place(l2, &[a]);
    let goal = goal.build()?;

    Ok(Scenario {
        name: "single_move",
        table,
        start,
        goal,
    })
}
