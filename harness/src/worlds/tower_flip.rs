//! Three blocks stacked A-B-C on L1, wanted C-B-A on L2.
//!
//! Forces the full pick/place vocabulary: every block moves, and the
//! bottom block ends on top.

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
    let b = table.add_block("B")?;
    let c = table.add_block("C")?;
    let l1 = table.add_location("L1")?;
    let l2 = table.add_location("L2")?;
    table.add_location("L3")?;
    table.add_location("L4")?;

    let mut start = WorldBuilder::new(&table);
    start.place(l1, &[a, b, c]);
    let start = start.build()?;

    let mut goal = WorldBuilder::new(&table);
    goal.place(l2, &[c, b, a]);
    let goal = goal.build()?;

    Ok(Scenario {
        name: "tower_flip",
        table,
        start,
        goal,
    })
}
