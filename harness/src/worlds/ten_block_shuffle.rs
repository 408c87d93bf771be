//! The full reference universe: ten blocks over four locations, every
//! stack rearranged.
//!
//! Large enough that the greedy priority key matters; the classical g+h
//! key is intractable here.

use gantry_kernel::entity::{BlockId, EntityTable};

use crate::builder::{BuildError, WorldBuilder};

use super::Scenario;

const BLOCK_NAMES: [&str; 10] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];

/// Build the scenario.
///
/// # Errors
///
/// Returns [`BuildError`] if the universe cannot be assembled; the fixed
/// listing here never trips it.
pub fn scenario() -> Result<Scenario, BuildError> {
    let mut table = EntityTable::new();
    let blocks: Vec<BlockId> = BLOCK_NAMES
        .iter()
        .map(|name| table.add_block(name))
        .collect::<Result<_, _>>()?;
    let l1 = table.add_location("L1")?;
    let l2 = table.add_location("L2")?;
    let l3 = table.add_location("L3")?;
    let l4 = table.add_location("L4")?;

    // Start: A-B-C-D on L1, E-F-G on L2, H-I-J on L3.
    let mut start = WorldBuilder::new(&table);
    start.place(l1, &blocks[0..4]);
    start.place(l2, &blocks[4..7]);
    start.place(l3, &blocks[7..10]);
    let start = start.build()?;

    // Goal: J-I on L1, A-C-E-G on L2, B-D on L3, F-H on L4.
    let mut goal = WorldBuilder::new(&table);
    goal.place(l1, &[blocks[9], blocks[8]]);
    goal.place(l2, &[blocks[0], blocks[2], blocks[4], blocks[6]]);
    goal.place(l3, &[blocks[1], blocks[3]]);
    goal.place(l4, &[blocks[5], blocks[7]]);
    let goal = goal.build()?;

    Ok(Scenario {
        name: "ten_block_shuffle",
        table,
        start,
        goal,
    })
}
