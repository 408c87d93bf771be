//! Canned demo scenarios.
//!
//! Worlds provide data only — a universe and a start/goal pair built
//! through the same [`crate::builder::WorldBuilder`] path the console
//! uses. Orchestration lives in [`crate::runner`].

pub mod single_move;
pub mod ten_block_shuffle;
pub mod tower_flip;

use gantry_kernel::entity::EntityTable;
use gantry_kernel::fact::Fact;

/// A named start/goal pair over one entity universe.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Stable scenario identifier.
    pub name: &'static str,
    /// The block/location universe both worlds are drawn from.
    pub table: EntityTable,
    /// The initial world.
    pub start: Vec<Fact>,
    /// The goal world.
    pub goal: Vec<Fact>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_kernel::world;

    fn well_formed(scenario: &Scenario) {
        let locations = scenario.table.location_count();
        // Every location is either occupied or flagged clear in both worlds.
        for facts in [&scenario.start, &scenario.goal] {
            let mut supported = 0;
            for place in scenario.table.locations() {
                let occupied = facts.iter().any(|f| {
                    f.kind() == gantry_kernel::fact::FactKind::OnTable
                        && f.place() == Some(place)
                });
                let clear = facts.iter().any(|f| {
                    f.kind() == gantry_kernel::fact::FactKind::ClearLoc
                        && f.place() == Some(place)
                });
                assert!(occupied ^ clear, "location must be occupied xor clear");
                supported += usize::from(occupied);
            }
            assert!(supported <= locations);
            assert!(world::holding(facts).is_none());
        }
    }

    #[test]
    fn single_move_is_well_formed() {
        let scenario = single_move::scenario().unwrap();
        assert_eq!(scenario.name, "single_move");
        well_formed(&scenario);
        assert!(!world::set_equal(&scenario.start, &scenario.goal));
    }

    #[test]
    fn tower_flip_is_well_formed() {
        let scenario = tower_flip::scenario().unwrap();
        well_formed(&scenario);
        assert!(!world::set_equal(&scenario.start, &scenario.goal));
    }

    #[test]
    fn ten_block_shuffle_is_well_formed() {
        let scenario = ten_block_shuffle::scenario().unwrap();
        well_formed(&scenario);
        assert_eq!(scenario.table.block_count(), 10);
        assert_eq!(scenario.table.location_count(), 4);
    }
}
