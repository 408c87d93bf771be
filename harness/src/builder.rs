//! World definition: from per-location stack listings to fact sets.

use std::collections::BTreeSet;
use std::fmt;

use gantry_kernel::entity::{BlockId, EntityError, EntityTable, LocationId};
use gantry_kernel::fact::Fact;

/// Typed failure for world construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The same block was placed twice in one world.
    BlockReused { name: String },
    /// Entity registration failed while assembling a universe.
    Entity(EntityError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlockReused { name } => {
                write!(f, "block placed twice in one world: {name}")
            }
            Self::Entity(err) => write!(f, "entity registration failed: {err}"),
        }
    }
}

impl std::error::Error for BuildError {}

impl From<EntityError> for BuildError {
    fn from(err: EntityError) -> Self {
        Self::Entity(err)
    }
}

/// Accumulates one world description, a stack per location.
///
/// Blocks are listed bottom-up, the way the console flow collects them.
/// [`WorldBuilder::build`] emits facts per location in id order: the
/// ONTABLE base, ON for each block above it, then the CLEAR or CLEARLOC
/// terminator — the same order the interactive definition produces, so a
/// programmatic world and a typed-in world render identically.
#[derive(Debug)]
pub struct WorldBuilder<'a> {
    table: &'a EntityTable,
    stacks: Vec<Vec<BlockId>>,
}

impl<'a> WorldBuilder<'a> {
    /// Start an empty world over `table`'s universe.
    #[must_use]
    pub fn new(table: &'a EntityTable) -> Self {
        Self {
            table,
            stacks: vec![Vec::new(); table.location_count()],
        }
    }

    /// Place `blocks` (bottom-up) on `place`, replacing any prior listing.
    pub fn place(&mut self, place: LocationId, blocks: &[BlockId]) -> &mut Self {
        self.stacks[place.index()] = blocks.to_vec();
        self
    }

    /// Emit the fact set.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::BlockReused`] if a block appears twice across
    /// the world's stacks.
    pub fn build(&self) -> Result<Vec<Fact>, BuildError> {
        let mut seen: BTreeSet<BlockId> = BTreeSet::new();
        for column in &self.stacks {
            for &block in column {
                if !seen.insert(block) {
                    return Err(BuildError::BlockReused {
                        name: self.table.block_name(block).to_string(),
                    });
                }
            }
        }

        let mut facts = Vec::new();
        for place in self.table.locations() {
            let column = &self.stacks[place.index()];
            match column.split_first() {
                None => facts.push(Fact::clear_loc(place)),
                Some((&base, rest)) => {
                    facts.push(Fact::on_table(base, place));
                    let mut top = base;
                    for &block in rest {
                        facts.push(Fact::on(block, top));
                        top = block;
                    }
                    facts.push(Fact::clear(top));
                }
            }
        }
        Ok(facts)
    }
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

    #[test]
    fn emits_facts_in_per_stack_definition_order() {
        let t = table();
        let a = t.block("A").unwrap();
        let b = t.block("B").unwrap();
        let l1 = t.location("L1").unwrap();

        let mut builder = WorldBuilder::new(&t);
        builder.place(l1, &[a, b]);
        let facts = builder.build().unwrap();

        let rendered: Vec<String> = facts.iter().map(|f| f.render(&t)).collect();
        assert_eq!(
            rendered,
            vec![
                "ONTABLE(A, L1)",
                "ON(B, A)",
                "CLEAR(B)",
                "CLEARLOC(L2)",
                "CLEARLOC(L3)",
                "CLEARLOC(L4)",
            ]
        );
    }

    #[test]
    fn empty_world_is_all_clear_locations() {
        let t = table();
        let facts = WorldBuilder::new(&t).build().unwrap();
        assert_eq!(facts.len(), t.location_count());
        let rendered: Vec<String> = facts.iter().map(|f| f.render(&t)).collect();
        assert_eq!(rendered[0], "CLEARLOC(L1)");
    }

    #[test]
    fn block_reuse_across_stacks_is_rejected() {
        let t = table();
        let a = t.block("A").unwrap();
        let l1 = t.location("L1").unwrap();
        let l2 = t.location("L2").unwrap();

        let mut builder = WorldBuilder::new(&t);
        builder.place(l1, &[a]);
        builder.place(l2, &[a]);
        let err = builder.build().unwrap_err();
        assert_eq!(err, BuildError::BlockReused { name: "A".into() });
    }

    #[test]
    fn block_reuse_within_a_stack_is_rejected() {
        let t = table();
        let a = t.block("A").unwrap();
        let l1 = t.location("L1").unwrap();

        let mut builder = WorldBuilder::new(&t);
        builder.place(l1, &[a, a]);
        assert!(matches!(
            builder.build(),
            Err(BuildError::BlockReused { .. })
        ));
    }

    #[test]
    fn replacing_a_stack_discards_the_previous_listing() {
        let t = table();
        let a = t.block("A").unwrap();
        let b = t.block("B").unwrap();
        let l1 = t.location("L1").unwrap();

        let mut builder = WorldBuilder::new(&t);
        builder.place(l1, &[a]);
        builder.place(l1, &[b]);
        let facts = builder.build().unwrap();
        assert!(facts.iter().any(|f| f.render(&t) == "ONTABLE(B, L1)"));
        assert!(!facts.iter().any(|f| f.render(&t) == "ONTABLE(A, L1)"));
    }
}
