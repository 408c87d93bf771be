//! Typed logical atoms describing one world snapshot.
//!
//! A world is a set of [`Fact`] values. The planner compares facts with
//! [`Fact::matches`], a structural match over the argument slots present on
//! both sides: a slot left unset on either side is a wildcard and does not
//! block the match. That relation is what effect application, goal
//! distance, and world set-equality use. It is not transitive when a slot
//! is populated on one side only, and a non-transitive relation cannot
//! lawfully be `PartialEq`, so the derived `==` stays fully structural;
//! the two relations agree on every fact the public constructors can
//! produce.

use crate::entity::{BlockId, EntityTable, LocationId};

/// The predicate vocabulary of the blocks-world domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FactKind {
    /// A block rests directly on another block.
    On,
    /// A block rests directly on a table location.
    OnTable,
    /// Nothing rests on a block.
    Clear,
    /// Nothing rests on a table location.
    ClearLoc,
    /// The single effector holds a block.
    Holding,
}

impl FactKind {
    /// Stable tag byte, consumed by the search layer's fingerprint rows.
    #[must_use]
    pub fn tag(self) -> u8 {
        match self {
            Self::On => 0,
            Self::OnTable => 1,
            Self::Clear => 2,
            Self::ClearLoc => 3,
            Self::Holding => 4,
        }
    }

    /// Upper-case predicate name, as the console output spells it.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::OnTable => "ONTABLE",
            Self::Clear => "CLEAR",
            Self::ClearLoc => "CLEARLOC",
            Self::Holding => "HOLDING",
        }
    }
}

/// One ground atom: a predicate kind plus the argument slots it populates.
///
/// Slots a kind does not use stay `None`. The five constructors populate
/// every slot their kind defines, so a `Fact` built through the public API
/// is always fully ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fact {
    kind: FactKind,
    subject: Option<BlockId>,
    object: Option<BlockId>,
    place: Option<LocationId>,
}

impl Fact {
    /// `ON(top, below)` — `top` rests directly on `below`.
    #[must_use]
    pub fn on(top: BlockId, below: BlockId) -> Self {
        Self {
            kind: FactKind::On,
            subject: Some(top),
            object: Some(below),
            place: None,
        }
    }

    /// `ONTABLE(block, place)` — `block` rests directly on the location.
    #[must_use]
    pub fn on_table(block: BlockId, place: LocationId) -> Self {
        Self {
            kind: FactKind::OnTable,
            subject: Some(block),
            object: None,
            place: Some(place),
        }
    }

    /// `CLEAR(block)` — nothing rests on `block`.
    #[must_use]
    pub fn clear(block: BlockId) -> Self {
        Self {
            kind: FactKind::Clear,
            subject: Some(block),
            object: None,
            place: None,
        }
    }

    /// `CLEARLOC(place)` — nothing rests on the location.
    #[must_use]
    pub fn clear_loc(place: LocationId) -> Self {
        Self {
            kind: FactKind::ClearLoc,
            subject: None,
            object: None,
            place: Some(place),
        }
    }

    /// `HOLDING(block)` — the effector holds `block`.
    #[must_use]
    pub fn holding(block: BlockId) -> Self {
        Self {
            kind: FactKind::Holding,
            subject: Some(block),
            object: None,
            place: None,
        }
    }

    /// The predicate kind.
    #[must_use]
    pub fn kind(&self) -> FactKind {
        self.kind
    }

    /// The subject block slot (first block argument).
    #[must_use]
    pub fn subject(&self) -> Option<BlockId> {
        self.subject
    }

    /// The object block slot (second block argument, ON only).
    #[must_use]
    pub fn object(&self) -> Option<BlockId> {
        self.object
    }

    /// The location slot (ONTABLE and CLEARLOC).
    #[must_use]
    pub fn place(&self) -> Option<LocationId> {
        self.place
    }

    /// Structural match over the slots present on both facts.
    ///
    /// Kinds must agree; each slot is compared only when populated on both
    /// sides and is a wildcard otherwise. Symmetric, but not transitive
    /// when a slot is unset on one side only.
    #[must_use]
    pub fn matches(&self, other: &Fact) -> bool {
        self.kind == other.kind
            && slot_agrees(self.subject, other.subject)
            && slot_agrees(self.object, other.object)
            && slot_agrees(self.place, other.place)
    }

    /// Render as `NAME(args…)` using the table that issued the ids.
    #[must_use]
    pub fn render(&self, table: &EntityTable) -> String {
        let mut args: Vec<&str> = Vec::new();
        if let Some(block) = self.subject {
            args.push(table.block_name(block));
        }
        if let Some(block) = self.object {
            args.push(table.block_name(block));
        }
        if let Some(place) = self.place {
            args.push(table.location_name(place));
        }
        format!("{}({})", self.kind.name(), args.join(", "))
    }
}

fn slot_agrees<T: PartialEq>(a: Option<T>, b: Option<T>) -> bool {
    match (a, b) {
        (Some(x), Some(y)) => x == y,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityTable;

    fn table() -> EntityTable {
        let mut table = EntityTable::new();
        for name in ["A", "B", "C"] {
            table.add_block(name).unwrap();
        }
        for name in ["L1", "L2"] {
            table.add_location(name).unwrap();
        }
        table
    }

    #[test]
    fn fully_ground_facts_match_iff_structurally_equal() {
        let t = table();
        let a = t.block("A").unwrap();
        let b = t.block("B").unwrap();
        let l1 = t.location("L1").unwrap();

        assert!(Fact::on(a, b).matches(&Fact::on(a, b)));
        assert!(!Fact::on(a, b).matches(&Fact::on(b, a)));
        assert!(!Fact::clear(a).matches(&Fact::clear(b)));
        assert!(!Fact::clear(a).matches(&Fact::holding(a)));
        assert!(Fact::on_table(a, l1).matches(&Fact::on_table(a, l1)));
    }

    #[test]
    fn unset_slot_is_a_wildcard() {
        let t = table();
        let a = t.block("A").unwrap();
        let bare_clear = Fact {
            kind: FactKind::Clear,
            subject: None,
            object: None,
            place: None,
        };
        assert!(bare_clear.matches(&Fact::clear(a)));
        assert!(Fact::clear(a).matches(&bare_clear));
    }

    #[test]
    fn wildcard_match_is_not_transitive() {
        let t = table();
        let a = t.block("A").unwrap();
        let b = t.block("B").unwrap();
        let bare_clear = Fact {
            kind: FactKind::Clear,
            subject: None,
            object: None,
            place: None,
        };
        // CLEAR(A) ~ CLEAR(_) and CLEAR(_) ~ CLEAR(B), yet CLEAR(A) !~ CLEAR(B).
        assert!(Fact::clear(a).matches(&bare_clear));
        assert!(bare_clear.matches(&Fact::clear(b)));
        assert!(!Fact::clear(a).matches(&Fact::clear(b)));
    }

    #[test]
    fn structural_equality_is_stricter_than_matching() {
        let t = table();
        let a = t.block("A").unwrap();
        let bare_clear = Fact {
            kind: FactKind::Clear,
            subject: None,
            object: None,
            place: None,
        };
        assert!(bare_clear.matches(&Fact::clear(a)));
        assert_ne!(bare_clear, Fact::clear(a));
    }

    #[test]
    fn renders_like_the_console_output() {
        let t = table();
        let a = t.block("A").unwrap();
        let b = t.block("B").unwrap();
        let l1 = t.location("L1").unwrap();

        assert_eq!(Fact::on(a, b).render(&t), "ON(A, B)");
        assert_eq!(Fact::on_table(a, l1).render(&t), "ONTABLE(A, L1)");
        assert_eq!(Fact::clear(a).render(&t), "CLEAR(A)");
        assert_eq!(Fact::clear_loc(l1).render(&t), "CLEARLOC(L1)");
        assert_eq!(Fact::holding(a).render(&t), "HOLDING(A)");
    }

    #[test]
    fn kind_tags_are_distinct() {
        let kinds = [
            FactKind::On,
            FactKind::OnTable,
            FactKind::Clear,
            FactKind::ClearLoc,
            FactKind::Holding,
        ];
        let mut tags: Vec<u8> = kinds.iter().map(|k| k.tag()).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), kinds.len());
    }
}
