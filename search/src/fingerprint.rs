//! Canonical world-state fingerprints for closed-set lookup.
//!
//! **Exactly one place defines fingerprinting.** A fingerprint is an
//! order-independent SHA-256 digest of a fact set: one fixed-width row per
//! fact (kind tag plus slot indices, absent slot encoded as a sentinel),
//! rows sorted bytewise, hashed under a null-terminated domain prefix.
//!
//! Fingerprints use structural fact identity. The wildcard match relation
//! (`Fact::matches`) is not hashable, so the closed set confirms every
//! fingerprint hit with exact set-equality before discarding a candidate.

use gantry_kernel::fact::Fact;
use sha2::{Digest, Sha256};

/// Domain prefix for world-state fingerprints.
pub const DOMAIN_WORLD_STATE: &[u8] = b"GANTRY::WORLD_STATE::V1\0";

/// Slot index encoding an absent slot in a fingerprint row.
const ABSENT_SLOT: u16 = u16::MAX;

/// A world-state fingerprint in `"sha256:<hex>"` form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.0["sha256:".len()..]
    }

    /// The full `"sha256:<hex>"` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Fingerprint a fact set, independent of fact order.
#[must_use]
pub fn world_fingerprint(facts: &[Fact]) -> Fingerprint {
    let mut rows: Vec<[u8; 7]> = facts.iter().map(row).collect();
    rows.sort_unstable();

    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_WORLD_STATE);
    for r in &rows {
        hasher.update(r);
    }
    Fingerprint(format!("sha256:{}", hex::encode(hasher.finalize())))
}

fn row(fact: &Fact) -> [u8; 7] {
    let subject = slot_bytes(fact.subject().map(gantry_kernel::entity::BlockId::index));
    let object = slot_bytes(fact.object().map(gantry_kernel::entity::BlockId::index));
    let place = slot_bytes(fact.place().map(gantry_kernel::entity::LocationId::index));
    [
        fact.kind().tag(),
        subject[0],
        subject[1],
        object[0],
        object[1],
        place[0],
        place[1],
    ]
}

fn slot_bytes(index: Option<usize>) -> [u8; 2] {
    match index {
        #[allow(clippy::cast_possible_truncation)] // ids are issued as u16
        Some(i) => (i as u16).to_le_bytes(),
        None => ABSENT_SLOT.to_le_bytes(),
    }
}
