// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dwell timer table: per-candidate pending-since bookkeeping.
//!
//! ## Overview
//!
//! The table maps each candidate in active, valid contact to the tick of its
//! first such contact. It holds at most one entry per candidate and never
//! restarts a running timer on repeated contact. Entries leave the table on
//! contact end, on an invalid contact, or on promotion into the commit
//! queue; all removals are idempotent.
//!
//! Storage is a plain vector with linear scans. The table only ever holds
//! the candidates one pointer is currently touching, so it stays hover-sized
//! rather than scene-sized.

use alloc::vec::Vec;

use crate::types::Tick;

/// Pending-since timestamps for candidates in active, valid contact.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DwellTable<K> {
    entries: Vec<(K, Tick)>,
}

impl<K: Copy + Eq> DwellTable<K> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record `now` as the pending-since tick for an untracked candidate.
    ///
    /// Returns `true` if a new entry was created. A candidate that already
    /// has an entry keeps its original timestamp and `false` is returned;
    /// repeated contact never restarts a dwell.
    pub fn begin(&mut self, candidate: K, now: Tick) -> bool {
        if self.contains(&candidate) {
            return false;
        }
        self.entries.push((candidate, now));
        true
    }

    /// Remove the candidate's entry, if any.
    ///
    /// Returns `true` if an entry was removed. Clearing an untracked
    /// candidate is a no-op, not a fault.
    pub fn clear(&mut self, candidate: K) -> bool {
        match self.entries.iter().position(|(k, _)| *k == candidate) {
            Some(i) => {
                self.entries.swap_remove(i);
                true
            }
            None => false,
        }
    }

    /// The tick at which the candidate's current dwell began, if tracked.
    pub fn pending_since(&self, candidate: &K) -> Option<Tick> {
        self.entries
            .iter()
            .find(|(k, _)| k == candidate)
            .map(|&(_, since)| since)
    }

    /// Whether the candidate has a pending dwell.
    pub fn contains(&self, candidate: &K) -> bool {
        self.entries.iter().any(|(k, _)| k == candidate)
    }

    /// Number of pending dwells.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(candidate, pending_since)` pairs in no particular
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (K, Tick)> + '_ {
        self.entries.iter().copied()
    }
}
