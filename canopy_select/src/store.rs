// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A reference candidate store with generational handles.
//!
//! ## Overview
//!
//! Arbitration only needs the [`CandidateStore`] capability surface; hosts
//! with their own widget or entity storage implement the trait directly.
//! [`CandidateSet`] is the self-contained implementation used by the tests,
//! demos, and benches, and is a reasonable starting point for hosts without
//! one.
//!
//! Handles are generational: removing a candidate frees its slot, and a
//! reused slot gets a higher generation, so a stale [`CandidateId`] never
//! aliases a live candidate. Stale handles read as never-valid and ignore
//! writes, which matches the engine's view of a destroyed candidate.

use alloc::vec::Vec;

use crate::types::CandidateStore;

bitflags::bitflags! {
    /// Candidate state flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CandidateFlags: u8 {
        /// Candidate reacts to input.
        const INTERACTABLE = 0b0000_0001;
        /// Candidate can be selected.
        const SELECTABLE   = 0b0000_0010;
        /// Candidate is currently selected.
        const SELECTED     = 0b0000_0100;
    }
}

impl Default for CandidateFlags {
    fn default() -> Self {
        Self::INTERACTABLE | Self::SELECTABLE
    }
}

/// Per-candidate data held by a [`CandidateSet`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Arbitration priority. Higher is more important.
    pub priority: i32,
    /// State flags.
    pub flags: CandidateFlags,
}

impl Default for Candidate {
    fn default() -> Self {
        Self {
            priority: 0,
            flags: CandidateFlags::default(),
        }
    }
}

/// Generational handle of a candidate in a [`CandidateSet`].
///
/// Consists of a slot index and a generation counter. On slot reuse the
/// generation increments, producing a new, distinct handle; stale handles
/// never alias a different live candidate because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CandidateId(u32, u32);

impl CandidateId {
    const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    candidate: Candidate,
}

/// An owning candidate store with generational slots.
#[derive(Clone, Default)]
pub struct CandidateSet {
    slots: Vec<Option<Slot>>,
    free_list: Vec<usize>,
}

impl core::fmt::Debug for CandidateSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.slots.len();
        let alive = self.slots.iter().filter(|s| s.is_some()).count();
        f.debug_struct("CandidateSet")
            .field("slots_total", &total)
            .field("slots_alive", &alive)
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl CandidateSet {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Insert a candidate, reusing a freed slot when available.
    pub fn insert(&mut self, candidate: Candidate) -> CandidateId {
        if let Some(idx) = self.free_list.pop() {
            let generation = self.slots[idx].as_ref().map(|s| s.generation).unwrap_or(0) + 1;
            self.slots[idx] = Some(Slot {
                generation,
                candidate,
            });
            #[allow(
                clippy::cast_possible_truncation,
                reason = "CandidateId uses 32-bit indices by design."
            )]
            CandidateId::new(idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(Slot {
                generation,
                candidate,
            }));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "CandidateId uses 32-bit indices by design."
            )]
            CandidateId::new((self.slots.len() - 1) as u32, generation)
        }
    }

    /// Remove a candidate and free its slot. Stale handles are ignored.
    pub fn remove(&mut self, id: CandidateId) {
        if !self.is_alive(id) {
            return;
        }
        self.slots[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Whether the handle still refers to a live candidate.
    pub fn is_alive(&self, id: CandidateId) -> bool {
        self.slot(id).is_some()
    }

    /// The candidate behind a live handle.
    pub fn get(&self, id: CandidateId) -> Option<&Candidate> {
        self.slot(id).map(|s| &s.candidate)
    }

    /// Mutable access to the candidate behind a live handle.
    pub fn get_mut(&mut self, id: CandidateId) -> Option<&mut Candidate> {
        let slot = self.slots.get_mut(id.idx())?.as_mut()?;
        if slot.generation != id.1 {
            return None;
        }
        Some(&mut slot.candidate)
    }

    /// Number of live candidates.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Whether the store holds no live candidates.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot(&self, id: CandidateId) -> Option<&Slot> {
        let slot = self.slots.get(id.idx())?.as_ref()?;
        if slot.generation != id.1 {
            return None;
        }
        Some(slot)
    }
}

impl CandidateStore<CandidateId> for CandidateSet {
    fn priority(&self, candidate: &CandidateId) -> i32 {
        self.get(*candidate).map(|c| c.priority).unwrap_or(0)
    }

    fn is_interactable(&self, candidate: &CandidateId) -> bool {
        self.get(*candidate)
            .is_some_and(|c| c.flags.contains(CandidateFlags::INTERACTABLE))
    }

    fn is_selectable(&self, candidate: &CandidateId) -> bool {
        self.get(*candidate)
            .is_some_and(|c| c.flags.contains(CandidateFlags::SELECTABLE))
    }

    fn is_selected(&self, candidate: &CandidateId) -> bool {
        self.get(*candidate)
            .is_some_and(|c| c.flags.contains(CandidateFlags::SELECTED))
    }

    fn set_selected(&mut self, candidate: &CandidateId, selected: bool) {
        if let Some(c) = self.get_mut(*candidate) {
            c.flags.set(CandidateFlags::SELECTED, selected);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_read_back() {
        let mut set = CandidateSet::new();
        let id = set.insert(Candidate {
            priority: 5,
            ..Candidate::default()
        });
        assert!(set.is_alive(id));
        assert_eq!(set.priority(&id), 5);
        assert!(set.is_interactable(&id));
        assert!(set.is_selectable(&id));
        assert!(!set.is_selected(&id));
    }

    #[test]
    fn stale_handle_never_aliases_reused_slot() {
        let mut set = CandidateSet::new();
        let old = set.insert(Candidate {
            priority: 1,
            ..Candidate::default()
        });
        set.remove(old);
        let new = set.insert(Candidate {
            priority: 9,
            ..Candidate::default()
        });
        assert_ne!(old, new);
        assert!(!set.is_alive(old));
        assert!(set.is_alive(new));
        // Reads through the stale handle see nothing.
        assert_eq!(set.get(old), None);
        assert_eq!(set.priority(&old), 0);
        assert!(!set.is_interactable(&old));
    }

    #[test]
    fn writes_through_stale_handles_are_ignored() {
        let mut set = CandidateSet::new();
        let old = set.insert(Candidate::default());
        set.remove(old);
        let new = set.insert(Candidate::default());
        set.set_selected(&old, true);
        assert!(!set.is_selected(&new));
    }

    #[test]
    fn remove_is_idempotent() {
        let mut set = CandidateSet::new();
        let id = set.insert(Candidate::default());
        set.remove(id);
        set.remove(id);
        assert_eq!(set.len(), 0);
        assert_eq!(set.free_list.len(), 1, "slot must be freed exactly once");
    }

    #[test]
    fn set_selected_toggles_only_the_selected_flag() {
        let mut set = CandidateSet::new();
        let id = set.insert(Candidate::default());
        set.set_selected(&id, true);
        assert!(set.is_selected(&id));
        assert!(set.is_interactable(&id));
        set.set_selected(&id, false);
        assert!(!set.is_selected(&id));
    }
}
