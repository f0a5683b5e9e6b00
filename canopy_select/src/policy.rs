// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pluggable policies: candidate validity and commit timing.
//!
//! ## Overview
//!
//! The engine composes two strategy seams instead of exposing inheritance
//! hooks:
//!
//! - [`ValidityPolicy`] decides whether a candidate is currently eligible.
//!   It is consulted during event handling and again during arbitration, so
//!   eligibility is never cached from commit time.
//! - [`CommitPolicy`] decides when a pending dwell is promoted into the
//!   commit queue. It sees only timestamps; hosts with their own timing can
//!   bypass it and call [`Arbiter::commit`](crate::arbiter::Arbiter::commit)
//!   directly.

use crate::types::{CandidateStore, Tick};

/// Decides whether a candidate is currently eligible for selection.
///
/// Implementations must be pure: no side effects, and answers derived only
/// from the store's current state.
pub trait ValidityPolicy<K> {
    /// Whether the candidate may start a dwell or win an arbitration pass.
    fn is_valid<S: CandidateStore<K>>(&self, store: &S, candidate: &K) -> bool;
}

/// The default validity rule: interactable and selectable.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractableSelectable;

impl<K> ValidityPolicy<K> for InteractableSelectable {
    fn is_valid<S: CandidateStore<K>>(&self, store: &S, candidate: &K) -> bool {
        store.is_interactable(candidate) && store.is_selectable(candidate)
    }
}

/// The default rule refined by an inclusive priority band.
///
/// Candidates outside `min..=max` are never eligible, even while
/// interactable and selectable. A band with `min > max` matches no
/// candidate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PriorityBand {
    /// Lowest eligible priority.
    pub min: i32,
    /// Highest eligible priority.
    pub max: i32,
}

impl PriorityBand {
    /// Create a band covering `min..=max`.
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Whether a priority value falls inside the band.
    pub const fn contains(&self, priority: i32) -> bool {
        self.min <= priority && priority <= self.max
    }
}

impl<K> ValidityPolicy<K> for PriorityBand {
    fn is_valid<S: CandidateStore<K>>(&self, store: &S, candidate: &K) -> bool {
        InteractableSelectable.is_valid(store, candidate)
            && self.contains(store.priority(candidate))
    }
}

/// Decides when a pending dwell is committed for arbitration.
pub trait CommitPolicy {
    /// Whether a dwell that began at `pending_since` should commit at `now`.
    fn should_commit(&self, pending_since: Tick, now: Tick) -> bool;
}

/// Commit once a dwell has lasted at least `min_ticks`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DwellThreshold {
    /// Minimum dwell duration in ticks.
    pub min_ticks: u64,
}

impl CommitPolicy for DwellThreshold {
    fn should_commit(&self, pending_since: Tick, now: Tick) -> bool {
        now.elapsed_since(pending_since) >= self.min_ticks
    }
}

/// Commit every pending dwell on first evaluation (tap-style input).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Immediate;

impl CommitPolicy for Immediate {
    fn should_commit(&self, _pending_since: Tick, _now: Tick) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Candidate, CandidateFlags, CandidateSet};

    #[test]
    fn default_rule_requires_both_flags() {
        let mut set = CandidateSet::new();
        let both = set.insert(Candidate::default());
        let inert = set.insert(Candidate {
            flags: CandidateFlags::SELECTABLE,
            ..Candidate::default()
        });
        let locked = set.insert(Candidate {
            flags: CandidateFlags::INTERACTABLE,
            ..Candidate::default()
        });
        assert!(InteractableSelectable.is_valid(&set, &both));
        assert!(!InteractableSelectable.is_valid(&set, &inert));
        assert!(!InteractableSelectable.is_valid(&set, &locked));
    }

    #[test]
    fn priority_band_rejects_out_of_band_candidates() {
        let mut set = CandidateSet::new();
        let low = set.insert(Candidate {
            priority: 1,
            ..Candidate::default()
        });
        let mid = set.insert(Candidate {
            priority: 5,
            ..Candidate::default()
        });
        let band = PriorityBand::new(3, 7);
        assert!(!band.is_valid(&set, &low));
        assert!(band.is_valid(&set, &mid));
    }

    #[test]
    fn priority_band_still_requires_the_default_rule() {
        let mut set = CandidateSet::new();
        let id = set.insert(Candidate {
            priority: 5,
            flags: CandidateFlags::SELECTABLE,
            ..Candidate::default()
        });
        assert!(!PriorityBand::new(0, 10).is_valid(&set, &id));
    }

    #[test]
    fn inverted_band_matches_nothing() {
        let band = PriorityBand::new(4, 2);
        assert!(!band.contains(3));
        assert!(!band.contains(4));
    }

    #[test]
    fn dwell_threshold_commits_at_the_boundary() {
        let policy = DwellThreshold { min_ticks: 3 };
        assert!(!policy.should_commit(Tick(10), Tick(12)));
        assert!(policy.should_commit(Tick(10), Tick(13)));
        assert!(policy.should_commit(Tick(10), Tick(20)));
    }

    #[test]
    fn zero_threshold_commits_immediately() {
        let policy = DwellThreshold { min_ticks: 0 };
        assert!(policy.should_commit(Tick(5), Tick(5)));
        assert!(Immediate.should_commit(Tick(5), Tick(5)));
    }
}
