// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbitration engine: one pipeline of dwell timers, commit queue, and the
//! once-per-tick resolution pass.
//!
//! ## Overview
//!
//! An [`Arbiter`] owns the dwell table and commit queue for a single contact
//! source. Contact events keep the dwell table current, an external trigger
//! (usually a [`CommitPolicy`](crate::policy::CommitPolicy) via
//! [`Arbiter::commit_ready`]) promotes pending candidates into the queue,
//! and [`Arbiter::tick`] resolves the queue to at most one winner.
//!
//! ## Driver contract
//!
//! The hosting loop must call [`Arbiter::tick`] exactly once per scheduler
//! tick, after all of that tick's contact events and commit decisions have
//! been applied. The queue accumulates state between calls, so skipped or
//! doubled ticks change behavior; the engine does not defend against them.
//!
//! ## Resolution
//!
//! - Buckets are scanned in strictly descending priority order; within a
//!   bucket, candidates in commit order.
//! - The first candidate the validity policy accepts wins; the scan stops.
//! - Every bucket is drained afterwards whether or not a winner was found.
//!   A committed-but-not-chosen candidate gets no second chance on a later
//!   tick; it must be recommitted by a fresh contact and commit cycle.
//! - The winner's selected flag is inverted through the store. That
//!   inversion is the pass's only store-visible side effect.
//!
//! Validity is evaluated at resolution time, not commit time, so a
//! candidate that became non-interactable after committing is passed over in
//! favor of the next still-valid candidate.

use alloc::vec::Vec;

use crate::dwell::DwellTable;
use crate::policy::{CommitPolicy, InteractableSelectable, ValidityPolicy};
use crate::queue::CommitQueue;
use crate::types::{CandidateStore, ContactEvent, PointerId, Tick};

/// A single arbitration pipeline.
///
/// ## Usage
///
/// - Construct with [`Arbiter::new`] for the default validity rule, or
///   [`Arbiter::with_validity`] to inject a refinement such as
///   [`PriorityBand`](crate::policy::PriorityBand).
/// - Feed contact events each tick via [`Arbiter::contact_active`] /
///   [`Arbiter::contact_ended`] (or [`Arbiter::apply`]).
/// - Promote pending candidates with [`Arbiter::commit_ready`] under a
///   commit policy, or [`Arbiter::commit`] directly.
/// - Call [`Arbiter::tick`] once per scheduler tick; it returns the winner,
///   if any.
///
/// One pipeline serves one contact source. For several pointers, see
/// [`PerPointer`].
pub struct Arbiter<K, V = InteractableSelectable> {
    timers: DwellTable<K>,
    queue: CommitQueue<K>,
    validity: V,
}

impl<K: Copy + Eq, V> core::fmt::Debug for Arbiter<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Arbiter")
            .field("pending", &self.timers.len())
            .field("queued", &self.queue.queued())
            .finish_non_exhaustive()
    }
}

impl<K: Copy + Eq> Arbiter<K> {
    /// Create a pipeline with the default validity rule.
    pub fn new() -> Self {
        Self::with_validity(InteractableSelectable)
    }
}

impl<K: Copy + Eq> Default for Arbiter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq, V: ValidityPolicy<K>> Arbiter<K, V> {
    /// Create a pipeline with an injected validity policy.
    pub fn with_validity(validity: V) -> Self {
        Self {
            timers: DwellTable::new(),
            queue: CommitQueue::new(),
            validity,
        }
    }

    /// Handle a contact-active notification (first contact or still in
    /// contact, the two are deliberately indistinguishable).
    ///
    /// An invalid candidate has any pending dwell cleared. A valid,
    /// untracked candidate starts a dwell at `now`; a valid, tracked one
    /// keeps its original timestamp. A candidate already sitting in the
    /// commit queue is not re-tracked until the next pass drains it, so a
    /// candidate is never pending and committed at once.
    pub fn contact_active<S: CandidateStore<K>>(&mut self, store: &S, candidate: K, now: Tick) {
        if !self.validity.is_valid(store, &candidate) {
            self.timers.clear(candidate);
        } else if !self.queue.contains(&candidate) {
            self.timers.begin(candidate, now);
        }
    }

    /// Handle a contact-ended notification: the pending dwell, if any, is
    /// abandoned.
    pub fn contact_ended(&mut self, candidate: K) {
        self.timers.clear(candidate);
    }

    /// Apply a [`ContactEvent`] (routing form of the two handlers above).
    pub fn apply<S: CandidateStore<K>>(
        &mut self,
        store: &S,
        event: ContactEvent<K>,
        now: Tick,
    ) {
        match event {
            ContactEvent::Active(candidate) => self.contact_active(store, candidate, now),
            ContactEvent::Ended(candidate) => self.contact_ended(candidate),
        }
    }

    /// Remove the candidate's dwell entry, if any. Idempotent.
    pub fn clear_timer(&mut self, candidate: K) {
        self.timers.clear(candidate);
    }

    /// The tick at which the candidate's current dwell began, if pending.
    pub fn pending_since(&self, candidate: &K) -> Option<Tick> {
        self.timers.pending_since(candidate)
    }

    /// Number of candidates with a pending dwell.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Number of committed candidates awaiting the next pass.
    pub fn queued(&self) -> usize {
        self.queue.queued()
    }

    /// Promote a candidate into the commit queue for its current priority.
    ///
    /// Any pending dwell entry is removed first. A pending entry is not
    /// required: the commit decision belongs to the caller, which may use
    /// its own timing entirely.
    pub fn commit<S: CandidateStore<K>>(&mut self, store: &S, candidate: K) {
        self.timers.clear(candidate);
        self.queue.push(store.priority(&candidate), candidate);
    }

    /// Commit every pending dwell the policy accepts at `now`.
    ///
    /// Returns how many candidates were committed. Validity is not
    /// re-checked here; the next pass re-checks it anyway.
    pub fn commit_ready<S: CandidateStore<K>, P: CommitPolicy>(
        &mut self,
        store: &S,
        policy: &P,
        now: Tick,
    ) -> usize {
        let ready: Vec<K> = self
            .timers
            .iter()
            .filter(|&(_, since)| policy.should_commit(since, now))
            .map(|(candidate, _)| candidate)
            .collect();
        for candidate in &ready {
            self.commit(store, *candidate);
        }
        ready.len()
    }

    /// Run the arbitration pass for this tick.
    ///
    /// Scans buckets in descending priority order, picks the first
    /// still-valid candidate as winner, drains every bucket, and inverts the
    /// winner's selected flag. Returns the winner, if any.
    pub fn tick<S: CandidateStore<K>>(&mut self, store: &mut S) -> Option<K> {
        let mut winner = None;
        'buckets: for (_, members) in self.queue.iter() {
            for candidate in members {
                if self.validity.is_valid(store, candidate) {
                    winner = Some(*candidate);
                    break 'buckets;
                }
            }
        }

        self.queue.clear_members();

        if let Some(candidate) = &winner {
            let selected = !store.is_selected(candidate);
            store.set_selected(candidate, selected);
        }
        winner
    }
}

/// One arbitration pipeline per pointer, routed by [`PointerId`].
///
/// Pipelines are created on first use and ticked in registration order.
/// They share nothing but the candidate store: when two pointers can reach
/// the same candidate in one tick, each winning pass inverts the flag in
/// turn, so the net effect is last-write-wins in registration order and a
/// double toggle is a visible no-op. Hosts that need a single arbitration
/// authority should run one shared [`Arbiter`] instead.
pub struct PerPointer<K, V = InteractableSelectable> {
    validity: V,
    pipelines: Vec<(PointerId, Arbiter<K, V>)>,
}

impl<K: Copy + Eq, V> core::fmt::Debug for PerPointer<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PerPointer")
            .field("pipelines", &self.pipelines.len())
            .finish_non_exhaustive()
    }
}

impl<K: Copy + Eq> PerPointer<K> {
    /// Create an empty router with the default validity rule.
    pub fn new() -> Self {
        Self::with_validity(InteractableSelectable)
    }
}

impl<K: Copy + Eq> Default for PerPointer<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq, V: ValidityPolicy<K> + Clone> PerPointer<K, V> {
    /// Create an empty router; every pipeline gets a clone of `validity`.
    pub fn with_validity(validity: V) -> Self {
        Self {
            validity,
            pipelines: Vec::new(),
        }
    }

    /// The pipeline owned by `pointer`, created on first use.
    pub fn arbiter(&mut self, pointer: PointerId) -> &mut Arbiter<K, V> {
        let i = match self.pipelines.iter().position(|(p, _)| *p == pointer) {
            Some(i) => i,
            None => {
                self.pipelines
                    .push((pointer, Arbiter::with_validity(self.validity.clone())));
                self.pipelines.len() - 1
            }
        };
        &mut self.pipelines[i].1
    }

    /// The pipeline owned by `pointer`, if it has one.
    pub fn get(&self, pointer: PointerId) -> Option<&Arbiter<K, V>> {
        self.pipelines
            .iter()
            .find(|(p, _)| *p == pointer)
            .map(|(_, a)| a)
    }

    /// Route a contact event to the pointer's pipeline.
    pub fn apply<S: CandidateStore<K>>(
        &mut self,
        store: &S,
        pointer: PointerId,
        event: ContactEvent<K>,
        now: Tick,
    ) {
        self.arbiter(pointer).apply(store, event, now);
    }

    /// Run [`Arbiter::commit_ready`] on every pipeline; returns the total
    /// number of commits.
    pub fn commit_ready<S: CandidateStore<K>, P: CommitPolicy>(
        &mut self,
        store: &S,
        policy: &P,
        now: Tick,
    ) -> usize {
        self.pipelines
            .iter_mut()
            .map(|(_, arbiter)| arbiter.commit_ready(store, policy, now))
            .sum()
    }

    /// Run every pipeline's arbitration pass in registration order.
    ///
    /// Returns the winners as `(pointer, candidate)` pairs, in the order
    /// the passes ran.
    pub fn tick_all<S: CandidateStore<K>>(&mut self, store: &mut S) -> Vec<(PointerId, K)> {
        let mut winners = Vec::new();
        for (pointer, arbiter) in &mut self.pipelines {
            if let Some(candidate) = arbiter.tick(store) {
                winners.push((*pointer, candidate));
            }
        }
        winners
    }

    /// Number of pipelines created so far.
    pub fn len(&self) -> usize {
        self.pipelines.len()
    }

    /// Whether no pipeline has been created yet.
    pub fn is_empty(&self) -> bool {
        self.pipelines.is_empty()
    }
}
