// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for arbitration: the candidate capability contract, tick
//! timestamps, pointer tokens, and contact events.
//!
//! ## Overview
//!
//! These types describe the engine's inputs. Candidates live outside the
//! engine; everything here is either a cheap identity or a trait the host
//! implements over its own data.

/// Read and write access to candidate state, keyed by candidate identity.
///
/// The engine never owns candidates. It holds identities of type `K`
/// (cheap `Copy + Eq` handles) and consults the store on every decision, so
/// state changes between contact and resolution are always observed.
///
/// Implementations decide what `K` is: an index, a generational handle such
/// as [`CandidateId`](crate::store::CandidateId), or an ECS entity.
pub trait CandidateStore<K> {
    /// Arbitration priority of the candidate. Higher is more important.
    fn priority(&self, candidate: &K) -> i32;

    /// Whether the candidate currently reacts to input at all.
    fn is_interactable(&self, candidate: &K) -> bool;

    /// Whether the candidate can currently be selected.
    fn is_selectable(&self, candidate: &K) -> bool;

    /// Current selection state of the candidate.
    fn is_selected(&self, candidate: &K) -> bool;

    /// Set the selection state of the candidate.
    fn set_selected(&mut self, candidate: &K, selected: bool);
}

/// A monotonic timestamp in scheduler ticks, supplied by the host loop.
///
/// The engine never reads a clock. Callers stamp contact events with the
/// current tick and pass the same value to commit policies, which keeps the
/// engine deterministic and `no_std`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Tick(pub u64);

impl Tick {
    /// The zero tick.
    pub const ZERO: Self = Self(0);

    /// Whole ticks elapsed since `start`, saturating at zero if `start` is
    /// in the future.
    pub fn elapsed_since(self, start: Self) -> u64 {
        self.0.saturating_sub(start.0)
    }
}

/// Opaque identity of a contact source (a finger, a ray, a mouse).
///
/// The engine does not interpret this beyond routing events to the pipeline
/// owned by that pointer; see [`PerPointer`](crate::arbiter::PerPointer).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PointerId(pub u32);

/// A contact notification for one candidate.
///
/// `Active` covers both the first contact and every subsequent
/// still-in-contact notification; the dwell table ignores repeats, so event
/// sources do not need to distinguish enter from stay. `Ended` is the only
/// cancellation signal for a pending dwell.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ContactEvent<K> {
    /// The pointer is in contact with the candidate this tick.
    Active(K),
    /// The pointer is no longer in contact with the candidate.
    Ended(K),
}
