// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_select --heading-base-level=0

//! Canopy Select: deterministic, `no_std` dwell-selection arbitration.
//!
//! ## Overview
//!
//! Once per scheduler tick, this crate decides which single candidate
//! target (out of potentially many touched by a pointer) has its selection
//! state toggled.
//! It does not perform hit testing or collision detection.
//! Instead, feed it contact events (for example from collider callbacks, a
//! box-tree hit test, or the [region adapter](crate::adapters)), let a
//! commit policy promote settled dwells, and run the arbitration pass.
//!
//! ## Inputs
//!
//! Candidates are identified by a cheap `Copy + Eq` key `K` and live in a
//! host-owned store implementing
//! [`CandidateStore`](crate::types::CandidateStore): priority plus the
//! interactable / selectable / selected flags. The crate ships
//! [`CandidateSet`](crate::store::CandidateSet) as a reference store with
//! generational handles.
//!
//! ## Lifecycle
//!
//! Per candidate and tick:
//! `Untracked → Pending` on the first valid contact (repeats never restart
//! the timer), back to `Untracked` on contact end or invalidity, and
//! `Pending → Committed → Winner | Discarded → Untracked` once an external
//! commit trigger promotes it. Committed candidates never survive a pass:
//! the queue is drained whether or not a winner was found.
//!
//! ## Arbitration
//!
//! Committed candidates wait in priority buckets (descending order,
//! FIFO within a bucket). The pass picks the first candidate that is still
//! valid at resolution time, toggles its selected flag, and discards the
//! rest. At most one candidate is toggled per tick per pipeline.
//!
//! ## Workflow
//!
//! 1) Deliver the tick's contact events via
//!    [`Arbiter::contact_active`](crate::arbiter::Arbiter::contact_active) /
//!    [`Arbiter::contact_ended`](crate::arbiter::Arbiter::contact_ended).
//! 2) Promote settled dwells with
//!    [`Arbiter::commit_ready`](crate::arbiter::Arbiter::commit_ready)
//!    under a [`CommitPolicy`](crate::policy::CommitPolicy), or call
//!    [`Arbiter::commit`](crate::arbiter::Arbiter::commit) on your own
//!    schedule.
//! 3) Resolve with [`Arbiter::tick`](crate::arbiter::Arbiter::tick),
//!    exactly once per scheduler tick, after steps 1 and 2.
//!
//! For several independent pointers, route events through
//! [`PerPointer`](crate::arbiter::PerPointer); each pointer gets its own
//! pipeline and the passes run in registration order.
//!
//! ## Minimal example
//!
//! ```
//! use canopy_select::arbiter::Arbiter;
//! use canopy_select::policy::DwellThreshold;
//! use canopy_select::store::{Candidate, CandidateSet};
//! use canopy_select::types::{CandidateStore, Tick};
//!
//! let mut set = CandidateSet::new();
//! let button = set.insert(Candidate { priority: 5, ..Candidate::default() });
//! let backdrop = set.insert(Candidate { priority: 0, ..Candidate::default() });
//!
//! let mut arbiter = Arbiter::new();
//! let dwell = DwellThreshold { min_ticks: 2 };
//!
//! // The pointer rests on both candidates for three ticks.
//! let mut winner = None;
//! for t in 0..3 {
//!     let now = Tick(t);
//!     arbiter.contact_active(&set, button, now);
//!     arbiter.contact_active(&set, backdrop, now);
//!     arbiter.commit_ready(&set, &dwell, now);
//!     winner = arbiter.tick(&mut set);
//! }
//!
//! // The higher-priority candidate wins and is now selected.
//! assert_eq!(winner, Some(button));
//! assert!(set.is_selected(&button));
//! assert!(!set.is_selected(&backdrop));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod arbiter;
pub mod dwell;
pub mod policy;
pub mod queue;
pub mod store;
pub mod types;
