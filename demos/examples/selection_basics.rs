// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection arbitration basics.
//!
//! Commit three candidates at two priorities and resolve: the earliest
//! committed high-priority candidate wins, everything else is discarded.
//!
//! Run:
//! - `cargo run -p canopy_demos --example selection_basics`

use canopy_select::arbiter::Arbiter;
use canopy_select::store::{Candidate, CandidateFlags, CandidateSet};
use canopy_select::types::CandidateStore;

fn main() {
    let mut set = CandidateSet::new();
    let card = set.insert(Candidate {
        priority: 5,
        ..Candidate::default()
    });
    let badge = set.insert(Candidate {
        priority: 5,
        ..Candidate::default()
    });
    let backdrop = set.insert(Candidate {
        priority: 0,
        ..Candidate::default()
    });

    let mut arbiter = Arbiter::new();

    // The commit trigger fires for all three within one tick.
    arbiter.commit(&set, backdrop);
    arbiter.commit(&set, card);
    arbiter.commit(&set, badge);

    let winner = arbiter.tick(&mut set);
    println!("winner: {winner:?}");
    assert_eq!(winner, Some(card), "first commit in the top bucket wins");
    assert!(set.is_selected(&card));
    assert!(!set.is_selected(&badge));
    assert!(!set.is_selected(&backdrop));
    assert_eq!(arbiter.queued(), 0, "buckets drain on every pass");

    // A second cycle with the card invalidated falls through to the badge.
    set.get_mut(card)
        .unwrap()
        .flags
        .remove(CandidateFlags::INTERACTABLE);
    arbiter.commit(&set, card);
    arbiter.commit(&set, badge);
    let winner = arbiter.tick(&mut set);
    println!("winner after invalidation: {winner:?}");
    assert_eq!(winner, Some(badge));
    assert!(set.is_selected(&badge));

    // A third cycle toggles the badge back off.
    arbiter.commit(&set, badge);
    let winner = arbiter.tick(&mut set);
    println!("winner again: {winner:?}");
    assert_eq!(winner, Some(badge));
    assert!(!set.is_selected(&badge), "winning again deselects");
}
