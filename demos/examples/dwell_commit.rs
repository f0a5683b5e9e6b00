// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dwell-driven selection with a session log.
//!
//! A pointer rests on a candidate until the dwell threshold promotes it,
//! then moves away before a second dwell settles. Every tick is logged as a
//! CSV row and the selection tally is printed at the end.
//!
//! Run:
//! - `cargo run -p canopy_demos --example dwell_commit`

use canopy_log::{RowWriter, Tally};
use canopy_select::arbiter::Arbiter;
use canopy_select::policy::DwellThreshold;
use canopy_select::store::{Candidate, CandidateSet};
use canopy_select::types::{CandidateStore, Tick};

fn main() {
    let mut set = CandidateSet::new();
    let target = set.insert(Candidate {
        priority: 3,
        ..Candidate::default()
    });

    let mut arbiter = Arbiter::new();
    let dwell = DwellThreshold { min_ticks: 3 };

    let mut log = RowWriter::new(Vec::new(), &["Tick", "Pending", "Winner", "Selected"])
        .expect("writing the header to a Vec cannot fail");
    let mut selections = Tally::new();

    // Ticks 0..5: in contact. Ticks 5..8: contact lost.
    for t in 0..8_u64 {
        let now = Tick(t);
        if t < 5 {
            arbiter.contact_active(&set, target, now);
        } else if t == 5 {
            arbiter.contact_ended(target);
        }
        arbiter.commit_ready(&set, &dwell, now);
        let winner = arbiter.tick(&mut set);

        if winner.is_some() {
            selections.increment();
            if set.is_selected(&target) {
                selections.start(t);
            } else {
                selections.stop(t);
            }
        }

        log.push(t);
        log.push(arbiter.pending());
        log.push(winner.map_or("-".to_string(), |w| format!("{w:?}")));
        log.push(set.is_selected(&target));
        log.write_row().expect("row arity matches the header");
    }

    // The dwell settled once (tick 3); the aborted second dwell never
    // committed.
    assert!(set.is_selected(&target));
    assert_eq!(selections.count(), 1);

    let csv = String::from_utf8(log.into_inner()).expect("rows are UTF-8");
    print!("{csv}");
    println!("selections: {}", selections.count());
    println!("selected ticks: {}", selections.active_ticks(8));
}
