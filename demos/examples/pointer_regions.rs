// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two pointers driving independent pipelines from region sweeps.
//!
//! Each pointer samples a position per tick; the region adapter turns the
//! positions into contact events, an immediate commit policy promotes every
//! settled contact, and `PerPointer` resolves both pipelines in order.
//!
//! Run:
//! - `cargo run -p canopy_demos --example pointer_regions`

use canopy_select::adapters::region::RegionTracker;
use canopy_select::arbiter::PerPointer;
use canopy_select::policy::DwellThreshold;
use canopy_select::store::{Candidate, CandidateId, CandidateSet};
use canopy_select::types::{CandidateStore, PointerId, Tick};
use kurbo::{Point, Rect};

fn main() {
    let mut set = CandidateSet::new();
    let left_pad = set.insert(Candidate {
        priority: 2,
        ..Candidate::default()
    });
    let right_pad = set.insert(Candidate {
        priority: 2,
        ..Candidate::default()
    });

    let regions: Vec<(CandidateId, Rect)> = vec![
        (left_pad, Rect::new(0.0, 0.0, 40.0, 40.0)),
        (right_pad, Rect::new(60.0, 0.0, 100.0, 40.0)),
    ];

    let finger = PointerId(0);
    let thumb = PointerId(1);
    let mut router: PerPointer<CandidateId> = PerPointer::new();
    let mut finger_track = RegionTracker::new();
    let mut thumb_track = RegionTracker::new();

    let dwell = DwellThreshold { min_ticks: 2 };

    // The finger holds on the left pad; the thumb crosses to the right pad.
    let finger_path = [Point::new(10.0, 10.0); 4];
    let thumb_path = [
        Point::new(50.0, 20.0),
        Point::new(70.0, 20.0),
        Point::new(75.0, 20.0),
        Point::new(80.0, 20.0),
    ];

    for t in 0..4_u64 {
        let now = Tick(t);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "four samples by construction"
        )]
        let i = t as usize;
        for event in finger_track.sweep(finger_path[i], &regions) {
            router.apply(&set, finger, event, now);
        }
        for event in thumb_track.sweep(thumb_path[i], &regions) {
            router.apply(&set, thumb, event, now);
        }
        router.commit_ready(&set, &dwell, now);
        for (pointer, winner) in router.tick_all(&mut set) {
            println!("tick {t}: pointer {pointer:?} toggled {winner:?}");
        }
    }

    // The finger's dwell settled on the left pad; the thumb reached the
    // right pad late and its dwell settled on the final tick.
    assert!(set.is_selected(&left_pad));
    assert!(set.is_selected(&right_pad));
    println!("left selected: {}", set.is_selected(&left_pad));
    println!("right selected: {}", set.is_selected(&right_pad));
}
