// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region adapter: contact events from a pointer position and candidate
//! rectangles.
//!
//! ## Feature
//!
//! Enable with `region_adapter`.
//!
//! ## Notes
//!
//! Hosts whose input arrives as collider or picker callbacks can feed the
//! engine directly. This adapter serves the other common shape: a pointer
//! position sampled once per tick plus a list of candidate regions. Each
//! sweep emits `Active` for every region containing the position (the
//! engine collapses enter and stay itself) and `Ended` exactly once for
//! each region left since the previous sweep, including regions that
//! disappeared from the list.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::types::ContactEvent;

/// Tracks which candidate regions a pointer is currently inside.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegionTracker<K> {
    inside: Vec<K>,
}

impl<K: Copy + Eq> RegionTracker<K> {
    /// Create a tracker with no containment history.
    pub fn new() -> Self {
        Self {
            inside: Vec::new(),
        }
    }

    /// Sweep the pointer position over the candidate regions, producing the
    /// tick's contact events.
    ///
    /// `regions` is the current `(candidate, world-space bounds)` list; it
    /// may change freely between sweeps.
    pub fn sweep(&mut self, position: Point, regions: &[(K, Rect)]) -> Vec<ContactEvent<K>> {
        let mut events = Vec::new();
        for &(candidate, bounds) in regions {
            if bounds.contains(position) {
                events.push(ContactEvent::Active(candidate));
                if !self.inside.contains(&candidate) {
                    self.inside.push(candidate);
                }
            }
        }

        let mut i = 0;
        while i < self.inside.len() {
            let candidate = self.inside[i];
            let still_inside = regions
                .iter()
                .any(|&(k, bounds)| k == candidate && bounds.contains(position));
            if still_inside {
                i += 1;
            } else {
                self.inside.swap_remove(i);
                events.push(ContactEvent::Ended(candidate));
            }
        }
        events
    }

    /// Forget all containment and emit `Ended` for every tracked region
    /// (pointer lost or left the surface).
    pub fn reset(&mut self) -> Vec<ContactEvent<K>> {
        let mut events = Vec::new();
        for &candidate in &self.inside {
            events.push(ContactEvent::Ended(candidate));
        }
        self.inside.clear();
        events
    }

    /// The candidates the pointer was inside at the last sweep.
    pub fn inside(&self) -> &[K] {
        &self.inside
    }
}
