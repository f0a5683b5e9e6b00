// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_log --heading-base-level=0

//! Canopy Log: column-oriented row logging and interaction tallies.
//!
//! Canopy Log records interaction sessions as flat CSV tables.
//!
//! - Declare the column set once; every row is checked against it.
//! - Push fields as they become known during a tick, then write the row.
//! - Accumulate per-interaction statistics (count, active time, distance)
//!   with [`Tally`] and flush them into rows between trials.
//!
//! It is deliberately independent of the arbitration engine: consumers pass
//! plain values (tick numbers, winner labels, flag states), so any source
//! of per-tick observations can be logged.
//!
//! # Example
//!
//! ```rust
//! use canopy_log::{RowWriter, Tally};
//!
//! let mut out = Vec::new();
//! let mut log = RowWriter::new(&mut out, &["Tick", "Winner", "Selected"]).unwrap();
//!
//! let mut selections = Tally::new();
//! selections.increment();
//! selections.start(3);
//!
//! log.push(3);
//! log.push("button-a");
//! log.push(true);
//! log.write_row().unwrap();
//!
//! selections.stop(7);
//! assert_eq!(selections.active_ticks(7), 4);
//! let text = String::from_utf8(out).unwrap();
//! assert_eq!(text, "Tick,Winner,Selected\n3,button-a,true\n");
//! ```

pub mod row;
pub mod tally;

pub use row::RowWriter;
pub use tally::Tally;
