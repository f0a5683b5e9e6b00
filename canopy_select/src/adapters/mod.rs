// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters that synthesize contact events from other input models.
//!
//! Enabled via feature flags to keep the core small and `no_std` by default.

#[cfg(feature = "region_adapter")]
pub mod region;
