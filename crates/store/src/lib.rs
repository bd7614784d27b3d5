// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Data-access layer for the Ctrl+Shift on-call scheduler.
//!
//! This crate has two halves:
//!
//! - [`MemoryStore`] — a synchronous in-memory repository with CRUD
//!   operations over teams, members, and shifts. The member registry is the
//!   single source of truth; teams hold rosters of member ids and are
//!   resolved into [`ctrl_shift_domain::Team`] snapshots at read time, so
//!   member data can never drift between rosters.
//! - [`MockScheduleApi`] — an async facade that wraps a shared store and
//!   applies a configurable artificial latency before every call,
//!   simulating a network backend for UI development. The domain analyzers
//!   themselves stay synchronous and pure; the latency lives only here, at
//!   the boundary.
//!
//! There is no real persistence behind either of these; a production
//! backend would replace this crate wholesale while keeping the operation
//! set.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod memory;
mod mock;
mod seed;

#[cfg(test)]
mod tests;

pub use error::StoreError;
pub use memory::{
    MemberUpdate, MemoryStore, NewMember, NewShift, NewTeam, ShiftFilter, ShiftUpdate, TeamUpdate,
};
pub use mock::{MockScheduleApi, TeamSupportData};
pub use seed::{demo_start, demo_store};
