// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod backup;
mod coverage;
mod error;
mod reports;
mod types;
mod validation;
mod window;

#[cfg(test)]
mod tests;

pub use backup::find_shifts_without_backup;
pub use coverage::{CoverageGap, find_coverage_gaps};
pub use error::DomainError;
pub use reports::{
    ReportPeriod, SummaryMetrics, filter_shifts_by_period, filter_shifts_by_range, summary_metrics,
};
pub use types::{Shift, ShiftStatus, ShiftType, Team, TeamMember, TeamRole};
pub use validation::{validate_member_fields, validate_shift_fields, validate_team_fields};
pub use window::DayWindow;
