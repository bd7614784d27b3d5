// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Coverage gap analysis across teams and shifts.
//!
//! ## Invariants
//!
//! - The analysis window is exactly `days_to_check` calendar days starting
//!   at the start instant's calendar day; time of day is discarded.
//! - A shift covers a day for a team only when its status provides coverage,
//!   its assignee is on the team's roster, and the day falls in the shift's
//!   inclusive start-day to end-day span.
//! - Inputs are never mutated; the result is a freshly allocated list.

use crate::types::{Shift, Team};
use crate::window::DayWindow;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

/// One uncovered (day, team) combination.
///
/// Carries no identity beyond the pair; the same team gapping on several
/// days produces one entry per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageGap {
    /// The uncovered calendar day.
    pub date: Date,
    /// The team with no covering shift on that day.
    pub team: Team,
}

/// Finds the days in a window where teams have no covering shift.
///
/// For each day of the window and each team, a gap is reported unless some
/// shift covers the pair (see module invariants). Malformed shifts and
/// shifts whose assignee is on no roster never cover anything and therefore
/// surface as gaps, not as errors.
///
/// # Arguments
///
/// * `teams` - All teams to check for coverage
/// * `shifts` - All shifts in the system
/// * `start_date` - Start of the period to check; normalized to its calendar day
/// * `days_to_check` - Number of days to examine; non-positive yields no gaps
///
/// # Returns
///
/// Gaps ordered ascending by date. Teams gapping on the same date appear in
/// input order (the documented tie-break).
#[must_use]
pub fn find_coverage_gaps(
    teams: &[Team],
    shifts: &[Shift],
    start_date: OffsetDateTime,
    days_to_check: i64,
) -> Vec<CoverageGap> {
    let window: DayWindow = DayWindow::new(start_date.date(), days_to_check);
    let mut gaps: Vec<CoverageGap> = Vec::new();

    // Day-major iteration keeps the output sorted by date without a final
    // sort pass; equal dates retain team input order.
    for date in window.days() {
        let day: i32 = date.to_julian_day();
        for team in teams {
            let covered: bool = shifts.iter().any(|shift| covers_team_day(shift, team, day));
            if !covered {
                gaps.push(CoverageGap {
                    date,
                    team: team.clone(),
                });
            }
        }
    }

    gaps
}

/// Checks whether a single shift covers a team on a given day.
fn covers_team_day(shift: &Shift, team: &Team, day: i32) -> bool {
    if !shift.status.provides_coverage() {
        return false;
    }
    if !team.has_member(&shift.assignee) {
        return false;
    }
    shift
        .day_span()
        .is_some_and(|(first, last)| first <= day && day <= last)
}
