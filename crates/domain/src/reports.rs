// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report aggregation over teams and shifts.
//!
//! Read-only calculations backing the reporting views: trailing-period
//! shift filters and workspace-wide summary metrics. Filters select by the
//! shift's start instant; day-span semantics belong to the analyzers only.

use crate::error::DomainError;
use crate::types::{Shift, Team};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;
use time::{Duration, OffsetDateTime};

/// Predefined trailing report periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    /// The trailing 7 days.
    Week,
    /// The trailing 30 days.
    Month,
    /// The trailing 90 days.
    Quarter,
}

impl ReportPeriod {
    /// Returns the number of trailing days this period covers.
    #[must_use]
    pub const fn days(self) -> i64 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
        }
    }

    /// Converts this period to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
        }
    }
}

impl FromStr for ReportPeriod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            _ => Err(DomainError::InvalidReportPeriod(s.to_string())),
        }
    }
}

impl std::fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Workspace-wide shift and roster totals for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    /// Number of shifts considered.
    pub total_shifts: usize,
    /// Total scheduled hours across all shifts.
    pub total_hours: f64,
    /// Mean shift length in hours; zero when there are no shifts.
    pub average_shift_length: f64,
    /// Number of teams.
    pub teams_count: usize,
    /// Number of distinct members across all rosters.
    pub members_count: usize,
}

/// Selects the shifts whose start falls within an inclusive range.
#[must_use]
pub fn filter_shifts_by_range(
    shifts: &[Shift],
    range_start: OffsetDateTime,
    range_end: OffsetDateTime,
) -> Vec<Shift> {
    shifts
        .iter()
        .filter(|shift| shift.start >= range_start && shift.start <= range_end)
        .cloned()
        .collect()
}

/// Selects the shifts that started within the trailing period ending at
/// `reference`.
///
/// # Errors
///
/// Returns [`DomainError::DateArithmeticOverflow`] if the start of the
/// trailing range is not representable.
pub fn filter_shifts_by_period(
    shifts: &[Shift],
    reference: OffsetDateTime,
    period: ReportPeriod,
) -> Result<Vec<Shift>, DomainError> {
    let range_start: OffsetDateTime = reference
        .checked_sub(Duration::days(period.days()))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("computing the start of the trailing {period} range"),
        })?;
    Ok(filter_shifts_by_range(shifts, range_start, reference))
}

/// Computes summary metrics over a snapshot of teams and shifts.
///
/// Malformed shifts (`start` after `end`) contribute zero hours. Members on
/// several rosters are counted once.
#[must_use]
pub fn summary_metrics(teams: &[Team], shifts: &[Shift]) -> SummaryMetrics {
    let total_hours: f64 = shifts.iter().map(shift_hours).sum();

    let distinct_members: HashSet<&str> = teams
        .iter()
        .flat_map(|team| team.members.iter().map(|member| member.id.as_str()))
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let average_shift_length: f64 = if shifts.is_empty() {
        0.0
    } else {
        total_hours / shifts.len() as f64
    };

    SummaryMetrics {
        total_shifts: shifts.len(),
        total_hours,
        average_shift_length,
        teams_count: teams.len(),
        members_count: distinct_members.len(),
    }
}

/// Returns a shift's length in hours, or zero for a malformed shift.
fn shift_hours(shift: &Shift) -> f64 {
    let length: Duration = shift.end - shift.start;
    if length.is_negative() {
        return 0.0;
    }
    length.as_seconds_f64() / 3600.0
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{ShiftType, Team, TeamMember, TeamRole};
    use time::macros::datetime;

    fn make_shift(id: &str, start: OffsetDateTime, end: OffsetDateTime) -> Shift {
        Shift::new(
            String::from(id),
            String::from("On-Call"),
            start,
            end,
            ShiftType::Primary,
            String::from("m1"),
        )
    }

    fn make_team(id: &str, member_ids: &[&str]) -> Team {
        Team {
            id: String::from(id),
            name: format!("Team {id}"),
            description: None,
            members: member_ids
                .iter()
                .map(|m| {
                    TeamMember::new(
                        String::from(*m),
                        format!("Member {m}"),
                        format!("{m}@example.com"),
                        TeamRole::Developer,
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn test_range_filter_is_inclusive_at_both_ends() {
        let shifts: Vec<Shift> = vec![
            make_shift(
                "before",
                datetime!(2025-05-05 23:59 UTC),
                datetime!(2025-05-06 8:00 UTC),
            ),
            make_shift(
                "at-start",
                datetime!(2025-05-06 0:00 UTC),
                datetime!(2025-05-06 8:00 UTC),
            ),
            make_shift(
                "at-end",
                datetime!(2025-05-08 0:00 UTC),
                datetime!(2025-05-08 8:00 UTC),
            ),
            make_shift(
                "after",
                datetime!(2025-05-08 0:01 UTC),
                datetime!(2025-05-08 8:00 UTC),
            ),
        ];

        let kept: Vec<Shift> = filter_shifts_by_range(
            &shifts,
            datetime!(2025-05-06 0:00 UTC),
            datetime!(2025-05-08 0:00 UTC),
        );
        let ids: Vec<&str> = kept.iter().map(|shift| shift.id.as_str()).collect();
        assert_eq!(ids, vec!["at-start", "at-end"]);
    }

    #[test]
    fn test_period_filter_week() {
        let shifts: Vec<Shift> = vec![
            make_shift(
                "recent",
                datetime!(2025-05-03 8:00 UTC),
                datetime!(2025-05-03 20:00 UTC),
            ),
            make_shift(
                "stale",
                datetime!(2025-04-01 8:00 UTC),
                datetime!(2025-04-01 20:00 UTC),
            ),
        ];

        let kept: Vec<Shift> =
            filter_shifts_by_period(&shifts, datetime!(2025-05-06 0:00 UTC), ReportPeriod::Week)
                .unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "recent");
    }

    #[test]
    fn test_period_days() {
        assert_eq!(ReportPeriod::Week.days(), 7);
        assert_eq!(ReportPeriod::Month.days(), 30);
        assert_eq!(ReportPeriod::Quarter.days(), 90);
    }

    #[test]
    fn test_summary_counts_hours_and_members() {
        let teams: Vec<Team> = vec![make_team("t1", &["m1", "m2"]), make_team("t2", &["m2"])];
        let shifts: Vec<Shift> = vec![
            make_shift(
                "s1",
                datetime!(2025-05-06 8:00 UTC),
                datetime!(2025-05-06 20:00 UTC),
            ),
            make_shift(
                "s2",
                datetime!(2025-05-07 8:00 UTC),
                datetime!(2025-05-07 14:00 UTC),
            ),
        ];

        let metrics: SummaryMetrics = summary_metrics(&teams, &shifts);
        assert_eq!(metrics.total_shifts, 2);
        assert!((metrics.total_hours - 18.0).abs() < f64::EPSILON);
        assert!((metrics.average_shift_length - 9.0).abs() < f64::EPSILON);
        assert_eq!(metrics.teams_count, 2);
        // m2 sits on both rosters but is counted once.
        assert_eq!(metrics.members_count, 2);
    }

    #[test]
    fn test_summary_with_no_shifts() {
        let teams: Vec<Team> = vec![make_team("t1", &["m1"])];
        let metrics: SummaryMetrics = summary_metrics(&teams, &[]);
        assert_eq!(metrics.total_shifts, 0);
        assert!(metrics.total_hours.abs() < f64::EPSILON);
        assert!(metrics.average_shift_length.abs() < f64::EPSILON);
    }

    #[test]
    fn test_malformed_shift_contributes_zero_hours() {
        let shifts: Vec<Shift> = vec![make_shift(
            "s1",
            datetime!(2025-05-07 8:00 UTC),
            datetime!(2025-05-06 8:00 UTC),
        )];

        let metrics: SummaryMetrics = summary_metrics(&[], &shifts);
        assert_eq!(metrics.total_shifts, 1);
        assert!(metrics.total_hours.abs() < f64::EPSILON);
    }
}
