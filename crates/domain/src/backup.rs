// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backup coverage analysis.
//!
//! Flags primary shifts that run on days with no backup shift behind them.
//!
//! ## Invariants
//!
//! - Cancelled and completed shifts neither need backup nor provide it.
//! - Only days inside the analysis window are bucketed; the window follows
//!   the same convention as the coverage gap analyzer.
//! - Shift types other than primary and backup influence neither side of
//!   the check.
//! - No deduplication: a primary shift spanning several unbacked days is
//!   reported once per flagged day it touches. Callers needing distinct
//!   shifts must dedupe by id.

use crate::types::{Shift, ShiftType};
use crate::window::DayWindow;
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// Per-day shift bucket.
#[derive(Debug, Default)]
struct DayBucket {
    /// Indices of primary shifts touching this day.
    primary: Vec<usize>,
    /// Whether any backup shift touches this day.
    has_backup: bool,
}

/// Finds primary shifts running on days with no backup coverage.
///
/// Every in-window day touched by a retained shift is bucketed into that
/// day's primary or backup list by shift type. Days with primary coverage
/// but no backup contribute all of their primary shifts to the result.
///
/// # Arguments
///
/// * `shifts` - All shifts in the system
/// * `start_date` - Start of the period to check; normalized to its calendar day
/// * `days_to_check` - Number of days to examine; non-positive yields no shifts
///
/// # Returns
///
/// Flagged primary shifts, ordered by flagged day and then by input order
/// within a day. See the module invariants for the no-dedup contract.
#[must_use]
pub fn find_shifts_without_backup(
    shifts: &[Shift],
    start_date: OffsetDateTime,
    days_to_check: i64,
) -> Vec<Shift> {
    let window: DayWindow = DayWindow::new(start_date.date(), days_to_check);
    let mut buckets: BTreeMap<i32, DayBucket> = BTreeMap::new();

    for (index, shift) in shifts.iter().enumerate() {
        if !shift.status.provides_coverage() {
            continue;
        }
        let Some((first, last)) = shift.day_span() else {
            continue;
        };
        let Some((lo, hi)) = window.clamp(first, last) else {
            continue;
        };
        for day in lo..=hi {
            let bucket: &mut DayBucket = buckets.entry(day).or_default();
            match shift.shift_type {
                ShiftType::Primary => bucket.primary.push(index),
                ShiftType::Backup => bucket.has_backup = true,
                ShiftType::Night | ShiftType::Weekend | ShiftType::Holiday => {}
            }
        }
    }

    let mut flagged: Vec<Shift> = Vec::new();
    for bucket in buckets.values() {
        if !bucket.has_backup {
            flagged.extend(
                bucket
                    .primary
                    .iter()
                    .filter_map(|&index| shifts.get(index).cloned()),
            );
        }
    }

    flagged
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::ShiftStatus;
    use time::macros::datetime;

    fn make_shift(
        id: &str,
        start: OffsetDateTime,
        end: OffsetDateTime,
        shift_type: ShiftType,
        status: ShiftStatus,
    ) -> Shift {
        let mut shift: Shift = Shift::new(
            String::from(id),
            String::from("On-Call"),
            start,
            end,
            shift_type,
            String::from("m1"),
        );
        shift.status = status;
        shift
    }

    fn ids(shifts: &[Shift]) -> Vec<&str> {
        shifts.iter().map(|shift| shift.id.as_str()).collect()
    }

    #[test]
    fn test_lone_primary_is_flagged() {
        let shifts: Vec<Shift> = vec![make_shift(
            "s1",
            datetime!(2025-05-06 8:00 UTC),
            datetime!(2025-05-06 20:00 UTC),
            ShiftType::Primary,
            ShiftStatus::Scheduled,
        )];

        let flagged: Vec<Shift> =
            find_shifts_without_backup(&shifts, datetime!(2025-05-06 0:00 UTC), 1);
        assert_eq!(ids(&flagged), vec!["s1"]);
    }

    #[test]
    fn test_backup_on_same_day_clears_the_flag() {
        let shifts: Vec<Shift> = vec![
            make_shift(
                "s1",
                datetime!(2025-05-06 8:00 UTC),
                datetime!(2025-05-06 20:00 UTC),
                ShiftType::Primary,
                ShiftStatus::Scheduled,
            ),
            make_shift(
                "s2",
                datetime!(2025-05-06 8:00 UTC),
                datetime!(2025-05-06 20:00 UTC),
                ShiftType::Backup,
                ShiftStatus::Scheduled,
            ),
        ];

        let flagged: Vec<Shift> =
            find_shifts_without_backup(&shifts, datetime!(2025-05-06 0:00 UTC), 1);
        assert!(flagged.is_empty());
    }

    #[test]
    fn test_backup_on_adjacent_day_does_not_help() {
        let shifts: Vec<Shift> = vec![
            make_shift(
                "s1",
                datetime!(2025-05-06 8:00 UTC),
                datetime!(2025-05-06 20:00 UTC),
                ShiftType::Primary,
                ShiftStatus::Scheduled,
            ),
            make_shift(
                "s2",
                datetime!(2025-05-07 8:00 UTC),
                datetime!(2025-05-07 20:00 UTC),
                ShiftType::Backup,
                ShiftStatus::Scheduled,
            ),
        ];

        let flagged: Vec<Shift> =
            find_shifts_without_backup(&shifts, datetime!(2025-05-06 0:00 UTC), 2);
        assert_eq!(ids(&flagged), vec!["s1"]);
    }

    #[test]
    fn test_cancelled_backup_provides_no_cover() {
        let shifts: Vec<Shift> = vec![
            make_shift(
                "s1",
                datetime!(2025-05-06 8:00 UTC),
                datetime!(2025-05-06 20:00 UTC),
                ShiftType::Primary,
                ShiftStatus::Scheduled,
            ),
            make_shift(
                "s2",
                datetime!(2025-05-06 8:00 UTC),
                datetime!(2025-05-06 20:00 UTC),
                ShiftType::Backup,
                ShiftStatus::Cancelled,
            ),
        ];

        let flagged: Vec<Shift> =
            find_shifts_without_backup(&shifts, datetime!(2025-05-06 0:00 UTC), 1);
        assert_eq!(ids(&flagged), vec!["s1"]);
    }

    #[test]
    fn test_cancelled_primary_is_never_flagged() {
        let shifts: Vec<Shift> = vec![make_shift(
            "s1",
            datetime!(2025-05-06 8:00 UTC),
            datetime!(2025-05-06 20:00 UTC),
            ShiftType::Primary,
            ShiftStatus::Cancelled,
        )];

        let flagged: Vec<Shift> =
            find_shifts_without_backup(&shifts, datetime!(2025-05-06 0:00 UTC), 1);
        assert!(flagged.is_empty());
    }

    #[test]
    fn test_other_shift_types_neither_flag_nor_cover() {
        let shifts: Vec<Shift> = vec![
            make_shift(
                "s1",
                datetime!(2025-05-06 8:00 UTC),
                datetime!(2025-05-06 20:00 UTC),
                ShiftType::Night,
                ShiftStatus::Scheduled,
            ),
            make_shift(
                "s2",
                datetime!(2025-05-06 8:00 UTC),
                datetime!(2025-05-06 20:00 UTC),
                ShiftType::Weekend,
                ShiftStatus::Scheduled,
            ),
        ];

        let flagged: Vec<Shift> =
            find_shifts_without_backup(&shifts, datetime!(2025-05-06 0:00 UTC), 1);
        assert!(flagged.is_empty());
    }

    #[test]
    fn test_multi_day_primary_flagged_once_per_day() {
        let shifts: Vec<Shift> = vec![make_shift(
            "s1",
            datetime!(2025-05-06 8:00 UTC),
            datetime!(2025-05-08 20:00 UTC),
            ShiftType::Primary,
            ShiftStatus::Scheduled,
        )];

        let flagged: Vec<Shift> =
            find_shifts_without_backup(&shifts, datetime!(2025-05-06 0:00 UTC), 3);
        assert_eq!(ids(&flagged), vec!["s1", "s1", "s1"]);
    }

    #[test]
    fn test_multi_day_primary_with_one_backed_day() {
        let shifts: Vec<Shift> = vec![
            make_shift(
                "s1",
                datetime!(2025-05-06 8:00 UTC),
                datetime!(2025-05-08 20:00 UTC),
                ShiftType::Primary,
                ShiftStatus::Scheduled,
            ),
            make_shift(
                "s2",
                datetime!(2025-05-07 8:00 UTC),
                datetime!(2025-05-07 20:00 UTC),
                ShiftType::Backup,
                ShiftStatus::Scheduled,
            ),
        ];

        // May 7 is backed; May 6 and May 8 are not.
        let flagged: Vec<Shift> =
            find_shifts_without_backup(&shifts, datetime!(2025-05-06 0:00 UTC), 3);
        assert_eq!(ids(&flagged), vec!["s1", "s1"]);
    }

    #[test]
    fn test_days_outside_window_are_not_bucketed() {
        let shifts: Vec<Shift> = vec![make_shift(
            "s1",
            datetime!(2025-05-04 8:00 UTC),
            datetime!(2025-05-07 20:00 UTC),
            ShiftType::Primary,
            ShiftStatus::Scheduled,
        )];

        // Only May 6 and May 7 fall in the window.
        let flagged: Vec<Shift> =
            find_shifts_without_backup(&shifts, datetime!(2025-05-06 0:00 UTC), 2);
        assert_eq!(ids(&flagged), vec!["s1", "s1"]);
    }

    #[test]
    fn test_shift_entirely_outside_window_is_ignored() {
        let shifts: Vec<Shift> = vec![make_shift(
            "s1",
            datetime!(2025-05-01 8:00 UTC),
            datetime!(2025-05-02 20:00 UTC),
            ShiftType::Primary,
            ShiftStatus::Scheduled,
        )];

        let flagged: Vec<Shift> =
            find_shifts_without_backup(&shifts, datetime!(2025-05-06 0:00 UTC), 3);
        assert!(flagged.is_empty());
    }

    #[test]
    fn test_malformed_shift_is_ignored() {
        let shifts: Vec<Shift> = vec![make_shift(
            "s1",
            datetime!(2025-05-08 8:00 UTC),
            datetime!(2025-05-06 8:00 UTC),
            ShiftType::Primary,
            ShiftStatus::Scheduled,
        )];

        let flagged: Vec<Shift> =
            find_shifts_without_backup(&shifts, datetime!(2025-05-06 0:00 UTC), 3);
        assert!(flagged.is_empty());
    }

    #[test]
    fn test_flagged_days_come_out_in_date_order() {
        let shifts: Vec<Shift> = vec![
            make_shift(
                "late",
                datetime!(2025-05-08 8:00 UTC),
                datetime!(2025-05-08 20:00 UTC),
                ShiftType::Primary,
                ShiftStatus::Scheduled,
            ),
            make_shift(
                "early",
                datetime!(2025-05-06 8:00 UTC),
                datetime!(2025-05-06 20:00 UTC),
                ShiftType::Primary,
                ShiftStatus::Scheduled,
            ),
        ];

        let flagged: Vec<Shift> =
            find_shifts_without_backup(&shifts, datetime!(2025-05-06 0:00 UTC), 3);
        assert_eq!(ids(&flagged), vec!["early", "late"]);
    }

    #[test]
    fn test_negative_days_returns_nothing() {
        let shifts: Vec<Shift> = vec![make_shift(
            "s1",
            datetime!(2025-05-06 8:00 UTC),
            datetime!(2025-05-06 20:00 UTC),
            ShiftType::Primary,
            ShiftStatus::Scheduled,
        )];

        let flagged: Vec<Shift> =
            find_shifts_without_backup(&shifts, datetime!(2025-05-06 0:00 UTC), -1);
        assert!(flagged.is_empty());
    }

    #[test]
    fn test_identical_inputs_yield_identical_results() {
        let shifts: Vec<Shift> = vec![
            make_shift(
                "s1",
                datetime!(2025-05-06 8:00 UTC),
                datetime!(2025-05-07 20:00 UTC),
                ShiftType::Primary,
                ShiftStatus::Scheduled,
            ),
            make_shift(
                "s2",
                datetime!(2025-05-07 8:00 UTC),
                datetime!(2025-05-07 20:00 UTC),
                ShiftType::Backup,
                ShiftStatus::Scheduled,
            ),
        ];

        let first: Vec<Shift> =
            find_shifts_without_backup(&shifts, datetime!(2025-05-06 0:00 UTC), 3);
        let second: Vec<Shift> =
            find_shifts_without_backup(&shifts, datetime!(2025-05-06 0:00 UTC), 3);
        assert_eq!(first, second);
    }
}
