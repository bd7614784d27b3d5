// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar-day window arithmetic.
//!
//! Both analyzers bucket shifts by calendar day. Days are represented as
//! Julian day numbers (`time::Date::to_julian_day`) so that membership and
//! range checks are integer comparisons rather than date-string comparisons.
//!
//! ## Invariants
//!
//! - A window is the run of consecutive calendar days starting at a
//!   normalized start day; time of day never enters window membership.
//! - A non-positive day count produces an empty window, never an error.
//! - The same window convention applies to every analyzer in this crate.

use time::Date;

/// Day counts are capped far past the supported calendar range (roughly
/// 11,000 years) so that Julian-day arithmetic cannot overflow `i32`.
const MAX_WINDOW_DAYS: i64 = 3_999_999;

/// A run of consecutive calendar days, expressed as Julian day numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    /// Julian day number of the first day in the window.
    first_day: i32,
    /// Number of days in the window.
    len: i32,
}

impl DayWindow {
    /// Creates a window of `days_to_check` consecutive days starting at
    /// `start_day`.
    ///
    /// A zero or negative `days_to_check` yields an empty window.
    #[must_use]
    pub const fn new(start_day: Date, days_to_check: i64) -> Self {
        let clamped: i64 = if days_to_check < 0 {
            0
        } else if days_to_check > MAX_WINDOW_DAYS {
            MAX_WINDOW_DAYS
        } else {
            days_to_check
        };
        #[allow(clippy::cast_possible_truncation)]
        let len: i32 = clamped as i32;
        Self {
            first_day: start_day.to_julian_day(),
            len,
        }
    }

    /// Returns the number of days in the window.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns whether the window contains no days.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Checks whether a Julian day number falls inside the window.
    #[must_use]
    pub const fn contains(&self, day: i32) -> bool {
        day >= self.first_day && day < self.first_day + self.len
    }

    /// Intersects an inclusive day span with the window.
    ///
    /// Returns the overlapping inclusive span, or `None` when the span and
    /// the window do not overlap (or the window is empty).
    #[must_use]
    pub const fn clamp(&self, first: i32, last: i32) -> Option<(i32, i32)> {
        if self.len == 0 {
            return None;
        }
        let lo: i32 = if first > self.first_day {
            first
        } else {
            self.first_day
        };
        let window_last: i32 = self.first_day + self.len - 1;
        let hi: i32 = if last < window_last { last } else { window_last };
        if lo <= hi { Some((lo, hi)) } else { None }
    }

    /// Iterates the window's days in ascending order.
    ///
    /// Days outside the calendar range supported by [`time::Date`] are not
    /// produced.
    pub fn days(&self) -> impl Iterator<Item = Date> {
        let first_day: i32 = self.first_day;
        (0..self.len).filter_map(move |offset| Date::from_julian_day(first_day + offset).ok())
    }
}
