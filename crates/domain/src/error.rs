// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Team id is empty or invalid.
    InvalidTeamId(String),
    /// Team name is empty or invalid.
    InvalidTeamName(String),
    /// Member id is empty or invalid.
    InvalidMemberId(String),
    /// Member name is empty or invalid.
    InvalidMemberName(String),
    /// Member email is empty or invalid.
    InvalidMemberEmail(String),
    /// A member appears more than once on a team's roster.
    DuplicateTeamMember {
        /// The team holding the duplicate.
        team_id: String,
        /// The duplicated member id.
        member_id: String,
    },
    /// Shift id is empty or invalid.
    InvalidShiftId(String),
    /// Shift title is empty or invalid.
    InvalidShiftTitle(String),
    /// Shift assignee is empty or invalid.
    InvalidShiftAssignee(String),
    /// Shift start is after shift end.
    InvalidShiftRange {
        /// The shift id.
        shift_id: String,
        /// The shift start instant.
        start: OffsetDateTime,
        /// The shift end instant.
        end: OffsetDateTime,
    },
    /// Team role string could not be parsed.
    InvalidTeamRole(String),
    /// Shift type string could not be parsed.
    InvalidShiftType(String),
    /// Shift status string could not be parsed.
    InvalidShiftStatus(String),
    /// Report period string could not be parsed.
    InvalidReportPeriod(String),
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTeamId(msg) => write!(f, "Invalid team id: {msg}"),
            Self::InvalidTeamName(msg) => write!(f, "Invalid team name: {msg}"),
            Self::InvalidMemberId(msg) => write!(f, "Invalid member id: {msg}"),
            Self::InvalidMemberName(msg) => write!(f, "Invalid member name: {msg}"),
            Self::InvalidMemberEmail(msg) => write!(f, "Invalid member email: {msg}"),
            Self::DuplicateTeamMember { team_id, member_id } => {
                write!(
                    f,
                    "Member '{member_id}' appears more than once on team '{team_id}'"
                )
            }
            Self::InvalidShiftId(msg) => write!(f, "Invalid shift id: {msg}"),
            Self::InvalidShiftTitle(msg) => write!(f, "Invalid shift title: {msg}"),
            Self::InvalidShiftAssignee(msg) => write!(f, "Invalid shift assignee: {msg}"),
            Self::InvalidShiftRange {
                shift_id,
                start,
                end,
            } => {
                write!(f, "Shift '{shift_id}' starts at {start} after its end {end}")
            }
            Self::InvalidTeamRole(value) => write!(f, "Invalid team role: '{value}'"),
            Self::InvalidShiftType(value) => write!(f, "Invalid shift type: '{value}'"),
            Self::InvalidShiftStatus(value) => write!(f, "Invalid shift status: '{value}'"),
            Self::InvalidReportPeriod(value) => write!(f, "Invalid report period: '{value}'"),
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
