// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// The role a member fills on their team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    /// Software developer.
    #[default]
    Developer,
    /// Quality assurance engineer.
    Qa,
    /// Infrastructure and operations engineer.
    Devops,
    /// Engineering manager.
    Manager,
    /// Product or UI designer.
    Designer,
    /// Any role not covered above.
    Other,
}

impl TeamRole {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Developer => "developer",
            Self::Qa => "qa",
            Self::Devops => "devops",
            Self::Manager => "manager",
            Self::Designer => "designer",
            Self::Other => "other",
        }
    }
}

impl FromStr for TeamRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "developer" => Ok(Self::Developer),
            "qa" => Ok(Self::Qa),
            "devops" => Ok(Self::Devops),
            "manager" => Ok(Self::Manager),
            "designer" => Ok(Self::Designer),
            "other" => Ok(Self::Other),
            _ => Err(DomainError::InvalidTeamRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for TeamRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A person who can be placed on team rosters and assigned shifts.
///
/// Members are identified by `id`; shifts reference members by id only and
/// never own member data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Unique member identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// The member's role.
    pub role: TeamRole,
    /// Job title, if recorded.
    pub title: Option<String>,
    /// Contact phone number, if recorded.
    pub phone: Option<String>,
    /// Slack handle, if recorded.
    pub slack_id: Option<String>,
    /// Paging-service handle, if recorded.
    pub pager_duty_id: Option<String>,
    /// IANA time zone name, if recorded.
    pub time_zone: Option<String>,
}

impl TeamMember {
    /// Creates a new `TeamMember` with no optional contact fields.
    #[must_use]
    pub const fn new(id: String, name: String, email: String, role: TeamRole) -> Self {
        Self {
            id,
            name,
            email,
            role,
            title: None,
            phone: None,
            slack_id: None,
            pager_duty_id: None,
            time_zone: None,
        }
    }
}

/// A team with an ordered member roster.
///
/// Roster order is insertion order and doubles as display order. A roster
/// never contains two members with the same id (enforced by
/// [`crate::validate_team_fields`], not by construction).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Unique team identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-form description, if recorded.
    pub description: Option<String>,
    /// The team's members, in display order.
    pub members: Vec<TeamMember>,
}

impl Team {
    /// Creates a new `Team` with an empty roster.
    #[must_use]
    pub const fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            description: None,
            members: Vec::new(),
        }
    }

    /// Checks whether a member id is on this team's roster.
    #[must_use]
    pub fn has_member(&self, member_id: &str) -> bool {
        self.members.iter().any(|member| member.id == member_id)
    }
}

/// The kind of coverage a shift provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftType {
    /// First responder for the covered days.
    Primary,
    /// Backup responder behind a primary shift.
    Backup,
    /// Overnight rotation.
    Night,
    /// Weekend rotation.
    Weekend,
    /// Holiday rotation.
    Holiday,
}

impl ShiftType {
    /// Converts this shift type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Backup => "backup",
            Self::Night => "night",
            Self::Weekend => "weekend",
            Self::Holiday => "holiday",
        }
    }
}

impl FromStr for ShiftType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "primary" => Ok(Self::Primary),
            "backup" => Ok(Self::Backup),
            "night" => Ok(Self::Night),
            "weekend" => Ok(Self::Weekend),
            "holiday" => Ok(Self::Holiday),
            _ => Err(DomainError::InvalidShiftType(s.to_string())),
        }
    }
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShiftStatus {
    /// Planned but not yet started.
    #[default]
    Scheduled,
    /// Currently in progress.
    Active,
    /// Finished.
    Completed,
    /// Called off.
    Cancelled,
}

impl ShiftStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns whether a shift in this status counts toward coverage.
    ///
    /// Cancelled and completed shifts cover nothing.
    #[must_use]
    pub const fn provides_coverage(self) -> bool {
        !matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl FromStr for ShiftStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(Self::Scheduled),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidShiftStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An on-call shift assigned to a single member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique shift identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Start instant.
    pub start: OffsetDateTime,
    /// End instant.
    pub end: OffsetDateTime,
    /// The kind of coverage this shift provides.
    #[serde(rename = "type")]
    pub shift_type: ShiftType,
    /// Lifecycle status.
    pub status: ShiftStatus,
    /// Id of the assigned member. Single owner; no multi-assignment.
    pub assignee: String,
    /// Free-form description, if recorded.
    pub description: Option<String>,
    /// Display color, if recorded.
    pub color: Option<String>,
}

impl Shift {
    /// Creates a new scheduled `Shift` with no description or color.
    #[must_use]
    pub const fn new(
        id: String,
        title: String,
        start: OffsetDateTime,
        end: OffsetDateTime,
        shift_type: ShiftType,
        assignee: String,
    ) -> Self {
        Self {
            id,
            title,
            start,
            end,
            shift_type,
            status: ShiftStatus::Scheduled,
            assignee,
            description: None,
            color: None,
        }
    }

    /// Returns the inclusive range of calendar days this shift touches, as
    /// Julian day numbers.
    ///
    /// Time of day is discarded: a shift touching any part of a day covers
    /// the whole day, including both endpoint days. Returns `None` for a
    /// malformed shift (`start` after `end`), which therefore covers no days.
    #[must_use]
    pub fn day_span(&self) -> Option<(i32, i32)> {
        if self.start > self.end {
            return None;
        }
        Some((
            self.start.date().to_julian_day(),
            self.end.date().to_julian_day(),
        ))
    }
}
