// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Shift, Team, TeamMember};
use std::collections::HashSet;

/// Validates that a member's required fields are present.
///
/// # Errors
///
/// Returns an error if:
/// - The member's id is empty
/// - The member's name is empty
/// - The member's email is empty
pub fn validate_member_fields(member: &TeamMember) -> Result<(), DomainError> {
    // Rule: id must not be empty
    if member.id.is_empty() {
        return Err(DomainError::InvalidMemberId(String::from(
            "Member id cannot be empty",
        )));
    }

    // Rule: name must not be empty
    if member.name.is_empty() {
        return Err(DomainError::InvalidMemberName(String::from(
            "Member name cannot be empty",
        )));
    }

    // Rule: email must not be empty
    if member.email.is_empty() {
        return Err(DomainError::InvalidMemberEmail(String::from(
            "Member email cannot be empty",
        )));
    }

    Ok(())
}

/// Validates a team's fields and its roster invariant.
///
/// # Errors
///
/// Returns an error if:
/// - The team's id or name is empty
/// - Any member fails [`validate_member_fields`]
/// - The roster contains the same member id twice
pub fn validate_team_fields(team: &Team) -> Result<(), DomainError> {
    // Rule: id must not be empty
    if team.id.is_empty() {
        return Err(DomainError::InvalidTeamId(String::from(
            "Team id cannot be empty",
        )));
    }

    // Rule: name must not be empty
    if team.name.is_empty() {
        return Err(DomainError::InvalidTeamName(String::from(
            "Team name cannot be empty",
        )));
    }

    // Rule: a roster contains no duplicate member ids
    let mut seen: HashSet<&str> = HashSet::new();
    for member in &team.members {
        validate_member_fields(member)?;
        if !seen.insert(member.id.as_str()) {
            return Err(DomainError::DuplicateTeamMember {
                team_id: team.id.clone(),
                member_id: member.id.clone(),
            });
        }
    }

    Ok(())
}

/// Validates a shift's required fields and time range.
///
/// The analyzers deliberately tolerate malformed shifts (they cover no
/// days); this check exists so stores can reject them at write time.
///
/// # Errors
///
/// Returns an error if:
/// - The shift's id, title, or assignee is empty
/// - The shift's start is after its end
pub fn validate_shift_fields(shift: &Shift) -> Result<(), DomainError> {
    // Rule: id must not be empty
    if shift.id.is_empty() {
        return Err(DomainError::InvalidShiftId(String::from(
            "Shift id cannot be empty",
        )));
    }

    // Rule: title must not be empty
    if shift.title.is_empty() {
        return Err(DomainError::InvalidShiftTitle(String::from(
            "Shift title cannot be empty",
        )));
    }

    // Rule: assignee must not be empty
    if shift.assignee.is_empty() {
        return Err(DomainError::InvalidShiftAssignee(String::from(
            "Shift assignee cannot be empty",
        )));
    }

    // Rule: start must not be after end
    if shift.start > shift.end {
        return Err(DomainError::InvalidShiftRange {
            shift_id: shift.id.clone(),
            start: shift.start,
            end: shift.end,
        });
    }

    Ok(())
}
