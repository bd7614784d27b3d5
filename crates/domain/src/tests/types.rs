// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Shift, ShiftStatus, ShiftType, Team, TeamMember, TeamRole};
use std::str::FromStr;
use time::macros::{date, datetime};

#[test]
fn test_team_role_round_trip() {
    for role in [
        TeamRole::Developer,
        TeamRole::Qa,
        TeamRole::Devops,
        TeamRole::Manager,
        TeamRole::Designer,
        TeamRole::Other,
    ] {
        assert_eq!(TeamRole::from_str(role.as_str()).unwrap(), role);
        assert_eq!(format!("{role}"), role.as_str());
    }
}

#[test]
fn test_team_role_rejects_unknown_value() {
    let err: DomainError = TeamRole::from_str("wizard").unwrap_err();
    assert_eq!(err, DomainError::InvalidTeamRole(String::from("wizard")));
}

#[test]
fn test_shift_type_round_trip() {
    for shift_type in [
        ShiftType::Primary,
        ShiftType::Backup,
        ShiftType::Night,
        ShiftType::Weekend,
        ShiftType::Holiday,
    ] {
        assert_eq!(ShiftType::from_str(shift_type.as_str()).unwrap(), shift_type);
    }
    assert!(ShiftType::from_str("standby").is_err());
}

#[test]
fn test_shift_status_round_trip() {
    for status in [
        ShiftStatus::Scheduled,
        ShiftStatus::Active,
        ShiftStatus::Completed,
        ShiftStatus::Cancelled,
    ] {
        assert_eq!(ShiftStatus::from_str(status.as_str()).unwrap(), status);
    }
    assert!(ShiftStatus::from_str("paused").is_err());
}

#[test]
fn test_enums_serialize_as_lowercase_strings() {
    // The wire format uses the original lowercase strings.
    assert_eq!(
        serde_json::to_string(&TeamRole::Devops).unwrap(),
        "\"devops\""
    );
    assert_eq!(
        serde_json::to_string(&ShiftType::Primary).unwrap(),
        "\"primary\""
    );
    assert_eq!(
        serde_json::to_string(&ShiftStatus::Cancelled).unwrap(),
        "\"cancelled\""
    );

    let status: ShiftStatus = serde_json::from_str("\"scheduled\"").unwrap();
    assert_eq!(status, ShiftStatus::Scheduled);
}

#[test]
fn test_status_coverage_rules() {
    assert!(ShiftStatus::Scheduled.provides_coverage());
    assert!(ShiftStatus::Active.provides_coverage());
    assert!(!ShiftStatus::Completed.provides_coverage());
    assert!(!ShiftStatus::Cancelled.provides_coverage());
}

#[test]
fn test_team_has_member() {
    let mut team: Team = Team::new(String::from("t1"), String::from("Frontend Team"));
    team.members.push(TeamMember::new(
        String::from("m1"),
        String::from("Alice Johnson"),
        String::from("alice@example.com"),
        TeamRole::Developer,
    ));

    assert!(team.has_member("m1"));
    assert!(!team.has_member("m2"));
}

#[test]
fn test_day_span_collapses_times_to_days() {
    let shift: Shift = Shift::new(
        String::from("s1"),
        String::from("On-Call"),
        datetime!(2025-05-06 22:00 UTC),
        datetime!(2025-05-08 0:30 UTC),
        ShiftType::Primary,
        String::from("m1"),
    );

    let (first, last) = shift.day_span().unwrap();
    assert_eq!(first, date!(2025 - 05 - 06).to_julian_day());
    assert_eq!(last, date!(2025 - 05 - 08).to_julian_day());
}

#[test]
fn test_day_span_of_malformed_shift_is_none() {
    let shift: Shift = Shift::new(
        String::from("s1"),
        String::from("On-Call"),
        datetime!(2025-05-08 8:00 UTC),
        datetime!(2025-05-06 8:00 UTC),
        ShiftType::Primary,
        String::from("m1"),
    );

    assert!(shift.day_span().is_none());
}

#[test]
fn test_new_shift_starts_scheduled() {
    let shift: Shift = Shift::new(
        String::from("s1"),
        String::from("On-Call"),
        datetime!(2025-05-06 8:00 UTC),
        datetime!(2025-05-06 20:00 UTC),
        ShiftType::Primary,
        String::from("m1"),
    );

    assert_eq!(shift.status, ShiftStatus::Scheduled);
    assert!(shift.description.is_none());
    assert!(shift.color.is_none());
}
