// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Demo dataset for local development.
//!
//! Seeds three teams, eight members, and two weeks of shifts anchored at a
//! fixed start so screenshots and tests stay reproducible. The rotation is
//! deliberately imperfect: the frontend team skips two days, the backend
//! team skips three, and the infrastructure team staffs no primaries in the
//! first week, so the coverage analysis always has gaps to show.

use crate::error::StoreError;
use crate::memory::{MemoryStore, NewMember, NewShift, NewTeam};
use ctrl_shift_domain::{ShiftType, TeamRole};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

/// The fixed anchor instant of the demo schedule.
#[must_use]
pub const fn demo_start() -> OffsetDateTime {
    datetime!(2025-05-06 0:00 UTC)
}

struct SeedMember {
    name: &'static str,
    email: &'static str,
    role: TeamRole,
    title: &'static str,
    time_zone: &'static str,
}

const SEED_MEMBERS: [SeedMember; 8] = [
    SeedMember {
        name: "Alice Johnson",
        email: "alice.johnson@example.com",
        role: TeamRole::Developer,
        title: "Senior Frontend Engineer",
        time_zone: "America/New_York",
    },
    SeedMember {
        name: "Bob Martinez",
        email: "bob.martinez@example.com",
        role: TeamRole::Developer,
        title: "Frontend Engineer",
        time_zone: "America/Chicago",
    },
    SeedMember {
        name: "Carol Nguyen",
        email: "carol.nguyen@example.com",
        role: TeamRole::Designer,
        title: "Product Designer",
        time_zone: "America/Los_Angeles",
    },
    SeedMember {
        name: "David Okafor",
        email: "david.okafor@example.com",
        role: TeamRole::Developer,
        title: "Backend Engineer",
        time_zone: "Europe/London",
    },
    SeedMember {
        name: "Erin Walsh",
        email: "erin.walsh@example.com",
        role: TeamRole::Qa,
        title: "QA Engineer",
        time_zone: "Europe/Dublin",
    },
    SeedMember {
        name: "Felix Bauer",
        email: "felix.bauer@example.com",
        role: TeamRole::Devops,
        title: "Site Reliability Engineer",
        time_zone: "Europe/Berlin",
    },
    SeedMember {
        name: "Grace Liu",
        email: "grace.liu@example.com",
        role: TeamRole::Devops,
        title: "Platform Engineer",
        time_zone: "Asia/Shanghai",
    },
    SeedMember {
        name: "Henry Chen",
        email: "henry.chen@example.com",
        role: TeamRole::Manager,
        title: "Infrastructure Lead",
        time_zone: "Asia/Taipei",
    },
];

fn shift_at(
    title: &str,
    day: i64,
    start_hour: i64,
    end_day: i64,
    end_hour: i64,
    shift_type: ShiftType,
    assignee: &str,
) -> NewShift {
    NewShift {
        title: title.to_string(),
        start: demo_start() + Duration::days(day) + Duration::hours(start_hour),
        end: demo_start() + Duration::days(end_day) + Duration::hours(end_hour),
        shift_type,
        assignee: assignee.to_string(),
        description: None,
        color: None,
    }
}

/// Builds the demo store.
///
/// # Errors
///
/// Returns an error if any seed record fails domain validation; with the
/// fixed dataset this indicates a bug in the seed itself.
pub fn demo_store() -> Result<MemoryStore, StoreError> {
    let mut store: MemoryStore = MemoryStore::new();

    for seed in SEED_MEMBERS {
        let mut member: NewMember = NewMember::new(
            seed.name.to_string(),
            seed.email.to_string(),
            seed.role,
        );
        member.title = Some(seed.title.to_string());
        member.time_zone = Some(seed.time_zone.to_string());
        store.create_member(member)?;
    }

    store.create_team(NewTeam {
        name: String::from("Frontend"),
        description: Some(String::from("Web and mobile client applications")),
        member_ids: vec![
            String::from("member-1"),
            String::from("member-2"),
            String::from("member-3"),
        ],
    })?;
    store.create_team(NewTeam {
        name: String::from("Backend"),
        description: Some(String::from("APIs and service infrastructure")),
        member_ids: vec![String::from("member-4"), String::from("member-5")],
    })?;
    store.create_team(NewTeam {
        name: String::from("Infrastructure"),
        description: Some(String::from("Platform, networking, and deployments")),
        member_ids: vec![
            String::from("member-6"),
            String::from("member-7"),
            String::from("member-8"),
        ],
    })?;

    // Frontend primaries, 08:00-20:00, rotating through the roster. Days 8
    // and 9 are deliberately uncovered.
    let frontend_roster: [&str; 3] = ["member-1", "member-2", "member-3"];
    for day in 0..14_i64 {
        if day == 8 || day == 9 {
            continue;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let assignee: &str = frontend_roster[(day % 3) as usize];
        store.create_shift(shift_at(
            "Frontend On-Call",
            day,
            8,
            day,
            20,
            ShiftType::Primary,
            assignee,
        ))?;
    }

    // Backend primaries with three uncovered days.
    let backend_roster: [&str; 2] = ["member-4", "member-5"];
    for day in 0..14_i64 {
        if day == 2 || day == 4 || day == 10 {
            continue;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let assignee: &str = backend_roster[(day % 2) as usize];
        store.create_shift(shift_at(
            "Backend On-Call",
            day,
            8,
            day,
            20,
            ShiftType::Primary,
            assignee,
        ))?;
    }

    // Infrastructure only staffs the second week.
    let infra_roster: [&str; 3] = ["member-6", "member-7", "member-8"];
    for day in 7..14_i64 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let assignee: &str = infra_roster[(day % 3) as usize];
        store.create_shift(shift_at(
            "Infrastructure On-Call",
            day,
            8,
            day,
            20,
            ShiftType::Primary,
            assignee,
        ))?;
    }

    // Two lone backup shifts, so most primary days show up in the
    // backup-coverage analysis.
    store.create_shift(shift_at(
        "Frontend Backup",
        1,
        8,
        1,
        20,
        ShiftType::Backup,
        "member-3",
    ))?;
    store.create_shift(shift_at(
        "Backend Backup",
        3,
        8,
        3,
        20,
        ShiftType::Backup,
        "member-5",
    ))?;

    // A multi-day weekend rotation; it gives the infrastructure team its
    // only first-week coverage.
    store.create_shift(shift_at(
        "Weekend Coverage",
        4,
        8,
        5,
        20,
        ShiftType::Weekend,
        "member-7",
    ))?;

    Ok(store)
}
