// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory schedule repository.
//!
//! Writes validate against the domain rules first and mutate only on
//! success; reads hand out freshly allocated snapshots with no aliasing
//! back into store state.

use crate::error::StoreError;
use ctrl_shift_domain::{
    Shift, ShiftStatus, ShiftType, Team, TeamMember, TeamRole, validate_member_fields,
    validate_shift_fields, validate_team_fields,
};
use time::OffsetDateTime;
use tracing::{debug, info};

/// Internal team row: roster by member id only, resolved at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TeamRecord {
    id: String,
    name: String,
    description: Option<String>,
    member_ids: Vec<String>,
}

/// Parameters for creating a team.
#[derive(Debug, Clone, Default)]
pub struct NewTeam {
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Initial roster; every id must exist in the member registry.
    pub member_ids: Vec<String>,
}

/// Partial update of a team's fields. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct TeamUpdate {
    /// Replacement display name.
    pub name: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
}

/// Parameters for registering a member.
#[derive(Debug, Clone)]
pub struct NewMember {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// The member's role.
    pub role: TeamRole,
    /// Job title.
    pub title: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Slack handle.
    pub slack_id: Option<String>,
    /// Paging-service handle.
    pub pager_duty_id: Option<String>,
    /// IANA time zone name.
    pub time_zone: Option<String>,
}

impl NewMember {
    /// Creates a `NewMember` with no optional contact fields.
    #[must_use]
    pub const fn new(name: String, email: String, role: TeamRole) -> Self {
        Self {
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

/// Partial update of a member's fields. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct MemberUpdate {
    /// Replacement display name.
    pub name: Option<String>,
    /// Replacement contact email.
    pub email: Option<String>,
    /// Replacement role.
    pub role: Option<TeamRole>,
    /// Replacement job title.
    pub title: Option<String>,
    /// Replacement phone number.
    pub phone: Option<String>,
    /// Replacement Slack handle.
    pub slack_id: Option<String>,
    /// Replacement paging-service handle.
    pub pager_duty_id: Option<String>,
    /// Replacement time zone name.
    pub time_zone: Option<String>,
}

/// Parameters for creating a shift. New shifts start `Scheduled`.
#[derive(Debug, Clone)]
pub struct NewShift {
    /// Display title.
    pub title: String,
    /// Start instant.
    pub start: OffsetDateTime,
    /// End instant.
    pub end: OffsetDateTime,
    /// The kind of coverage this shift provides.
    pub shift_type: ShiftType,
    /// Id of the assigned member.
    pub assignee: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Display color.
    pub color: Option<String>,
}

/// Partial update of a shift's fields. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct ShiftUpdate {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement start instant.
    pub start: Option<OffsetDateTime>,
    /// Replacement end instant.
    pub end: Option<OffsetDateTime>,
    /// Replacement shift type.
    pub shift_type: Option<ShiftType>,
    /// Replacement status.
    pub status: Option<ShiftStatus>,
    /// Replacement assignee.
    pub assignee: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement color.
    pub color: Option<String>,
}

/// Shift query filter. All criteria are optional and combined with AND.
///
/// Range criteria select by the shift's start instant, matching the
/// reporting views; day-span semantics belong to the analyzers.
#[derive(Debug, Clone, Default)]
pub struct ShiftFilter {
    /// Keep shifts starting at or after this instant.
    pub start: Option<OffsetDateTime>,
    /// Keep shifts starting at or before this instant.
    pub end: Option<OffsetDateTime>,
    /// Keep shifts assigned to a member of this team.
    pub team_id: Option<String>,
    /// Keep shifts assigned to this member.
    pub assignee_id: Option<String>,
}

/// In-memory schedule repository.
///
/// The member registry is the single source of truth for member data;
/// team records store rosters of member ids and [`Team`] snapshots are
/// resolved on every read.
#[derive(Debug, Default)]
pub struct MemoryStore {
    teams: Vec<TeamRecord>,
    members: Vec<TeamMember>,
    shifts: Vec<Shift>,
    next_team_id: u64,
    next_member_id: u64,
    next_shift_id: u64,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            teams: Vec::new(),
            members: Vec::new(),
            shifts: Vec::new(),
            next_team_id: 0,
            next_member_id: 0,
            next_shift_id: 0,
        }
    }

    /// Resolves a team record into a snapshot with its roster materialized
    /// from the registry. Roster order is preserved.
    fn resolve(&self, record: &TeamRecord) -> Team {
        let members: Vec<TeamMember> = record
            .member_ids
            .iter()
            .filter_map(|id| self.members.iter().find(|member| &member.id == id).cloned())
            .collect();
        Team {
            id: record.id.clone(),
            name: record.name.clone(),
            description: record.description.clone(),
            members,
        }
    }

    fn team_record(&self, team_id: &str) -> Result<&TeamRecord, StoreError> {
        self.teams
            .iter()
            .find(|record| record.id == team_id)
            .ok_or_else(|| StoreError::TeamNotFound(team_id.to_string()))
    }

    fn team_index(&self, team_id: &str) -> Result<usize, StoreError> {
        self.teams
            .iter()
            .position(|record| record.id == team_id)
            .ok_or_else(|| StoreError::TeamNotFound(team_id.to_string()))
    }

    fn member_index(&self, member_id: &str) -> Result<usize, StoreError> {
        self.members
            .iter()
            .position(|member| member.id == member_id)
            .ok_or_else(|| StoreError::MemberNotFound(member_id.to_string()))
    }

    fn shift_index(&self, shift_id: &str) -> Result<usize, StoreError> {
        self.shifts
            .iter()
            .position(|shift| shift.id == shift_id)
            .ok_or_else(|| StoreError::ShiftNotFound(shift_id.to_string()))
    }

    // --- Teams ---

    /// Creates a team.
    ///
    /// # Errors
    ///
    /// Returns an error if a roster id is not in the member registry, or if
    /// the resulting team fails domain validation (empty name, duplicate
    /// roster entry).
    pub fn create_team(&mut self, new_team: NewTeam) -> Result<Team, StoreError> {
        for member_id in &new_team.member_ids {
            self.member_index(member_id)?;
        }

        let record: TeamRecord = TeamRecord {
            id: format!("team-{}", self.next_team_id + 1),
            name: new_team.name,
            description: new_team.description,
            member_ids: new_team.member_ids,
        };
        let team: Team = self.resolve(&record);
        validate_team_fields(&team)?;

        info!(team_id = %record.id, members = record.member_ids.len(), "created team");
        self.next_team_id += 1;
        self.teams.push(record);
        Ok(team)
    }

    /// Returns snapshots of all teams, in creation order.
    #[must_use]
    pub fn teams(&self) -> Vec<Team> {
        self.teams.iter().map(|record| self.resolve(record)).collect()
    }

    /// Returns a snapshot of one team.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TeamNotFound`] if the team does not exist.
    pub fn team(&self, team_id: &str) -> Result<Team, StoreError> {
        self.team_record(team_id).map(|record| self.resolve(record))
    }

    /// Applies a partial update to a team.
    ///
    /// # Errors
    ///
    /// Returns an error if the team does not exist or the updated team
    /// fails domain validation.
    pub fn update_team(&mut self, team_id: &str, update: TeamUpdate) -> Result<Team, StoreError> {
        let index: usize = self.team_index(team_id)?;

        let mut record: TeamRecord = self.teams[index].clone();
        if let Some(name) = update.name {
            record.name = name;
        }
        if let Some(description) = update.description {
            record.description = Some(description);
        }

        let team: Team = self.resolve(&record);
        validate_team_fields(&team)?;

        debug!(team_id = %record.id, "updated team");
        self.teams[index] = record;
        Ok(team)
    }

    /// Deletes a team. Members and shifts are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TeamNotFound`] if the team does not exist.
    pub fn delete_team(&mut self, team_id: &str) -> Result<(), StoreError> {
        let index: usize = self.team_index(team_id)?;
        self.teams.remove(index);
        info!(team_id, "deleted team");
        Ok(())
    }

    /// Adds a member to a team's roster. Adding a member already on the
    /// roster is a no-op, as in the original API.
    ///
    /// # Errors
    ///
    /// Returns an error if the team or the member does not exist.
    pub fn add_member_to_team(&mut self, team_id: &str, member_id: &str) -> Result<(), StoreError> {
        self.member_index(member_id)?;
        let index: usize = self.team_index(team_id)?;

        let record: &mut TeamRecord = &mut self.teams[index];
        if record.member_ids.iter().any(|id| id == member_id) {
            return Ok(());
        }
        record.member_ids.push(member_id.to_string());
        debug!(team_id, member_id, "added member to roster");
        Ok(())
    }

    /// Removes a member from a team's roster.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TeamNotFound`] if the team does not exist, or
    /// [`StoreError::MemberNotFound`] if the member is not on the roster.
    pub fn remove_member_from_team(
        &mut self,
        team_id: &str,
        member_id: &str,
    ) -> Result<(), StoreError> {
        let index: usize = self.team_index(team_id)?;
        let record: &mut TeamRecord = &mut self.teams[index];

        let position: usize = record
            .member_ids
            .iter()
            .position(|id| id == member_id)
            .ok_or_else(|| StoreError::MemberNotFound(member_id.to_string()))?;
        record.member_ids.remove(position);
        debug!(team_id, member_id, "removed member from roster");
        Ok(())
    }

    // --- Members ---

    /// Registers a member.
    ///
    /// # Errors
    ///
    /// Returns an error if the member fails domain validation.
    pub fn create_member(&mut self, new_member: NewMember) -> Result<TeamMember, StoreError> {
        let mut member: TeamMember = TeamMember::new(
            format!("member-{}", self.next_member_id + 1),
            new_member.name,
            new_member.email,
            new_member.role,
        );
        member.title = new_member.title;
        member.phone = new_member.phone;
        member.slack_id = new_member.slack_id;
        member.pager_duty_id = new_member.pager_duty_id;
        member.time_zone = new_member.time_zone;
        validate_member_fields(&member)?;

        info!(member_id = %member.id, "registered member");
        self.next_member_id += 1;
        self.members.push(member.clone());
        Ok(member)
    }

    /// Returns all registered members, or one team's roster when `team_id`
    /// is given.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TeamNotFound`] if a named team does not exist.
    pub fn members(&self, team_id: Option<&str>) -> Result<Vec<TeamMember>, StoreError> {
        match team_id {
            None => Ok(self.members.clone()),
            Some(id) => {
                let record: &TeamRecord = self.team_record(id)?;
                Ok(self.resolve(record).members)
            }
        }
    }

    /// Returns one member from the registry.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MemberNotFound`] if the member does not exist.
    pub fn member(&self, member_id: &str) -> Result<TeamMember, StoreError> {
        self.member_index(member_id)
            .map(|index| self.members[index].clone())
    }

    /// Applies a partial update to a member. Because rosters reference the
    /// registry by id, the update is visible through every team.
    ///
    /// # Errors
    ///
    /// Returns an error if the member does not exist or the updated member
    /// fails domain validation.
    pub fn update_member(
        &mut self,
        member_id: &str,
        update: MemberUpdate,
    ) -> Result<TeamMember, StoreError> {
        let index: usize = self.member_index(member_id)?;

        let mut member: TeamMember = self.members[index].clone();
        if let Some(name) = update.name {
            member.name = name;
        }
        if let Some(email) = update.email {
            member.email = email;
        }
        if let Some(role) = update.role {
            member.role = role;
        }
        if let Some(title) = update.title {
            member.title = Some(title);
        }
        if let Some(phone) = update.phone {
            member.phone = Some(phone);
        }
        if let Some(slack_id) = update.slack_id {
            member.slack_id = Some(slack_id);
        }
        if let Some(pager_duty_id) = update.pager_duty_id {
            member.pager_duty_id = Some(pager_duty_id);
        }
        if let Some(time_zone) = update.time_zone {
            member.time_zone = Some(time_zone);
        }
        validate_member_fields(&member)?;

        debug!(member_id, "updated member");
        self.members[index] = member.clone();
        Ok(member)
    }

    /// Deletes a member from the registry and prunes it from every roster.
    ///
    /// Shifts assigned to the member are left in place; they simply stop
    /// matching any roster, which the analyzers report as coverage gaps.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MemberNotFound`] if the member does not exist.
    pub fn delete_member(&mut self, member_id: &str) -> Result<(), StoreError> {
        let index: usize = self.member_index(member_id)?;
        self.members.remove(index);
        for record in &mut self.teams {
            record.member_ids.retain(|id| id != member_id);
        }
        info!(member_id, "deleted member");
        Ok(())
    }

    // --- Shifts ---

    /// Creates a shift. New shifts start in `Scheduled` status.
    ///
    /// The assignee id is not checked against the registry: shifts may
    /// outlive their member, and dangling assignees are surfaced by the
    /// coverage analysis rather than rejected here.
    ///
    /// # Errors
    ///
    /// Returns an error if the shift fails domain validation (empty title
    /// or assignee, start after end).
    pub fn create_shift(&mut self, new_shift: NewShift) -> Result<Shift, StoreError> {
        let mut shift: Shift = Shift::new(
            format!("shift-{}", self.next_shift_id + 1),
            new_shift.title,
            new_shift.start,
            new_shift.end,
            new_shift.shift_type,
            new_shift.assignee,
        );
        shift.description = new_shift.description;
        shift.color = new_shift.color;
        validate_shift_fields(&shift)?;

        info!(shift_id = %shift.id, "created shift");
        self.next_shift_id += 1;
        self.shifts.push(shift.clone());
        Ok(shift)
    }

    /// Returns all shifts, in creation order.
    #[must_use]
    pub fn all_shifts(&self) -> Vec<Shift> {
        self.shifts.clone()
    }

    /// Returns the shifts matching a filter, in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TeamNotFound`] if the filter names a team that
    /// does not exist.
    pub fn shifts(&self, filter: &ShiftFilter) -> Result<Vec<Shift>, StoreError> {
        let roster: Option<&TeamRecord> = match &filter.team_id {
            Some(id) => Some(self.team_record(id)?),
            None => None,
        };

        Ok(self
            .shifts
            .iter()
            .filter(|shift| {
                if filter.start.is_some_and(|start| shift.start < start) {
                    return false;
                }
                if filter.end.is_some_and(|end| shift.start > end) {
                    return false;
                }
                if let Some(assignee) = &filter.assignee_id {
                    if &shift.assignee != assignee {
                        return false;
                    }
                }
                if let Some(record) = roster {
                    if !record.member_ids.iter().any(|id| id == &shift.assignee) {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect())
    }

    /// Returns one shift.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShiftNotFound`] if the shift does not exist.
    pub fn shift(&self, shift_id: &str) -> Result<Shift, StoreError> {
        self.shift_index(shift_id)
            .map(|index| self.shifts[index].clone())
    }

    /// Applies a partial update to a shift.
    ///
    /// # Errors
    ///
    /// Returns an error if the shift does not exist or the updated shift
    /// fails domain validation.
    pub fn update_shift(
        &mut self,
        shift_id: &str,
        update: ShiftUpdate,
    ) -> Result<Shift, StoreError> {
        let index: usize = self.shift_index(shift_id)?;

        let mut shift: Shift = self.shifts[index].clone();
        if let Some(title) = update.title {
            shift.title = title;
        }
        if let Some(start) = update.start {
            shift.start = start;
        }
        if let Some(end) = update.end {
            shift.end = end;
        }
        if let Some(shift_type) = update.shift_type {
            shift.shift_type = shift_type;
        }
        if let Some(status) = update.status {
            shift.status = status;
        }
        if let Some(assignee) = update.assignee {
            shift.assignee = assignee;
        }
        if let Some(description) = update.description {
            shift.description = Some(description);
        }
        if let Some(color) = update.color {
            shift.color = Some(color);
        }
        validate_shift_fields(&shift)?;

        debug!(shift_id, "updated shift");
        self.shifts[index] = shift.clone();
        Ok(shift)
    }

    /// Deletes a shift.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ShiftNotFound`] if the shift does not exist.
    pub fn delete_shift(&mut self, shift_id: &str) -> Result<(), StoreError> {
        let index: usize = self.shift_index(shift_id)?;
        self.shifts.remove(index);
        info!(shift_id, "deleted shift");
        Ok(())
    }
}
