// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Async facade over the in-memory store.
//!
//! Simulates a network backend for UI development: every call waits an
//! artificial latency before touching the shared store, then delegates to
//! the synchronous repository or the pure domain analyzers.

use crate::error::StoreError;
use crate::memory::{
    MemberUpdate, MemoryStore, NewMember, NewShift, NewTeam, ShiftFilter, ShiftUpdate, TeamUpdate,
};
use crate::seed::demo_store;
use ctrl_shift_domain::{
    CoverageGap, ReportPeriod, Shift, SummaryMetrics, Team, TeamMember, filter_shifts_by_period,
    find_coverage_gaps, find_shifts_without_backup, summary_metrics,
};
use std::sync::Arc;
use std::time::Duration;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::debug;

/// Teams plus the shifts in scope for the team support report.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSupportData {
    /// All teams, with rosters resolved.
    pub teams: Vec<Team>,
    /// The shifts that started within the requested period, or every shift
    /// when no period was requested.
    pub shifts: Vec<Shift>,
}

/// Mock schedule backend with simulated latency.
///
/// Clones share the same underlying store, so a dashboard and a settings
/// panel wired to separate clones observe each other's writes.
#[derive(Debug, Clone)]
pub struct MockScheduleApi {
    store: Arc<Mutex<MemoryStore>>,
    latency: Duration,
}

impl MockScheduleApi {
    /// Wraps a store, applying `latency` before each call.
    #[must_use]
    pub fn new(store: MemoryStore, latency: Duration) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            latency,
        }
    }

    /// Creates an API backed by the demo dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if seeding the demo store fails.
    pub fn demo(latency: Duration) -> Result<Self, StoreError> {
        Ok(Self::new(demo_store()?, latency))
    }

    async fn simulate_latency(&self) {
        if self.latency.is_zero() {
            return;
        }
        debug!(latency_ms = self.latency.as_millis(), "simulating backend latency");
        tokio::time::sleep(self.latency).await;
    }

    // --- Teams ---

    /// Creates a team.
    ///
    /// # Errors
    ///
    /// See [`MemoryStore::create_team`].
    pub async fn create_team(&self, new_team: NewTeam) -> Result<Team, StoreError> {
        self.simulate_latency().await;
        self.store.lock().await.create_team(new_team)
    }

    /// Returns all teams.
    pub async fn teams(&self) -> Vec<Team> {
        self.simulate_latency().await;
        self.store.lock().await.teams()
    }

    /// Returns one team.
    ///
    /// # Errors
    ///
    /// See [`MemoryStore::team`].
    pub async fn team(&self, team_id: &str) -> Result<Team, StoreError> {
        self.simulate_latency().await;
        self.store.lock().await.team(team_id)
    }

    /// Applies a partial update to a team.
    ///
    /// # Errors
    ///
    /// See [`MemoryStore::update_team`].
    pub async fn update_team(&self, team_id: &str, update: TeamUpdate) -> Result<Team, StoreError> {
        self.simulate_latency().await;
        self.store.lock().await.update_team(team_id, update)
    }

    /// Deletes a team.
    ///
    /// # Errors
    ///
    /// See [`MemoryStore::delete_team`].
    pub async fn delete_team(&self, team_id: &str) -> Result<(), StoreError> {
        self.simulate_latency().await;
        self.store.lock().await.delete_team(team_id)
    }

    /// Adds a member to a team's roster.
    ///
    /// # Errors
    ///
    /// See [`MemoryStore::add_member_to_team`].
    pub async fn add_member_to_team(
        &self,
        team_id: &str,
        member_id: &str,
    ) -> Result<(), StoreError> {
        self.simulate_latency().await;
        self.store.lock().await.add_member_to_team(team_id, member_id)
    }

    /// Removes a member from a team's roster.
    ///
    /// # Errors
    ///
    /// See [`MemoryStore::remove_member_from_team`].
    pub async fn remove_member_from_team(
        &self,
        team_id: &str,
        member_id: &str,
    ) -> Result<(), StoreError> {
        self.simulate_latency().await;
        self.store
            .lock()
            .await
            .remove_member_from_team(team_id, member_id)
    }

    // --- Members ---

    /// Registers a member.
    ///
    /// # Errors
    ///
    /// See [`MemoryStore::create_member`].
    pub async fn create_member(&self, new_member: NewMember) -> Result<TeamMember, StoreError> {
        self.simulate_latency().await;
        self.store.lock().await.create_member(new_member)
    }

    /// Returns all members, or one team's roster.
    ///
    /// # Errors
    ///
    /// See [`MemoryStore::members`].
    pub async fn members(&self, team_id: Option<&str>) -> Result<Vec<TeamMember>, StoreError> {
        self.simulate_latency().await;
        self.store.lock().await.members(team_id)
    }

    /// Returns one member.
    ///
    /// # Errors
    ///
    /// See [`MemoryStore::member`].
    pub async fn member(&self, member_id: &str) -> Result<TeamMember, StoreError> {
        self.simulate_latency().await;
        self.store.lock().await.member(member_id)
    }

    /// Applies a partial update to a member.
    ///
    /// # Errors
    ///
    /// See [`MemoryStore::update_member`].
    pub async fn update_member(
        &self,
        member_id: &str,
        update: MemberUpdate,
    ) -> Result<TeamMember, StoreError> {
        self.simulate_latency().await;
        self.store.lock().await.update_member(member_id, update)
    }

    /// Deletes a member and prunes it from every roster.
    ///
    /// # Errors
    ///
    /// See [`MemoryStore::delete_member`].
    pub async fn delete_member(&self, member_id: &str) -> Result<(), StoreError> {
        self.simulate_latency().await;
        self.store.lock().await.delete_member(member_id)
    }

    // --- Shifts ---

    /// Creates a shift.
    ///
    /// # Errors
    ///
    /// See [`MemoryStore::create_shift`].
    pub async fn create_shift(&self, new_shift: NewShift) -> Result<Shift, StoreError> {
        self.simulate_latency().await;
        self.store.lock().await.create_shift(new_shift)
    }

    /// Returns the shifts matching a filter.
    ///
    /// # Errors
    ///
    /// See [`MemoryStore::shifts`].
    pub async fn shifts(&self, filter: &ShiftFilter) -> Result<Vec<Shift>, StoreError> {
        self.simulate_latency().await;
        self.store.lock().await.shifts(filter)
    }

    /// Returns one shift.
    ///
    /// # Errors
    ///
    /// See [`MemoryStore::shift`].
    pub async fn shift(&self, shift_id: &str) -> Result<Shift, StoreError> {
        self.simulate_latency().await;
        self.store.lock().await.shift(shift_id)
    }

    /// Applies a partial update to a shift.
    ///
    /// # Errors
    ///
    /// See [`MemoryStore::update_shift`].
    pub async fn update_shift(
        &self,
        shift_id: &str,
        update: ShiftUpdate,
    ) -> Result<Shift, StoreError> {
        self.simulate_latency().await;
        self.store.lock().await.update_shift(shift_id, update)
    }

    /// Deletes a shift.
    ///
    /// # Errors
    ///
    /// See [`MemoryStore::delete_shift`].
    pub async fn delete_shift(&self, shift_id: &str) -> Result<(), StoreError> {
        self.simulate_latency().await;
        self.store.lock().await.delete_shift(shift_id)
    }

    // --- Analysis and reports ---

    /// Runs the coverage gap analysis over a snapshot of the store.
    pub async fn coverage_gaps(
        &self,
        start_date: OffsetDateTime,
        days_to_check: i64,
    ) -> Vec<CoverageGap> {
        self.simulate_latency().await;
        let store = self.store.lock().await;
        find_coverage_gaps(&store.teams(), &store.all_shifts(), start_date, days_to_check)
    }

    /// Runs the backup coverage analysis over a snapshot of the store.
    pub async fn shifts_without_backup(
        &self,
        start_date: OffsetDateTime,
        days_to_check: i64,
    ) -> Vec<Shift> {
        self.simulate_latency().await;
        let store = self.store.lock().await;
        find_shifts_without_backup(&store.all_shifts(), start_date, days_to_check)
    }

    /// Returns the data backing the team support report: all teams plus the
    /// shifts that started within the trailing period, or every shift when
    /// `period` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the trailing range start is not representable.
    pub async fn team_support_data(
        &self,
        reference: OffsetDateTime,
        period: Option<ReportPeriod>,
    ) -> Result<TeamSupportData, StoreError> {
        self.simulate_latency().await;
        let store = self.store.lock().await;

        let shifts: Vec<Shift> = match period {
            Some(period) => filter_shifts_by_period(&store.all_shifts(), reference, period)?,
            None => store.all_shifts(),
        };
        Ok(TeamSupportData {
            teams: store.teams(),
            shifts,
        })
    }

    /// Computes summary metrics over a snapshot of the store.
    pub async fn summary_metrics(&self) -> SummaryMetrics {
        self.simulate_latency().await;
        let store = self.store.lock().await;
        summary_metrics(&store.teams(), &store.all_shifts())
    }
}
