// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use ctrl_shift_domain::DomainError;

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Team does not exist.
    TeamNotFound(String),
    /// Member does not exist (in the registry, or on the named roster).
    MemberNotFound(String),
    /// Shift does not exist.
    ShiftNotFound(String),
    /// A domain rule was violated.
    DomainViolation(DomainError),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TeamNotFound(id) => write!(f, "Team '{id}' not found"),
            Self::MemberNotFound(id) => write!(f, "Member '{id}' not found"),
            Self::ShiftNotFound(id) => write!(f, "Shift '{id}' not found"),
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<DomainError> for StoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
