// src/domain/user/identity.rs
use crate::domain::user::value_objects::{Role, Team, UserId};

/// The requester of an operation. Every caller handles both variants
/// explicitly; there is no default user standing in for anonymity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Anonymous,
    Authenticated {
        id: UserId,
        role: Role,
        team: Team,
        is_superuser: bool,
    },
}

impl Identity {
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Identity::Anonymous)
    }

    pub fn is_admin(&self) -> bool {
        matches!(
            self,
            Identity::Authenticated {
                role: Role::Admin,
                ..
            }
        )
    }

    pub fn is_superuser(&self) -> bool {
        matches!(
            self,
            Identity::Authenticated {
                is_superuser: true,
                ..
            }
        )
    }

    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Identity::Anonymous => None,
            Identity::Authenticated { id, .. } => Some(*id),
        }
    }
}
