//! Transfer ledger entity <-> model mappers

use citadel_core::entities::{RosterTransfer, TeamTransfer};
use citadel_core::Id;

use crate::models::{RosterTransferModel, TeamTransferModel};

impl From<TeamTransferModel> for TeamTransfer {
    fn from(model: TeamTransferModel) -> Self {
        TeamTransfer {
            id: Id::new(model.id),
            team_id: Id::new(model.team_id),
            user_id: Id::new(model.user_id),
            is_joining: model.is_joining,
            created_at: model.created_at,
        }
    }
}

impl From<RosterTransferModel> for RosterTransfer {
    fn from(model: RosterTransferModel) -> Self {
        RosterTransfer {
            id: Id::new(model.id),
            roster_id: Id::new(model.roster_id),
            user_id: Id::new(model.user_id),
            is_joining: model.is_joining,
            created_at: model.created_at,
        }
    }
}
