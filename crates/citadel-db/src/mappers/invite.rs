//! Team invite entity <-> model mapper

use citadel_core::entities::TeamInvite;
use citadel_core::Id;

use crate::models::TeamInviteModel;

impl From<TeamInviteModel> for TeamInvite {
    fn from(model: TeamInviteModel) -> Self {
        TeamInvite {
            id: Id::new(model.id),
            team_id: Id::new(model.team_id),
            user_id: Id::new(model.user_id),
            accepted_at: model.accepted_at,
            declined_at: model.declined_at,
            created_at: model.created_at,
        }
    }
}
