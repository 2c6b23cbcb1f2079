//! Team entity <-> model mapper

use citadel_core::entities::Team;
use citadel_core::Id;

use crate::models::TeamModel;

impl From<TeamModel> for Team {
    fn from(model: TeamModel) -> Self {
        Team {
            id: Id::new(model.id),
            name: model.name,
            description: model.description,
            notice: model.notice,
            captain_id: Id::new(model.captain_id),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
