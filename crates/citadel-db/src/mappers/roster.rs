//! Roster entity <-> model mapper

use citadel_core::entities::Roster;
use citadel_core::Id;

use crate::models::RosterModel;

impl From<RosterModel> for Roster {
    fn from(model: RosterModel) -> Self {
        Roster {
            id: Id::new(model.id),
            team_id: Id::new(model.team_id),
            division_id: Id::new(model.division_id),
            name: model.name,
            description: model.description,
            notice: model.notice,
            ranking: model.ranking,
            seeding: model.seeding,
            approved: model.approved,
            disbanded: model.disbanded,
            player_count: model.player_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
