//! Division entity <-> model mapper

use citadel_core::entities::Division;
use citadel_core::Id;

use crate::models::DivisionModel;

impl From<DivisionModel> for Division {
    fn from(model: DivisionModel) -> Self {
        Division {
            id: Id::new(model.id),
            league_id: Id::new(model.league_id),
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
