//! Transfer request entity <-> model mapper

use citadel_core::entities::TransferRequest;
use citadel_core::Id;

use crate::models::TransferRequestModel;

impl From<TransferRequestModel> for TransferRequest {
    fn from(model: TransferRequestModel) -> Self {
        TransferRequest {
            id: Id::new(model.id),
            roster_id: Id::new(model.roster_id),
            user_id: Id::new(model.user_id),
            is_joining: model.is_joining,
            propagate: model.propagate,
            approved_by: model.approved_by.map(Id::new),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
