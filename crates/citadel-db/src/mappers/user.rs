//! User entity <-> model mapper

use citadel_core::entities::User;
use citadel_core::Id;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Id::new(model.id),
            name: model.name,
            admin: model.admin,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
