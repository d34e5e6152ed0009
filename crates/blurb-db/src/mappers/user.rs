//! User entity <-> model mapper

use blurb_core::entities::User;
use blurb_core::value_objects::Snowflake;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            session_id: model.session_id,
            liked: model.liked.into_iter().map(Snowflake::new).collect(),
            disliked: model.disliked.into_iter().map(Snowflake::new).collect(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
