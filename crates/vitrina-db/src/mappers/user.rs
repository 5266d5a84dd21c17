//! User model -> entity mapper

use vitrina_core::entities::{Role, User};
use vitrina_core::error::DomainError;

use crate::models::UserModel;

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        Ok(User {
            id: model.id,
            username: model.username,
            email: model.email,
            role: Role::parse(&model.role)?,
            created_at: model.created_at,
        })
    }
}
