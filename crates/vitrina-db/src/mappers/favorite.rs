//! Favorite model -> entity mapper

use vitrina_core::entities::Favorite;

use crate::models::FavoriteModel;

impl From<FavoriteModel> for Favorite {
    fn from(model: FavoriteModel) -> Self {
        Favorite {
            id: model.id,
            explorer_id: model.explorer_id,
            business_id: model.business_id,
            saved_at: model.saved_at,
        }
    }
}
