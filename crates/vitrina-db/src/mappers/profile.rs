//! Profile model -> entity mappers

use vitrina_core::entities::{ExplorerProfile, OwnerProfile};

use crate::models::{ExplorerProfileModel, OwnerProfileModel};

impl From<ExplorerProfileModel> for ExplorerProfile {
    fn from(model: ExplorerProfileModel) -> Self {
        ExplorerProfile {
            id: model.id,
            user_id: model.user_id,
            first_name: model.first_name,
            middle_name: model.middle_name,
            last_name: model.last_name,
            second_last_name: model.second_last_name,
            birth_date: model.birth_date,
            phone: model.phone,
            preference: model.preference,
        }
    }
}

impl From<OwnerProfileModel> for OwnerProfile {
    fn from(model: OwnerProfileModel) -> Self {
        OwnerProfile {
            id: model.id,
            user_id: model.user_id,
            first_name: model.first_name,
            middle_name: model.middle_name,
            last_name: model.last_name,
            second_last_name: model.second_last_name,
            birth_date: model.birth_date,
            phone: model.phone,
        }
    }
}
