//! Business model -> entity mapper

use vitrina_core::entities::Business;

use crate::models::BusinessModel;

impl From<BusinessModel> for Business {
    fn from(model: BusinessModel) -> Self {
        Business {
            id: model.id,
            name: model.name,
            tax_id: model.tax_id,
            classification: model.classification,
            plan: model.plan,
            zone: model.zone,
            location: model.location,
            description: model.description,
            url: model.url,
            price_range: model.price_range,
            image_url: model.image_url,
            owner_id: model.owner_id,
        }
    }
}
