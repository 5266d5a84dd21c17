//! Visit model -> entity mapper

use vitrina_core::entities::Visit;

use crate::models::VisitModel;

impl From<VisitModel> for Visit {
    fn from(model: VisitModel) -> Self {
        Visit {
            id: model.id,
            business_id: model.business_id,
            explorer_id: model.explorer_id,
            visited_at: model.visited_at,
            kind: model.kind,
        }
    }
}
