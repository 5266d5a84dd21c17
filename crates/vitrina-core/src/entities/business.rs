//! Business ("empresa") entity

/// Plan assigned when a business registers without choosing one
pub const DEFAULT_PLAN: &str = "Sin Plan";

/// Subscription plans the admin dashboard charts. A business can carry any
/// string; unknown plans are bucketed under the default.
pub const KNOWN_PLANS: [&str; 4] = ["Sin Plan", "Valvanera", "Castillo Marroquin", "Diosa chia"];

/// Business listing owned by exactly one owner profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Business {
    pub id: i64,
    pub name: String,
    pub tax_id: String,
    pub classification: Option<String>,
    pub plan: String,
    pub zone: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub price_range: Option<String>,
    pub image_url: Option<String>,
    pub owner_id: i64,
}

impl Business {
    /// Plan bucket used by the dashboard chart
    #[must_use]
    pub fn plan_bucket(&self) -> &str {
        if KNOWN_PLANS.contains(&self.plan.as_str()) {
            self.plan.as_str()
        } else {
            DEFAULT_PLAN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn business_with_plan(plan: &str) -> Business {
        Business {
            id: 1,
            name: "La Huerta".to_string(),
            tax_id: "900123456-7".to_string(),
            classification: Some("Comida".to_string()),
            plan: plan.to_string(),
            zone: None,
            location: None,
            description: None,
            url: None,
            price_range: None,
            image_url: None,
            owner_id: 1,
        }
    }

    #[test]
    fn test_known_plan_buckets_to_itself() {
        assert_eq!(business_with_plan("Valvanera").plan_bucket(), "Valvanera");
    }

    #[test]
    fn test_unknown_plan_buckets_to_default() {
        assert_eq!(business_with_plan("Premium Plus").plan_bucket(), DEFAULT_PLAN);
    }
}
