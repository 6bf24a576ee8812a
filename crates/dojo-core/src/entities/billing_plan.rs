use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A membership plan offered by the academy.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BillingPlan {
    pub id: u32,
    pub name: String,
    /// Price in BRL.
    pub price: f64,
    pub description: String,
    pub active: bool,
}
