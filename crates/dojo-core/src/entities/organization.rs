use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An academy (tenant) the dashboard can switch between.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub city: String,
    pub state: String,
    pub active_students: u32,
    pub is_active: bool,
}
