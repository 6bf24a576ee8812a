use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A curriculum technique.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Technique {
    pub id: String,
    pub name: String,
    /// Technique family: `DEFENSE`, `STRIKE`, `RELEASE`, ...
    pub category: String,
    /// Difficulty on a 1-5 scale.
    pub difficulty: u8,
    pub belt_level: String,
    pub description: String,
}
