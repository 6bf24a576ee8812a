use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A scheduled class (turma).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: u32,
    pub name: String,
    pub instructor: String,
    /// Human-readable weekly schedule.
    pub schedule: String,
    pub level: String,
    pub max_students: u32,
    pub current_students: u32,
    pub room: String,
    pub status: String,
    pub description: String,
    /// `YYYY-MM-DD`.
    pub start_date: String,
    /// `YYYY-MM-DD`.
    pub end_date: String,
}
