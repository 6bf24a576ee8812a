use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An enrolled student as shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Age/class category: `ADULT`, `FEMALE`, `CHILD`, ...
    pub category: String,
    pub belt: String,
    /// Curriculum progress, 0-100.
    pub progress: u8,
    /// Attendance rate, 0-100.
    pub attendance: u8,
    pub status: String,
    /// `YYYY-MM-DD`.
    pub enrollment_date: String,
}
