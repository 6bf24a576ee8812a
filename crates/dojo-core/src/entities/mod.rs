//! Entity structs for the fixture records.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` and use
//! camelCase field names, matching what the dashboard front end expects.

mod billing_plan;
mod class;
mod organization;
mod student;
mod technique;

pub use billing_plan::BillingPlan;
pub use class::Class;
pub use organization::Organization;
pub use student::Student;
pub use technique::Technique;
