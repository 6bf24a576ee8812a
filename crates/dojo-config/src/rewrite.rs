//! Schema rewriter configuration.

use serde::{Deserialize, Serialize};

fn default_schema_path() -> String {
    "prisma/schema.prisma".into()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RewriteConfig {
    /// Schema file rewritten in place when no path is given on the command line.
    #[serde(default = "default_schema_path")]
    pub schema_path: String,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            schema_path: default_schema_path(),
        }
    }
}
