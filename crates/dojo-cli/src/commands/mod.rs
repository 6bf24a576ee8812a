pub mod rewrite_schema;
pub mod serve;
