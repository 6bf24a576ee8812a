use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Convert `String[]` / `Json[]` fields in a Prisma schema to `Json @default("[]")`, in place.
    RewriteSchema(RewriteSchemaArgs),
    /// Serve dashboard HTML and JSON fixtures for manual UI testing.
    Serve(ServeArgs),
}

#[derive(Clone, Debug, Args)]
pub struct RewriteSchemaArgs {
    /// Schema file to rewrite (defaults to `rewrite.schema_path`)
    pub path: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Interface to bind (defaults to `server.host`)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (defaults to `server.port`)
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory pages and static files are served from (defaults to `server.static_root`)
    #[arg(long)]
    pub root: Option<PathBuf>,
}
