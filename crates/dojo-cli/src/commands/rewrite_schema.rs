use std::path::PathBuf;

use dojo_config::DojoConfig;

use crate::cli::RewriteSchemaArgs;

const DONE_LINES: [&str; 2] = [
    "Schema updated: String[] and Json[] fields converted to Json @default(\"[]\")",
    "Run `prisma generate` to refresh the client.",
];

/// Handle `dojo rewrite-schema`.
///
/// `load_config` only runs when no path is given on the command line, so a
/// broken config file does not block an explicit rewrite.
pub fn handle(
    args: &RewriteSchemaArgs,
    load_config: impl FnOnce() -> anyhow::Result<DojoConfig>,
) -> anyhow::Result<()> {
    let path = match &args.path {
        Some(path) => path.clone(),
        None => PathBuf::from(load_config()?.rewrite.schema_path),
    };

    let report = dojo_rewrite::rewrite_schema_file(&path)?;
    tracing::info!(
        path = %report.path.display(),
        string_arrays = report.string_arrays,
        json_arrays = report.json_arrays,
        "schema rewritten"
    );

    for line in DONE_LINES {
        println!("{line}");
    }
    Ok(())
}
