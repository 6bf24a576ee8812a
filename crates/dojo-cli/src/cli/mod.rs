use clap::Parser;

pub mod root_commands;

pub use root_commands::{Commands, RewriteSchemaArgs, ServeArgs};

/// Top-level CLI parser for the `dojo` binary.
#[derive(Debug, Parser)]
#[command(
    name = "dojo",
    version,
    about = "Dojo tools - schema array rewriter and local fixture server"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Global flags handed to command handlers.
#[derive(Clone, Copy, Debug)]
pub struct GlobalFlags {
    pub quiet: bool,
}

impl Cli {
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags { quiet: self.quiet }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn rewrite_schema_path_is_optional() {
        let cli = Cli::try_parse_from(["dojo", "rewrite-schema"]).unwrap();
        let Commands::RewriteSchema(args) = cli.command else {
            panic!("expected rewrite-schema");
        };
        assert_eq!(args.path, None);

        let cli = Cli::try_parse_from(["dojo", "rewrite-schema", "db/schema.prisma"]).unwrap();
        let Commands::RewriteSchema(args) = cli.command else {
            panic!("expected rewrite-schema");
        };
        assert_eq!(args.path, Some(PathBuf::from("db/schema.prisma")));
    }

    #[test]
    fn serve_overrides_parse() {
        let cli = Cli::try_parse_from([
            "dojo", "serve", "--host", "127.0.0.1", "--port", "8080", "--root", "site", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(args.port, Some(8080));
        assert_eq!(args.root, Some(PathBuf::from("site")));
    }

    #[test]
    fn serve_rejects_non_numeric_port() {
        assert!(Cli::try_parse_from(["dojo", "serve", "--port", "http"]).is_err());
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::try_parse_from(["dojo", "rewrite-schema", "--quiet"]).unwrap();
        assert!(cli.global_flags().quiet);
    }
}
