use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Context;
use dojo_config::{DojoConfig, ServerConfig};
use dojo_server::{FixtureServer, ROUTES};

use crate::cli::{GlobalFlags, ServeArgs};

/// Handle `dojo serve`.
///
/// The blocking serve loop runs on a `spawn_blocking` task; Ctrl+C sets the
/// shutdown flag and the task closes the listener on its way out.
pub async fn handle(
    args: &ServeArgs,
    config: &DojoConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let server_config = apply_overrides(&config.server, args);
    server_config.validate()?;

    let server = FixtureServer::bind(&server_config)?;
    if !flags.quiet {
        print_banner(&server_config);
    }

    let shutdown = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&shutdown);
    let mut task = tokio::task::spawn_blocking(move || {
        let result = server.serve_until(&flag);
        server.shutdown();
        result
    });

    tokio::select! {
        joined = &mut task => {
            return joined.context("server task panicked")?.map_err(anyhow::Error::from);
        }
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for Ctrl+C")?;
        }
    }

    if !flags.quiet {
        println!("\nShutting down server...");
    }
    shutdown.store(true, Ordering::SeqCst);
    task.await.context("server task panicked")??;
    if !flags.quiet {
        println!("Server closed");
    }
    Ok(())
}

fn apply_overrides(base: &ServerConfig, args: &ServeArgs) -> ServerConfig {
    let mut config = base.clone();
    if let Some(host) = &args.host {
        config.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(root) = &args.root {
        config.static_root = root.to_string_lossy().into_owned();
    }
    config
}

fn print_banner(config: &ServerConfig) {
    let base = format!("http://localhost:{}", config.port);
    println!("================================");
    println!("DASHBOARD SERVER RUNNING");
    println!("================================");
    println!("Serving {} on {}", config.static_root, config.bind_addr());
    for (path, label) in ROUTES {
        println!("  {label:<22} {base}{path}");
    }
    println!("Press Ctrl+C to stop");
}
