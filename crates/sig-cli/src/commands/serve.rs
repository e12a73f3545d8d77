use anyhow::Context;
use sig_config::ServerConfig;
use tokio::net::TcpListener;

use crate::cli::root_commands::ServeArgs;
use crate::context::AppContext;

/// Handle `sigctl serve`.
pub async fn handle(args: &ServeArgs, ctx: AppContext) -> anyhow::Result<()> {
    let server = with_overrides(&ctx.config.server, args);
    let addr = server.bind_addr();

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    let state = sig_api::AppState::new(ctx.service, ctx.config.general.clone());
    sig_api::serve(listener, state, server.allow_any_origin).await?;
    Ok(())
}

/// Apply `--host` / `--port` on top of the configured server section.
fn with_overrides(config: &ServerConfig, args: &ServeArgs) -> ServerConfig {
    let mut server = config.clone();
    if let Some(host) = &args.host {
        server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        server.port = port;
    }
    server
}
