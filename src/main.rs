//! todos-server binary entry point

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use todos_server::db::{create_pool, migrations};
use todos_server::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "todos-server", about = "Todo list manager HTTP server")]
struct Args {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    bind: SocketAddr,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    let pool = create_pool(&args.database_url)
        .await
        .context("failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("failed to run migrations")?;

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    run_server(pool, config).await.context("server error")?;

    Ok(())
}
