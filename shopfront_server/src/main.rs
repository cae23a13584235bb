mod handlers;
mod reply;
mod routes;

use anyhow::{Context, Result};
use clap::Parser;
use shopfront_lib::catalog_api::{AuthClient, CatalogClient};
use tokio::net::TcpListener;

use crate::routes::{router, AppState};

#[derive(Parser)]
#[command(name = "shopfront")]
#[command(about = "HTTP facade over the product catalog service")]
struct Cli {
    /// Address to listen on (default: SHOPFRONT_BIND or 127.0.0.1:8080)
    #[arg(long)]
    bind: Option<String>,

    /// Base URL of the catalog service (default: SHOPFRONT_CATALOG_URL)
    #[arg(long)]
    catalog_url: Option<String>,

    /// Base URL of the token verification service (default: SHOPFRONT_AUTH_URL)
    #[arg(long)]
    auth_url: Option<String>,
}

fn resolve(flag: Option<String>, flag_name: &str, env_key: &str) -> Result<String> {
    flag.or_else(|| std::env::var(env_key).ok())
        .with_context(|| format!("no {} given and {} is not set", flag_name, env_key))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("shopfront=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let catalog_url = resolve(cli.catalog_url, "--catalog-url", "SHOPFRONT_CATALOG_URL")?;
    let auth_url = resolve(cli.auth_url, "--auth-url", "SHOPFRONT_AUTH_URL")?;
    let bind = cli
        .bind
        .or_else(|| std::env::var("SHOPFRONT_BIND").ok())
        .unwrap_or_else(|| "127.0.0.1:8080".to_string());

    let state = AppState {
        catalog: CatalogClient::new(&catalog_url),
        auth: AuthClient::new(&auth_url),
    };

    let listener = TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {}", bind))?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;

    Ok(())
}
