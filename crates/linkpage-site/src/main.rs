//! Link Page Site
//!
//! Serves the company link page and its profile endpoint.

use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;
use linkpage_site::config::SiteConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "linkpage-site")]
#[command(about = "Link-in-bio landing page server", long_about = None)]
struct Cli {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// Absolute base address for the page's internal profile query.
    #[arg(long, env = "NEXT_PUBLIC_BASE_URL")]
    base_url: Option<String>,

    /// Directory of static assets served at the site root.
    #[arg(long, env = "PUBLIC_DIR", default_value = "public")]
    public_dir: PathBuf,

    /// Upstream URL to fetch the company profile from.
    #[arg(long, env = "COMPANY_API_URL")]
    company_api_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("linkpage_site=debug,tower_http=debug")),
        )
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = SiteConfig {
        bind_addr: cli.bind,
        public_dir: cli.public_dir,
        company_api_url: cli.company_api_url,
        ..SiteConfig::default()
    };
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url);
    }

    tracing::info!("Starting link page server");

    linkpage_site::run(config).await?;
    Ok(())
}
