use clap::Parser;
use mapgaz::server::{self, ServerConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// mapgaz — world city gazetteer API
///
/// Serves search, geocode, reverse-geocode, directions and feedback
/// endpoints over a built-in table of cities.
///
/// Examples:
///   mapgaz
///   mapgaz --port 8080 --static-dir ./public
///   MAPGAZ_HOST=0.0.0.0 mapgaz
#[derive(Parser)]
#[command(name = "mapgaz", version, about, long_about = None)]
struct Cli {
    /// Address to bind.
    #[arg(long, env = "MAPGAZ_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on.
    #[arg(long, short = 'p', env = "MAPGAZ_PORT", default_value_t = 5000)]
    port: u16,

    /// Directory with the map front-end (index.html, css/, js/, assets/).
    #[arg(long, env = "MAPGAZ_STATIC_DIR")]
    static_dir: Option<PathBuf>,

    /// Default log filter. RUST_LOG takes precedence.
    #[arg(long, env = "MAPGAZ_LOG", default_value = "info")]
    log_level: String,
}

impl Cli {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            static_dir: self.static_dir.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    server::start(&cli.server_config()).await
}
