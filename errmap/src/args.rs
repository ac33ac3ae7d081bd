use std::path::PathBuf;

use clap::Parser;

/// errmap reference service
#[derive(Debug, Parser)]
#[command(name = "errmap", about = "HTTP service that maps every failure to a uniform JSON error")]
pub struct Args {
    /// Path to configuration file; a missing file means built-in defaults
    #[arg(short, long, default_value = "errmap.toml", env = "ERRMAP_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "ERRMAP_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
