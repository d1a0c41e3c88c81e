//! `filehttp` - serve the files of a directory over HTTP/1.0 and HTTP/1.1.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use filehttp_rs::{HttpServer, ServerConfig, ServerError};

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "filehttp")]
#[command(about = "Minimal static file HTTP server")]
#[command(version)]
struct Cli {
    /// TCP port to listen on
    port: u16,

    /// Address to bind, overriding the configuration file
    #[arg(long)]
    host: Option<IpAddr>,

    /// Directory to serve files from, overriding the configuration file
    #[arg(long)]
    root: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Defaults, then the configuration file, then command line flags.
    fn into_config(self) -> Result<ServerConfig, ServerError> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_json_file(path)?,
            None => ServerConfig::default(),
        };

        let host = self.host.unwrap_or_else(|| config.addr.ip());
        config.addr = SocketAddr::new(host, self.port);
        if let Some(root) = self.root {
            config.root_dir = root;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Usage errors exit through clap with a non-zero status
    let cli = Cli::parse();

    let result = match cli.into_config() {
        Ok(config) => HttpServer::new(config).start().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
