//! vows-cli: gallery manifest builder and development server.
//!
//! ```bash
//! # Print the gallery listing for ./public
//! vows-cli manifest
//!
//! # Write it next to the built site
//! vows-cli manifest --public dist --output dist/gallery.json
//!
//! # Serve the site with a live gallery endpoint
//! vows-cli serve --public dist --port 8080
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vows_cli::{manifest_json, server, write_manifest};

/// Wedding invitation site companion
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print or write the gallery manifest
    Manifest {
        /// Public asset root containing the image directories
        #[arg(long, env = "VOWS_PUBLIC_DIR", default_value = "public")]
        public: PathBuf,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Serve the site with a per-request gallery endpoint
    Serve {
        /// Public asset root to serve
        #[arg(long, env = "VOWS_PUBLIC_DIR", default_value = "public")]
        public: PathBuf,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        // stdout carries the manifest
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Manifest { public, output } => {
            if !public.is_dir() {
                warn!(root = %public.display(), "public root not found; manifest will be empty");
            }
            match output {
                Some(path) => {
                    let count = write_manifest(&public, &path)?;
                    info!("Wrote {} gallery entries to {}", count, path.display());
                }
                None => println!("{}", manifest_json(&public)?),
            }
        }
        Command::Serve { public, host, port } => {
            let addr: SocketAddr = format!("{}:{}", host, port)
                .parse()
                .with_context(|| format!("invalid address {}:{}", host, port))?;
            server::run_server(public, addr).await?;
        }
    }

    Ok(())
}
