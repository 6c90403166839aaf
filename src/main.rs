//! Projects API
//!
//! CRUD over an in-memory list of projects, served with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ TraceLayer ─▶ CORS ─▶ body limit ─▶ request log
//!                                                             │
//!                               ┌─────────────────────────────┤
//!                               ▼                             ▼
//!                    /projects/{id}: id check          /projects
//!                               │                             │
//!                               └────────────┬────────────────┘
//!                                            ▼
//!                                  handler ─▶ ProjectStore
//! ```

use clap::Parser;
use std::path::PathBuf;

use projects_api::lifecycle;

#[derive(Parser)]
#[command(name = "projects-api")]
#[command(about = "In-memory projects CRUD service", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    lifecycle::start(cli.config.as_deref()).await?;
    Ok(())
}
