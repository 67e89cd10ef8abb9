//! Page handler host.
//!
//! Serves a catalog of pages, each with a list of declared handlers, and
//! answers every request with the handler that would run for it.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────────┐
//!                    │                   PAGE HOST                       │
//!                    │                                                   │
//!   Client Request   │  ┌─────────┐    ┌──────────┐    ┌─────────────┐  │
//!   ─────────────────┼─▶│  http   │───▶│  router  │───▶│   filter    │  │
//!                    │  │ server  │    │  (page)  │    │ (verb/name) │  │
//!                    │  └─────────┘    └──────────┘    └──────┬──────┘  │
//!                    │                                        ▼         │
//!   Client Response  │  ┌──────────┐                  ┌─────────────┐   │
//!   ◀────────────────┼──│ response │◀─────────────────│  selector   │   │
//!                    │  │  (JSON)  │                  │ (score/tie) │   │
//!                    │  └──────────┘                  └─────────────┘   │
//!                    │                                                   │
//!                    │  Cross-cutting: config (+watcher), observability, │
//!                    │                 lifecycle (startup/shutdown)      │
//!                    └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use page_handlers::lifecycle::startup;

#[derive(Parser)]
#[command(name = "page-handlers")]
#[command(about = "Serve a page catalog and resolve handlers per request", long_about = None)]
struct Args {
    /// Catalog file (TOML). Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    startup::run(args.config.as_deref()).await?;
    Ok(())
}
