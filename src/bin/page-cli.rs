use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use url::Url;

use page_handlers::config::load_config;
use page_handlers::http::decode_route_value;
use page_handlers::routing::{scored_candidates, select, PageRouter, SelectionRequest};

#[derive(Parser)]
#[command(name = "page-cli")]
#[command(about = "Inspect page catalogs and resolve handlers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and validate a catalog file
    Check {
        #[arg(short, long)]
        catalog: PathBuf,
    },
    /// Resolve a handler offline against a catalog file
    Select {
        #[arg(short, long)]
        catalog: PathBuf,
        /// Request path, e.g. /orders or /orders/Edit
        #[arg(short, long)]
        page: String,
        #[arg(short, long, default_value = "GET")]
        method: String,
        /// Value of the `handler` query parameter
        #[arg(long)]
        handler: Option<String>,
    },
    /// Ask a running host which handler serves a request
    Query {
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
        #[arg(short, long)]
        page: String,
        #[arg(short, long, default_value = "GET")]
        method: String,
        #[arg(long)]
        handler: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { catalog } => {
            let config = load_config(&catalog)?;
            let handlers: usize = config.pages.iter().map(|p| p.handlers.len()).sum();
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "valid": true,
                    "pages": config.pages.len(),
                    "handlers": handlers,
                }))?
            );
            Ok(ExitCode::SUCCESS)
        }
        Commands::Select {
            catalog,
            page,
            method,
            handler,
        } => {
            let config = load_config(&catalog)?;
            let router = PageRouter::from_config(config.pages);
            let (report, code) = resolve(&router, &page, &method, handler.as_deref());
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(code)
        }
        Commands::Query {
            url,
            page,
            method,
            handler,
        } => query(&url, &page, &method, handler.as_deref()).await,
    }
}

/// Run selection locally and describe every step of it.
fn resolve(router: &PageRouter, path: &str, method: &str, handler: Option<&str>) -> (Value, ExitCode) {
    let Some(matched) = router.match_path(path) else {
        return (
            json!({ "outcome": "page_not_found", "path": path }),
            ExitCode::from(1),
        );
    };

    let route_value = matched.route_value.map(decode_route_value);
    let request = SelectionRequest::from_sources(method, route_value.as_deref(), handler);
    let candidates: Vec<Value> = scored_candidates(&matched.page.handlers, &request)
        .into_iter()
        .map(|(descriptor, score)| json!({ "handler": descriptor, "score": score }))
        .collect();

    let mut report = json!({
        "page": matched.page.path,
        "method": method,
        "name_hint": request.name_hint,
        "candidates": candidates,
    });

    let code = match select(&matched.page.handlers, &request) {
        Ok(Some(selected)) => {
            report["outcome"] = json!("selected");
            report["handler"] = json!(selected);
            ExitCode::SUCCESS
        }
        Ok(None) => {
            report["outcome"] = json!("no_handler");
            ExitCode::from(1)
        }
        Err(e) => {
            report["outcome"] = json!("ambiguous");
            report["error"] = json!(e.to_string());
            ExitCode::from(2)
        }
    };

    (report, code)
}

async fn query(
    base: &str,
    page: &str,
    method: &str,
    handler: Option<&str>,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut url = Url::parse(base)?.join(page)?;
    if let Some(handler) = handler {
        url.query_pairs_mut().append_pair("handler", handler);
    }

    let method = reqwest::Method::from_bytes(method.as_bytes())?;
    let res = reqwest::Client::new().request(method, url).send().await?;
    let status = res.status();
    let text = res.text().await?;

    println!("status: {}", status);
    if !text.is_empty() {
        match serde_json::from_str::<Value>(&text) {
            Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
            Err(_) => println!("{}", text),
        }
    }

    Ok(if status.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
