use std::path::PathBuf;

use serde_json::{json, Map, Value};
use tracing::{error, info};

use medscout::core::config::load_config;
use medscout::{extract_page, scrape_many, ExtractError, HttpFetcher, Site};

const USAGE: &str = "\
usage:
  medscout <product-url>...
  medscout --file <page.html> --site <1mg|apollo|truemeds> [--url <page-url>]";

enum Command {
    Fetch(Vec<String>),
    Offline {
        file: PathBuf,
        site: String,
        url: Option<String>,
    },
    Help,
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut urls = Vec::new();
    let mut file = None;
    let mut site = None;
    let mut url = None;

    let mut iter = args.iter();
    while let Some(a) = iter.next() {
        match a.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--file" => file = Some(PathBuf::from(value_for(a, iter.next())?)),
            "--site" => site = Some(value_for(a, iter.next())?),
            "--url" => url = Some(value_for(a, iter.next())?),
            other if other.starts_with("--") => return Err(format!("unknown option {}", other)),
            other => urls.push(other.to_string()),
        }
    }

    match (file, site) {
        (Some(file), Some(site)) if urls.is_empty() => Ok(Command::Offline { file, site, url }),
        (Some(_), None) => Err("--file needs --site".to_string()),
        (None, Some(_)) => Err("--site needs --file".to_string()),
        (Some(_), Some(_)) => Err("page URLs cannot be combined with --file".to_string()),
        (None, None) if urls.is_empty() => Err("no product URLs given".to_string()),
        (None, None) => Ok(Command::Fetch(urls)),
    }
}

fn value_for(flag: &str, value: Option<&String>) -> Result<String, String> {
    value
        .filter(|v| !v.starts_with("--"))
        .cloned()
        .ok_or_else(|| format!("{} expects a value", flag))
}

/// `{"error", "code"}` entry for a URL that could not be scraped. Fetch
/// failures carry no extraction code and report `FETCH_FAILED`.
fn error_entry(e: &anyhow::Error) -> Value {
    let code = e
        .downcast_ref::<ExtractError>()
        .map_or("FETCH_FAILED", ExtractError::error_code);
    json!({ "error": format!("{:#}", e), "code": code })
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config();

    // Logs go to stderr; stdout carries the JSON result.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.resolve_log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(msg) => {
            eprintln!("{}\n{}", msg, USAGE);
            std::process::exit(1);
        }
    };

    match command {
        Command::Help => {
            println!("{}", USAGE);
        }
        Command::Offline { file, site, url } => {
            let site: Site = match site.parse() {
                Ok(site) => site,
                Err(e) => {
                    eprintln!("{}\n{}", e, USAGE);
                    std::process::exit(1);
                }
            };
            let html = tokio::fs::read_to_string(&file).await?;
            let page_url = url.unwrap_or_else(|| file.display().to_string());
            info!("classifying {} as a {} page", file.display(), site);
            let page = extract_page(site, &page_url, &html)?;
            print_json(&page)?;
        }
        Command::Fetch(urls) => {
            let fetcher = HttpFetcher::new(&config.fetch)?;
            let mut out = Map::new();
            for (url, result) in scrape_many(&fetcher, &urls).await {
                let value = match result {
                    Ok(page) => serde_json::to_value(&page)?,
                    Err(e) => {
                        error!("{}: {:#}", url, e);
                        error_entry(&e)
                    }
                };
                out.insert(url, value);
            }
            print_json(&Value::Object(out))?;
        }
    }

    Ok(())
}
