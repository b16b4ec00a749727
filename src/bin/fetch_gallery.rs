//! Fetch a gallery page and print its metadata as JSON.
//!
//! Usage: `fetch_gallery https://hitomi.la/reader/1083230.html`
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::env;
use std::process::ExitCode;

use hitomi_metadata::fetch::HttpFetcher;
use hitomi_metadata::{url_utils, HitomiSource, MetadataSource};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let Some(address) = env::args().nth(1) else {
        eprintln!("usage: fetch_gallery <gallery-or-reader-url>");
        return ExitCode::FAILURE;
    };

    let fetcher = match HttpFetcher::new() {
        Ok(fetcher) => fetcher,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let source = HitomiSource::new(fetcher);

    let Some(url) = url_utils::parse_url(&address).filter(|url| source.can_handle(url)) else {
        eprintln!("{} cannot handle {address}", source.identify().name);
        return ExitCode::FAILURE;
    };

    let record = match source.extract(&url).await {
        Ok(record) => record,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&record) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Failed to serialize record: {err}");
            ExitCode::FAILURE
        }
    }
}
