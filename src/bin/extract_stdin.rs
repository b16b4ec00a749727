//! Simple CLI that reads a gallery page from stdin and outputs JSON to stdout.
//!
//! Usage: `extract_stdin < gallery.html`

use hitomi_metadata::extract_html;
use std::io::{self, Read};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut html = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut html) {
        eprintln!("Failed to read from stdin: {err}");
        return ExitCode::FAILURE;
    }

    let record = match extract_html(&html) {
        Ok(record) => record,
        Err(err) => {
            eprintln!("Extraction failed: {err}");
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
