//! Simple CLI that resolves a raw media name and prints the scored
//! candidates as JSON. Useful for checking what a filename would match
//! before letting the host pick.
//!
//! Usage: `resolve_name <raw name ...>`

use std::env;
use std::process;

use cagent::{resolve, HttpFetch, Options};

fn main() {
    let raw_name = env::args().skip(1).collect::<Vec<_>>().join(" ");
    if raw_name.is_empty() {
        eprintln!("usage: resolve_name <raw name ...>");
        process::exit(2);
    }

    let fetcher = HttpFetch::new();
    let options = Options::default();

    match resolve(&raw_name, &fetcher, &options) {
        Ok(candidates) => match serde_json::to_string_pretty(&candidates) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("failed to serialize candidates: {err}");
                process::exit(1);
            }
        },
        Err(err) => {
            eprintln!("resolution failed: {err}");
            process::exit(1);
        }
    }
}
