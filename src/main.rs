//! Interactive name lookup over the reference store.
//!
//! Reads one query per line from stdin, prints the best match with its
//! confidence score followed by the remaining candidates. The dataset path
//! may be given as the sole positional argument; otherwise the configured
//! default is used and, failing that, the built-in fallback list.

use std::env;
use std::io::{self, Write};

use anyhow::Result;
use tracing::{info, warn};

use namesift::matcher;
use namesift::store::{DataOrigin, ReferenceStore};
use namesift::NamesiftConfig;

fn main() -> Result<()> {
    namesift::logging::init_tracing();

    let mut cfg = NamesiftConfig::default();
    if let Some(path) = env::args().nth(1) {
        cfg.store.dataset_path = path.into();
    }

    let store = ReferenceStore::shared(&cfg.store);
    match store.origin() {
        DataOrigin::Primary(path) => {
            info!(dataset = %path.display(), names = store.len(), "database active");
        }
        DataOrigin::Fallback(reason) => {
            warn!(%reason, names = store.len(), "database degraded to built-in names");
        }
    }

    println!("namesift: {} names loaded", store.len());
    println!("Type a name to search, :q to quit.");

    let mut input = String::new();
    loop {
        print!("name> ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // EOF
        }
        let query = input.trim();
        if query == ":q" {
            break;
        }
        if query.is_empty() {
            println!("Please enter a name first.");
            continue;
        }

        let matches = matcher::extract(query, store.iter(), cfg.matcher.limit);
        let Some(&(best, score)) = matches.first() else {
            println!("No close matches found.");
            continue;
        };

        println!("Top result: {best} ({score}%)");
        if matches.len() > 1 {
            println!("Other candidates:");
            for &(name, score) in &matches[1..] {
                println!("  {name:<24} {score:>3}%");
            }
        }
    }
    Ok(())
}
