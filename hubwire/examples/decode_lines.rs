//! Decode hub lines from the arguments or stdin
//!
//! ```text
//! HUBWIRE_VERSIONS="26=3,71=2" RUST_LOG=debug \
//!     cargo run --example decode_lines -- "zw device: 03, command: 2603, payload: 10"
//! ```

use std::io::{self, BufRead};

use hubwire::{Decoder, VersionMap};
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Parse `"26=3,71=2"` (hex class, decimal version)
fn versions_from_env() -> VersionMap {
    let Ok(value) = std::env::var("HUBWIRE_VERSIONS") else {
        return VersionMap::new();
    };

    value.split(',')
        .filter(|pair| !pair.trim().is_empty())
        .filter_map(|pair| {
            let parsed = pair.split_once('=').and_then(|(class, version)| {
                let class = u8::from_str_radix(class.trim(), 16).ok()?;
                let version = version.trim().parse().ok()?;
                Some((class, version))
            });
            if parsed.is_none() {
                warn!(pair = pair, "Ignoring bad HUBWIRE_VERSIONS entry");
            }
            parsed
        })
        .collect()
}

fn main() -> hubwire::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let versions = versions_from_env();
    let decoder = Decoder::new();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let lines: Box<dyn Iterator<Item = String>> = if args.is_empty() {
        Box::new(io::stdin().lock().lines().map_while(|line| line.ok()))
    } else {
        Box::new(args.into_iter())
    };

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        match decoder.decode(&line, &versions) {
            Ok(message) => println!("{message}"),
            Err(error) => eprintln!("✗ {error}"),
        }
    }

    Ok(())
}
