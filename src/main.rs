use clap::Parser;
use geopin::link::{self, LinkExpander};
use geopin::server;
use std::time::Duration;

/// GeoPin — map share-link coordinate resolver
///
/// Expands a shortened map link through its single redirect hop and
/// extracts the embedded latitude/longitude from the expanded URL.
///
/// Examples:
///   geopin https://maps.app.goo.gl/qz2zoCrJpmjH7Pmk7
///   geopin --no-expand "https://www.google.com/maps/@40.7484,-73.9857,15z"
///   geopin --timeout 5 https://maps.app.goo.gl/qz2zoCrJpmjH7Pmk7
///   geopin --serve --port 8017
#[derive(Parser)]
#[command(name = "geopin", version, about, long_about = None)]
struct Cli {
    /// Map share link (positional).
    #[arg(index = 1)]
    link: Option<String>,

    /// Skip the redirect hop; extract straight from the given URL.
    #[arg(long)]
    no_expand: bool,

    /// Timeout for the single redirect request, in seconds.
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Run the HTTP API server instead of a one-shot lookup.
    #[arg(long)]
    serve: bool,

    /// Server bind host.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Server bind port.
    #[arg(long, default_value_t = 8017)]
    port: u16,
}

fn main() {
    let cli = Cli::parse();
    let timeout = Duration::from_secs(cli.timeout);

    // ── Server mode ─────────────────────────────────────────────

    if cli.serve {
        let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("Error: Cannot start runtime: {}", e);
            std::process::exit(1);
        });
        runtime.block_on(server::start(&cli.host, cli.port, timeout));
        return;
    }

    // ── One-shot lookup ─────────────────────────────────────────

    let Some(share_link) = cli.link else {
        eprintln!("Error: No link given.");
        eprintln!();
        eprintln!("Usage:");
        eprintln!("  geopin https://maps.app.goo.gl/qz2zoCrJpmjH7Pmk7");
        eprintln!("  geopin --no-expand \"https://www.google.com/maps/@40.7484,-73.9857,15z\"");
        eprintln!("  geopin --serve --port 8017");
        std::process::exit(1);
    };

    let expander = LinkExpander::with_timeout(timeout);
    let pin = link::resolve_share_link(&expander, &share_link, cli.no_expand);

    // ── Banner to stderr ────────────────────────────────────────

    match &pin.expanded_url {
        Some(url) => eprintln!("  Expanded: {}", url),
        None if !cli.no_expand => eprintln!("  Warning: link did not redirect."),
        None => {}
    }
    match &pin.coordinate {
        Some(coord) => {
            let via = pin
                .pattern
                .map(|p| format!(" (via {})", p))
                .unwrap_or_default();
            eprintln!("  \u{1F4CD} {}{}", coord.formatted(), via);
        }
        None => eprintln!("  No coordinate found."),
    }

    // JSON to stdout; a miss is still exit 0 with a null coordinate.
    println!("{}", serde_json::to_string_pretty(&pin).unwrap());
}
