use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Console logging for the CLI. `RUST_LOG` overrides the built-in directives.
pub fn init_cli_logger(verbose: bool) {
    let default_directives = if verbose {
        "listing_scrape=debug,info"
    } else {
        "listing_scrape=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
